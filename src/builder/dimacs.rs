//! Reading a formula from a DIMACS CNF source.
//!
//! The expected form is lenient:
//! - Comment lines open with `c`.
//! - An optional `p cnf <atoms> <clauses>` header sizes the atom database ahead of the clauses.
//! - A clause is a sequence of non-zero signed decimals closed by `0`, split across lines and
//!   whitespace as it pleases.
//! - A line opening with `%` ends the formula, a convention of the SATLIB benchmark files.
//!
//! Each clause is added as it closes, so an unsatisfiable prefix is reported without reading
//! further.

use std::io::BufRead;

use crate::{
    context::GenericContext,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, IntLiteral},
    },
    types::err::{ErrorKind, ParseError},
};

/// A summary of a pass of the DIMACS reader.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The atom count of the header, if a header was read.
    pub expected_atoms: Option<usize>,

    /// The clause count of the header, if a header was read.
    pub expected_clauses: Option<usize>,

    /// A count of atoms in the context after the pass.
    pub added_atoms: usize,

    /// A count of clauses added by the pass.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS representation of a formula into the context.
    ///
    /// ```rust
    /// # use aurochs_sat::config::Config;
    /// # use aurochs_sat::context::{Context, Report};
    /// # use std::io::Write;
    /// let mut ctx = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A pigeonhole, for two pigeons.
    /// p cnf 2 3
    ///  1  2 0
    /// -1 -2 0
    ///  1 -2 0
    /// ");
    ///
    /// assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert!(ctx.solve().is_ok());
    /// assert_eq!(ctx.report(), Report::Satisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: CClause = Vec::default();
        let mut info = ParserInfo::default();
        let mut lines = 0;

        let preexisting_clauses = self.clause_db.original_count();

        // First phase, read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(ParseError::Line(lines).into()),
            }

            match buffer.trim_start().chars().next() {
                None => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut details = buffer.split_whitespace();

                    let atoms: usize = match details.nth(2).map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ParseError::ProblemSpecification.into()),
                    };

                    let clauses: usize = match details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ParseError::ProblemSpecification.into()),
                    };

                    buffer.clear();

                    if atoms > 0 {
                        self.ensure_atom(atoms as Atom - 1);
                    }
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => break 'preamble_loop,
            }
        }

        // Second phase, read until the formula ends.
        // The line is read at the end of the loop, as the preamble leaves a relevant line in the
        // buffer.
        'formula_loop: loop {
            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,

                Some('c') | None => {}

                Some(_) => {
                    for item in buffer.split_whitespace() {
                        let literal = match item.parse::<IntLiteral>() {
                            Ok(0) => {
                                let clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(clause)?;
                                continue;
                            }
                            Ok(int) => CLiteral::from(int),
                            Err(_) => return Err(ParseError::Token(item.to_owned()).into()),
                        };

                        clause_buffer.push(literal);
                    }
                }
            }

            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(ParseError::Line(lines).into()),
            }
        }

        if !clause_buffer.is_empty() {
            return Err(ParseError::MissingDelimiter.into());
        }

        info.added_atoms = self.atom_db.count();
        info.added_clauses = self.clause_db.original_count() - preexisting_clauses;

        Ok(info)
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;
    use crate::{config::Config, context::Context};

    use std::io::Write;

    #[test]
    fn missing_delimiter() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"1  2");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::MissingDelimiter))
        );
    }

    #[test]
    fn bad_problem_specification() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
p cnf
  1  2 0",
        );

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn stray_token() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"1 two 0");

        assert!(matches!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::Token(_)))
        ));
    }

    #[test]
    fn empty_source() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"\n\n");

        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
    }

    #[test]
    fn headerless_formula() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
 1  2 0
-1
    2 0
",
        );

        let info = ctx.read_dimacs(dimacs.as_slice()).expect("A parse");
        assert_eq!(info.expected_atoms, None);
        assert_eq!(info.added_clauses, 2);
        assert_eq!(ctx.atom_db.count(), 2);
    }

    #[test]
    fn header_sizes_atoms() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 10 0");

        let info = ctx.read_dimacs(dimacs.as_slice()).expect("A parse");
        assert_eq!(info.expected_atoms, Some(10));
        assert_eq!(ctx.atom_db.count(), 10);
    }

    #[test]
    fn unsatisfiable_prefix_reported() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
 1       0
-1  2    0
-1 -2  3 0
      -3 0
",
        );

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Build(crate::types::err::BuildError::Unsatisfiable))
        );
    }

    #[test]
    fn round_trip() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
 1 -2  3 0
-1  2 0
-2 -3 0
 1  2 -3 0
",
        );
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        let mut serialised = String::default();
        for db_clause in ctx.clause_db.all_clauses() {
            use crate::structures::clause::Clause;
            serialised.push_str(&db_clause.as_dimacs());
            serialised.push('\n');
        }

        let mut reparse = Context::from_config(Config::default());
        assert!(reparse.read_dimacs(serialised.as_bytes()).is_ok());

        let originals = |the_context: &Context| {
            use crate::structures::{clause::Clause, literal::Literal};
            let mut collected: Vec<Vec<i32>> = the_context
                .clause_db
                .all_clauses()
                .map(|c| c.literals().map(|l| l.as_int() as i32).collect())
                .collect();
            collected.sort();
            collected
        };

        assert_eq!(originals(&ctx), originals(&reparse));
    }

    #[test]
    fn tautologies_dropped() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"1 -1 2 0");

        let info = ctx.read_dimacs(dimacs.as_slice()).expect("A parse");
        assert_eq!(info.added_clauses, 0);
    }
}
