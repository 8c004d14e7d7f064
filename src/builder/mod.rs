//! Building a formula in a context, clause by clause.
//!
//! Clauses are normalised against the level-zero valuation as they arrive:
//!
//! - Duplicate literals are dropped, and a clause containing complementary literals is a
//!   tautology — true on every valuation, and skipped.
//! - A literal false at level zero can never satisfy the clause and is dropped; a literal true
//!   at level zero always does, and the clause is skipped.
//! - What remains decides the fate of the clause: an empty clause is unsatisfiable, and with it
//!   the formula; a unit clause values its literal at level zero; anything longer is stored.
//!
//! Normalisation applies only here.
//! In particular, clauses produced by conflict analysis arrive through the clause database
//! directly: analysis never produces a duplicate or complementary pair, and the slot order of a
//! learnt clause is significant.

pub mod dimacs;

use crate::{
    context::{ContextState, GenericContext},
    db::atom::AtomValue,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSource},
        literal::Literal,
    },
    types::err::{BuildError, ErrorKind},
};

/// Possible 'Ok' results from adding a clause to a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was skipped, as satisfiability is unaffected by the clause.
    Skipped,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the formula of the context, normalised against the level-zero valuation.
    ///
    /// Atoms mentioned by the clause are created as required.
    ///
    /// An error reports the formula has become unsatisfiable: the clause normalised to the empty
    /// clause, or conflicts with the level-zero valuation.
    /// The state of the context records this, and is sticky — a later
    /// [solve](crate::procedures::solve) makes no search.
    ///
    /// # Panics
    /// If called above level zero — normalisation is sound against the level-zero valuation
    /// only.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        assert_eq!(self.trail.level(), 0, "Clause addition above level zero");

        if self.state == ContextState::Unsatisfiable {
            return Err(BuildError::Unsatisfiable.into());
        }
        self.state = ContextState::Input;

        let mut clause = clause.canonical();
        for literal in &clause {
            self.ensure_atom(literal.atom());
        }

        clause.sort_unstable();
        clause.dedup();

        // After the dedup, literals sharing an atom are complementary.
        for pair in clause.windows(2) {
            if pair[0].atom() == pair[1].atom() {
                log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {}", clause.as_dimacs());
                return Ok(ClauseOk::Skipped);
            }
        }

        if clause
            .iter()
            .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true))
        {
            log::trace!(target: targets::CLAUSE_DB, "Satisfied clause skipped: {}", clause.as_dimacs());
            return Ok(ClauseOk::Skipped);
        }
        clause.retain(|literal| self.atom_db.value_of_literal(*literal).is_none());

        match clause.len() {
            0 => {
                self.state = ContextState::Unsatisfiable;
                Err(BuildError::Unsatisfiable.into())
            }

            1 => match self.value_and_queue(clause[0], None) {
                AtomValue::NotSet => Ok(ClauseOk::Added),
                AtomValue::Same => Ok(ClauseOk::Skipped),
                AtomValue::Different => {
                    self.state = ContextState::Unsatisfiable;
                    Err(BuildError::Unsatisfiable.into())
                }
            },

            _ => {
                self.clause_db
                    .store(clause, ClauseSource::Original, &mut self.atom_db)?;
                Ok(ClauseOk::Added)
            }
        }
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{
        config::Config,
        context::Context,
        structures::literal::{CLiteral, Literal},
    };

    #[test]
    fn tautology_skipped() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, false);

        assert_eq!(ctx.add_clause(vec![p, q, p.negate()]), Ok(ClauseOk::Skipped));
        assert_eq!(ctx.clause_db.original_count(), 0);
    }

    #[test]
    fn duplicates_dropped() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        assert_eq!(ctx.add_clause(vec![p, p, q, q]), Ok(ClauseOk::Added));

        let stored = ctx.clause_db.all_clauses().next().expect("A clause");
        assert_eq!(stored.size(), 2);
    }

    #[test]
    fn subsumed_at_level_zero_skipped() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        assert_eq!(ctx.add_clause(p), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(vec![p, q]), Ok(ClauseOk::Skipped));
        assert_eq!(ctx.clause_db.original_count(), 0);
    }

    #[test]
    fn false_literals_dropped() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        assert_eq!(ctx.add_clause(p.negate()), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(vec![p, q, r]), Ok(ClauseOk::Added));

        let stored = ctx.clause_db.all_clauses().next().expect("A clause");
        assert_eq!(stored.size(), 2);
    }

    #[test]
    fn contradiction_is_sticky() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(0, true);

        assert_eq!(ctx.add_clause(p), Ok(ClauseOk::Added));
        assert!(ctx.add_clause(p.negate()).is_err());

        // Decided, and no later addition is entertained.
        assert!(ctx.add_clause(CLiteral::new(1, true)).is_err());
    }
}
