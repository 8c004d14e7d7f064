//! Clauses, disjunctions of literals.
//!
//! The clause trait covers anything which can present a sequence of literals: a vector of
//! literals, a single literal, or a [stored clause](crate::db::clause::db_clause::DBClause).
//! The canonical form of a clause for ownership purposes is [CClause], a vector of canonical
//! literals.
//!
//! A clause is satisfied on a valuation just in case some literal in the clause is satisfied,
//! and unsatisfiable just in case every literal conflicts with the valuation.

use crate::structures::literal::{CLiteral, Literal};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The way a clause entered the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// Part of the original formula.
    Original,

    /// Derived by resolution during conflict analysis.
    Resolution,
}

/// Something which can present a sequence of literals.
pub trait Clause {
    /// The literals of the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// A count of the literals in the clause.
    fn size(&self) -> usize;

    /// The clause in canonical form.
    fn canonical(self) -> CClause;

    /// The clause as a DIMACS line, zero terminated.
    fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(format!("{} ", literal.as_int()).as_str());
        }
        the_string += "0";
        the_string
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
