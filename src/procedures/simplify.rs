//! Simplification of the clause database against the level-zero valuation.
//!
//! Any clause containing a literal true at level zero is satisfied on every extension of the
//! valuation, and so may be removed outright — original and addition clauses alike.
//!
//! False literals *within* unsatisfied clauses are left alone: deleting them would require
//! re-watching the clause, and the watched slots skip over them cheaply as propagation visits.
//!
//! The driver schedules a simplification whenever fresh literals have been valued at level zero
//! since the last pass.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Removes every clause satisfied at level zero.
    ///
    /// # Panics
    /// If called above level zero, where satisfaction is not permanent.
    pub fn simplify(&mut self) {
        assert_eq!(self.trail.level(), 0, "Simplification above level zero");

        let mut removed = 0;

        for key in self.clause_db.all_keys() {
            let Some(db_clause) = self.clause_db.get(key) else {
                continue;
            };

            let satisfied = db_clause
                .literals()
                .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true));

            if satisfied {
                // If the clause propagated its first literal the recorded reason would dangle,
                // though the literal itself remains a consequence of the formula.
                let first = unsafe { *db_clause.get_unchecked(0) };
                if self.atom_db.reason_of(first.atom()) == Some(key) {
                    self.atom_db.clear_reason(first.atom());
                }

                let _ = self.clause_db.remove(key, &mut self.atom_db);
                removed += 1;
            }
        }

        log::debug!(target: targets::SIMPLIFICATION, "Removed {removed} satisfied clauses");
    }
}
