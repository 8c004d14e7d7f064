//! Choosing the value of an atom, when propagation has nothing left to say.
//!
//! The atom is drawn from the activity heap, discarding entries for atoms which gained a value
//! after entering the heap.
//! As every unvalued atom is on the heap (modulo such stale entries) an empty heap means the
//! valuation is complete, and the formula satisfiable.
//!
//! The value given to the chosen atom is, with phase saving, the value the atom held most
//! recently — before any valuation, the phase drawn for the atom against the polarity lean.

use crate::{
    context::GenericContext,
    structures::literal::{CLiteral, Literal},
};

/// Possible results of asking for a decision.
pub enum DecisionOk {
    /// A decision literal, valuing some unvalued atom.
    Literal(CLiteral),

    /// Every atom is valued, so no decision could be made.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A decision valuing the most active unvalued atom, if some atom is unvalued.
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.atom_db.pop_most_active() {
            Some(atom) => {
                let value = match self.config.phase_saving {
                    true => self.atom_db.previous_value_of(atom),
                    false => self.rng.random_bool(self.config.polarity_lean),
                };

                let decision = CLiteral::new(atom, value);
                log::trace!("Decision {decision}");
                DecisionOk::Literal(decision)
            }

            None => DecisionOk::Exhausted,
        }
    }
}
