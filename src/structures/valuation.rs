//! Valuations, maps from atoms to truth values.
//!
//! A (partial) valuation is stored as a vector of optional booleans indexed by atoms, with `None`
//! for an atom without a value.
//! The trait exists so structures which hold a valuation may return it without exposing the
//! backing vector.

use std::borrow::Borrow;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type VValuation = Vec<Option<bool>>;

/// Something which maps atoms to truth values, partially.
pub trait Valuation {
    /// The value of `atom` on the valuation, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal on the valuation.
    ///
    /// `Some(true)` if the literal agrees with the valued atom, `Some(false)` if it disagrees,
    /// and `None` if the atom has no value.
    fn value_of_literal(&self, literal: impl Borrow<CLiteral>) -> Option<bool> {
        let literal = literal.borrow();
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// An iterator over the values of the valuation, in atom order.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator over atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of atoms in the valuation.
    fn atom_count(&self) -> usize;
}

impl Valuation for VValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().copied()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().enumerate().filter_map(|(atom, value)| {
            if value.is_none() {
                Some(atom as Atom)
            } else {
                None
            }
        })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
