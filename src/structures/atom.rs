//! Atoms, the variables of a formula.
//!
//! An atom is an index, created on demand by a [context](crate::context::GenericContext) either
//! explicitly or as a side effect of adding a clause which mentions the atom.
//! Internal structures which record per-atom information are vectors indexed by atoms, and so
//! atoms double as (transparent) indices into those structures.

/// An atom, aka. a variable.
pub type Atom = u32;

/// The upper limit on atoms.
///
/// Limited by the encoding of literals, which requires an atom fit in the representation of a
/// literal after a left shift.
pub const ATOM_MAX: Atom = Atom::MAX >> 1;
