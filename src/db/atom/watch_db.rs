//! Per-atom records of which clauses are watching the atom.
//!
//! # Theory
//!
//! A clause with two or more literals watches two of them, and asks to be woken only when a
//! watched literal is falsified.
//! For, so long as two literals of a clause are unfalsified the clause cannot be unit and cannot
//! conflict, and so has no consequences to propagate.
//!
//! Concretely, a clause watching literal *l* registers its key under the *negation* of *l*: the
//! lists are read during [propagation](crate::procedures::bcp) when some literal becomes true,
//! and the clauses of interest are exactly those watching the literal just falsified.
//!
//! # Implementation
//!
//! Each atom carries two lists of clause keys, split by the polarity of the literal whose truth
//! wakes the clause.
//! Propagation removes and appends entries by swapping with the last element, so list order is
//! not stable across calls.
//!
//! A key in a watch list may dangle after the clause it names is removed; the propagation loop
//! discards such entries as it encounters them.
//!
//! # Literature
//!
//! Watched literals entered general use with [Chaff](https://dl.acm.org/doi/10.1145/378239.379017),
//! and the scheme here follows the two-slot discipline surveyed in
//! [Optimal implementation of watched literals and more general techniques](https://www.jair.org/index.php/jair/article/view/10839).

use crate::db::ClauseKey;

/// The clauses watching an atom, split by the polarity watched for.
#[derive(Default)]
pub struct WatchDB {
    /// Clauses to wake when the atom is valued true.
    pub(super) positive: Vec<ClauseKey>,

    /// Clauses to wake when the atom is valued false.
    pub(super) negative: Vec<ClauseKey>,
}
