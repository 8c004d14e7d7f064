//! Atom activity, in the style of VSIDS.
//!
//! Atoms examined during conflict analysis receive a bump, and the bump increment inflates after
//! each conflict — inflating the increment decays the weight of every earlier bump without
//! touching the stored activities.
//! When an activity would pass the representable ceiling, every activity and the increment are
//! rescaled together, preserving their order.
//!
//! # Literature
//!
//! The heuristic originates with [Chaff](https://dl.acm.org/doi/10.1145/378239.379017), where the
//! sum is periodically halved; the inflate-the-increment formulation is MiniSAT's.

use crate::{config::Activity, db::atom::AtomDB, structures::atom::Atom};

/// The ceiling beyond which activities are rescaled.
const ACTIVITY_CEILING: Activity = 1e100;

/// The factor applied to every activity, and the increment, on rescale.
const RESCALE_FACTOR: Activity = 1e-100;

impl AtomDB {
    /// Bumps the activity of `atom` by the current increment, rescaling all activities first if
    /// the bump would pass the ceiling.
    pub fn bump_activity(&mut self, atom: Atom) {
        if self.activity_heap.value_of(atom as usize) + self.bump > ACTIVITY_CEILING {
            self.activity_heap
                .revalue_all(|activity| activity * RESCALE_FACTOR);
            self.bump *= RESCALE_FACTOR;
        }

        let bumped = self.activity_heap.value_of(atom as usize) + self.bump;
        self.activity_heap.set_value(atom as usize, bumped);
        self.activity_heap.resift(atom as usize);
    }

    /// Inflates the bump increment, decaying the relative weight of earlier bumps.
    ///
    /// Called once per conflict.
    pub fn decay_activity(&mut self) {
        self.bump *= 1.0 / self.decay_factor;
    }

    /// The most active atom without a value, removed from the heap.
    ///
    /// Entries for atoms which have been valued since entering the heap are discarded along the
    /// way, rather than eagerly on valuation.
    pub fn pop_most_active(&mut self) -> Option<Atom> {
        while let Some(index) = self.activity_heap.pop_max() {
            let atom = index as Atom;
            if self.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }
}
