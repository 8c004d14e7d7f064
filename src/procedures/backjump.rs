//! Recovery from a conflict, by returning the trail to an earlier level.
//!
//! A backjump from the current level to some lower target level unvalues every atom valued above
//! the target, returns each unvalued atom to the activity heap, and resets the propagation
//! queue to the end of the shortened trail.
//!
//! The *value* each atom held is preserved as its saved phase, so a later decision on the atom
//! prefers the value it lost — only the level, reason, and presence on the trail are cleared.
//!
//! Restarts are backjumps with a target of level zero.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// Safe to call with a target at or above the current level, in which case nothing happens.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump to {target} from {}", self.trail.level());

        for literal in self.trail.clear_levels_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }
}
