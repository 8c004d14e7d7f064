//! The trail: literals in the order their atoms were valued, partitioned into decision levels.
//!
//! The trail doubles as the propagation queue.
//! `q_head` indexes the next literal whose consequences are yet to be examined, so the literals
//! behind `q_head` have been propagated and the literals from `q_head` on are pending.
//!
//! Levels are recorded as offsets into the literal vector: `level_indices[l]` is the position of
//! the decision opening level `l + 1`, and the current decision level is the count of offsets.
//! Level zero has no offset, as level-zero literals are consequences of the formula rather than
//! of any decision.

use crate::{db::LevelIndex, structures::literal::CLiteral};

#[derive(Default)]
pub struct Trail {
    /// Valued literals, in order of valuation.
    literals: Vec<CLiteral>,

    /// The offset at which each decision level begins.
    level_indices: Vec<usize>,

    /// The index of the next literal to propagate.
    q_head: usize,
}

impl Trail {
    /// Appends a literal to the trail, as part of the current level.
    pub fn push_literal(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a fresh decision level at the current end of the trail.
    pub fn push_fresh_level(&mut self) {
        self.level_indices.push(self.literals.len());
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len() as LevelIndex
    }

    /// A count of literals on the trail.
    pub fn assignment_count(&self) -> usize {
        self.literals.len()
    }

    /// The literals of the trail, in order of valuation.
    pub fn assignments(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The next literal to propagate, advancing the queue pointer.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        if self.q_head < self.literals.len() {
            let literal = self.literals[self.q_head];
            self.q_head += 1;
            Some(literal)
        } else {
            None
        }
    }

    /// Removes every level above `target`, returning the literals removed.
    ///
    /// The queue pointer is reset to the end of the shortened trail, so propagation resumes from
    /// whatever is pushed next.
    ///
    /// # Soundness
    /// Does not clear the valuation of any removed literal — the caller restores the atom
    /// database to match.
    pub fn clear_levels_above(&mut self, target: LevelIndex) -> Vec<CLiteral> {
        match self.level_indices.get(target as usize) {
            Some(&offset) => {
                self.level_indices.truncate(target as usize);
                let removed = self.literals.split_off(offset);
                self.q_head = self.literals.len();
                removed
            }
            None => Vec::default(),
        }
    }
}
