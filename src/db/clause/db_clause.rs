//! A stored clause, together with maintenance of its watched literals.
//!
//! The first two slots of a stored clause are the watched slots.
//! The literals of a clause never change, but the two watched slots may be permuted with later
//! slots as the valuation develops, so slot order is not stable.
//!
//! The key invariant, maintained by [update_watch](DBClause::update_watch) and relied on by
//! [propagation](crate::procedures::bcp):
//! <div class="warning">
//! Whenever a watched literal is falsified, either the clause is satisfied by the other watched
//! literal, some unfalsified literal is promoted into the watched slot, or every unwatched
//! literal of the clause is false — in which case the clause is unit or conflicting.
//! </div>

use crate::{
    db::ClauseKey,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
        valuation::Valuation,
    },
};

/// A clause, as stored in the clause database.
pub struct DBClause {
    /// The key of the clause.
    key: ClauseKey,

    /// The literals of the clause, with slots zero and one watched.
    clause: CClause,
}

/// The outcome of updating the watched slots of a clause after a watched literal was falsified.
#[derive(Debug, PartialEq, Eq)]
pub enum WatchUpdate {
    /// The clause is satisfied by its other watched literal; the watch is unchanged.
    Satisfied,

    /// The returned (unfalsified) literal was promoted into the watched slot; the caller moves
    /// the watch entry accordingly.
    Moved(CLiteral),

    /// Every literal but the other watched literal is false; the returned literal is asserted.
    Asserting(CLiteral),

    /// Every literal of the clause is false.
    Conflict,
}

impl DBClause {
    /// A stored clause with the given key.
    pub fn new(key: ClauseKey, clause: CClause) -> Self {
        DBClause { key, clause }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literal at `index`.
    ///
    /// # Safety
    /// No check is made that `index` is within the clause.
    pub unsafe fn get_unchecked(&self, index: usize) -> &CLiteral {
        unsafe { self.clause.get_unchecked(index) }
    }

    /// Revises the watched slots of the clause, given `falsified` — a watched literal of the
    /// clause which has just been falsified.
    ///
    /// After the call the falsified literal is in slot one, unless some unfalsified literal was
    /// found to promote over it.
    pub fn update_watch(
        &mut self,
        falsified: CLiteral,
        valuation: &impl Valuation,
    ) -> WatchUpdate {
        debug_assert!(self.clause[0] == falsified || self.clause[1] == falsified);

        if self.clause[0] == falsified {
            self.clause.swap(0, 1);
        }

        let first = self.clause[0];
        if valuation.value_of_literal(first) == Some(true) {
            return WatchUpdate::Satisfied;
        }

        for index in 2..self.clause.len() {
            if valuation.value_of_literal(self.clause[index]) != Some(false) {
                self.clause.swap(1, index);
                return WatchUpdate::Moved(self.clause[1]);
            }
        }

        match valuation.value_of_literal(first) {
            Some(false) => WatchUpdate::Conflict,
            _ => WatchUpdate::Asserting(first),
        }
    }
}

impl Clause for DBClause {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.clause.iter()
    }

    fn size(&self) -> usize {
        self.clause.len()
    }

    fn canonical(self) -> CClause {
        self.clause
    }
}
