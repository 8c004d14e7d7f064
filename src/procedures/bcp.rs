//! Boolean constraint propagation.
//!
//! # Overview
//!
//! Propagation takes each literal queued on the trail in turn and examines the clauses watching
//! for that literal to become true — clauses in which the negation of the literal was watched,
//! and so has just been falsified.
//!
//! For each woken clause [update_watch](crate::db::clause::db_clause::DBClause::update_watch)
//! revises the watched slots, and propagation acts on the outcome:
//! - The clause is satisfied by its other watched literal, or some unfalsified literal was
//!   promoted into the watched slot: nothing follows, though in the latter case the watch entry
//!   is relocated to the promoted literal.
//! - Every unwatched literal is false and the other watched literal has no value: the clause
//!   asserts that literal, which is valued and queued with the clause as reason.
//! - Every literal is false: the clause conflicts with the valuation, and propagation stops with
//!   the clause in hand.
//!
//! Entries are removed from a watch list by swapping with the last entry, so a relocated watch
//! leaves the current index pointing at an unexamined entry and the index advances only when the
//! watch stays put.
//!
//! # Complications
//!
//! A pointer to the watch list is taken, rather than a borrow, to avoid a clash between:
//! 1. A borrow of the list for the duration of the examination of the watching clauses.
//! 2. Mutable borrows of the atom database to value asserted literals and to relocate watches.
//!
//! The *pointed-to* list is never revised through (2): the value of the queued literal's atom is
//! set before its watchers are examined, so no watch is ever relocated to either literal of that
//! atom, and only relocations revise watch lists during propagation.
//! Each access through the pointer is kept within a statement, with no reference held across
//! revisions of other lists.

use crate::{
    context::GenericContext,
    db::{atom::AtomValue, clause::db_clause::WatchUpdate},
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::BCPError,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates queued literals until the queue is empty or a conflict is found.
    ///
    /// Watch invariants are maintained for every clause other than a returned conflict, and the
    /// trail retains everything valued before the conflict.
    pub fn bcp(&mut self) -> Result<(), BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");
            let falsified = literal.negate();

            // Safety: the atom of a queued literal is in the database.
            // For the use of a pointer, see the module note.
            let watch_list = unsafe { self.atom_db.watchers_unchecked(literal) };

            let mut index = 0;
            let mut length = unsafe { (*watch_list).len() };

            'watch_loop: while index < length {
                let key = unsafe { *(&(*watch_list)).get_unchecked(index) };

                let Some(db_clause) = self.clause_db.get_mut(key) else {
                    // The clause behind the key was removed, the entry is stale.
                    unsafe { (*watch_list).swap_remove(index) };
                    length -= 1;
                    continue 'watch_loop;
                };

                match db_clause.update_watch(falsified, self.atom_db.valuation()) {
                    WatchUpdate::Satisfied => {
                        index += 1;
                    }

                    WatchUpdate::Moved(promoted) => {
                        unsafe { (*watch_list).swap_remove(index) };
                        length -= 1;
                        self.atom_db.add_watcher(promoted, key);
                        // The removal swapped an unexamined entry to the current index.
                    }

                    WatchUpdate::Asserting(asserted) => {
                        match self.value_and_queue(asserted, Some(key)) {
                            AtomValue::NotSet | AtomValue::Same => {}
                            AtomValue::Different => {
                                return Err(BCPError::Conflict(key));
                            }
                        }
                        index += 1;
                    }

                    WatchUpdate::Conflict => {
                        log::trace!(target: targets::PROPAGATION, "Conflict via {key} on {literal}");
                        return Err(BCPError::Conflict(key));
                    }
                }
            }
        }

        Ok(())
    }
}
