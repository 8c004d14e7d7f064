//! A database of clause related things.
//!
//! Clauses live in one of two arenas, by [source](ClauseSource): the original formula, or
//! additions made by conflict analysis.
//! Arena slots are optional so a removed clause leaves a tombstone, and keys held elsewhere
//! (watch lists, reasons) dangle harmlessly: lookup through a key returns nothing rather than a
//! recycled clause of the other arena.
//! Addition slots are recycled through a free list, as additions come and go with
//! [reduction](ClauseDB::reduce); original slots are vacated only by
//! [simplification](crate::procedures::simplify) and never reused.
//!
//! Only clauses of two or more literals are stored.
//! A unit clause is recorded by valuing its literal at level zero, and an empty clause decides
//! the formula.

pub mod db_clause;

use db_clause::DBClause;

use crate::{
    db::{atom::AtomDB, ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::Literal,
    },
    types::err::ClauseDBError,
};

/// The clause database.
pub struct ClauseDB {
    /// Clauses of the original formula.
    original: Vec<Option<DBClause>>,

    /// Clauses added by conflict analysis.
    addition: Vec<Option<DBClause>>,

    /// Keys to vacated addition slots, for reuse.
    empty_addition_keys: Vec<ClauseKey>,

    /// A count of live original clauses.
    original_count: usize,

    /// A count of live addition clauses.
    // Not inferable from the addition vector, as slots are reused.
    addition_count: usize,
}

impl Default for ClauseDB {
    fn default() -> Self {
        ClauseDB {
            original: Vec::default(),
            addition: Vec::default(),
            empty_addition_keys: Vec::default(),
            original_count: 0,
            addition_count: 0,
        }
    }
}

impl ClauseDB {
    /// Stores `clause`, watching its first two literals, and returns the key to the stored
    /// clause.
    ///
    /// # Panics
    /// If the clause has fewer than two literals — such clauses are never stored.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        atom_db: &mut AtomDB,
    ) -> Result<ClauseKey, ClauseDBError> {
        assert!(clause.len() >= 2, "Attempt to store a short clause");

        let key = match source {
            ClauseSource::Original => {
                let index: FormulaIndex = match self.original.len().try_into() {
                    Ok(index) => index,
                    Err(_) => return Err(ClauseDBError::StorageExhausted),
                };
                ClauseKey::Original(index)
            }

            ClauseSource::Resolution => match self.empty_addition_keys.pop() {
                Some(key) => key,
                None => {
                    let index: FormulaIndex = match self.addition.len().try_into() {
                        Ok(index) => index,
                        Err(_) => return Err(ClauseDBError::StorageExhausted),
                    };
                    ClauseKey::Addition(index)
                }
            },
        };

        atom_db.add_watcher(clause[0], key);
        atom_db.add_watcher(clause[1], key);

        let db_clause = DBClause::new(key, clause);
        log::trace!(target: targets::CLAUSE_DB, "Stored: {} {}", key, db_clause.as_dimacs());

        match key {
            ClauseKey::Original(_) => {
                self.original.push(Some(db_clause));
                self.original_count += 1;
            }
            ClauseKey::Addition(index) => {
                if (index as usize) < self.addition.len() {
                    self.addition[index as usize] = Some(db_clause);
                } else {
                    self.addition.push(Some(db_clause));
                }
                self.addition_count += 1;
            }
        }

        Ok(key)
    }

    /// The stored clause keyed by `key`, unless removed.
    pub fn get(&self, key: ClauseKey) -> Option<&DBClause> {
        match key {
            ClauseKey::Original(index) => self.original.get(index as usize)?.as_ref(),
            ClauseKey::Addition(index) => self.addition.get(index as usize)?.as_ref(),
        }
    }

    /// The stored clause keyed by `key`, mutably, unless removed.
    pub fn get_mut(&mut self, key: ClauseKey) -> Option<&mut DBClause> {
        match key {
            ClauseKey::Original(index) => self.original.get_mut(index as usize)?.as_mut(),
            ClauseKey::Addition(index) => self.addition.get_mut(index as usize)?.as_mut(),
        }
    }

    /// Removes the clause keyed by `key`, unhooking its watches.
    ///
    /// The slot of an addition is marked for reuse; the slot of an original is left as a
    /// tombstone.
    pub fn remove(&mut self, key: ClauseKey, atom_db: &mut AtomDB) -> Result<(), ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get_mut(index as usize),
            ClauseKey::Addition(index) => self.addition.get_mut(index as usize),
        };

        let Some(db_clause) = slot.and_then(std::mem::take) else {
            log::error!(target: targets::CLAUSE_DB, "Remove called on a missing clause: {key}");
            return Err(ClauseDBError::Missing);
        };

        // Safety: stored clauses have at least two literals.
        unsafe {
            atom_db.remove_watcher(*db_clause.get_unchecked(0), key);
            atom_db.remove_watcher(*db_clause.get_unchecked(1), key);
        }

        match key {
            ClauseKey::Original(_) => self.original_count -= 1,
            ClauseKey::Addition(_) => {
                self.empty_addition_keys.push(key);
                self.addition_count -= 1;
            }
        }

        Ok(())
    }

    /// A count of live original clauses.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of live addition clauses.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// The keys of every live stored clause.
    pub fn all_keys(&self) -> Vec<ClauseKey> {
        let mut keys = Vec::with_capacity(self.original_count + self.addition_count);
        for slot in &self.original {
            if let Some(db_clause) = slot {
                keys.push(db_clause.key());
            }
        }
        for slot in &self.addition {
            if let Some(db_clause) = slot {
                keys.push(db_clause.key());
            }
        }
        keys
    }

    /// An iterator over every live stored clause.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.original
            .iter()
            .chain(self.addition.iter())
            .filter_map(|slot| slot.as_ref())
    }

    /// True if the clause propagated the value of its first literal.
    ///
    /// A locked clause must not be removed: it is the recorded reason for a value on the trail.
    pub fn locked(&self, db_clause: &DBClause, atom_db: &AtomDB) -> bool {
        // Safety: stored clauses have at least two literals.
        let first = unsafe { *db_clause.get_unchecked(0) };
        atom_db.value_of_literal(first) == Some(true)
            && atom_db.reason_of(first.atom()) == Some(db_clause.key())
    }

    /// Removes addition clauses, keeping the smaller half of the additions together with every
    /// addition which is binary or locked.
    ///
    /// Returns a count of the clauses removed.
    pub fn reduce(&mut self, atom_db: &mut AtomDB) -> usize {
        let mut candidates: Vec<(ClauseKey, usize)> = self
            .addition
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|db_clause| (db_clause.key(), db_clause.size()))
            .collect();
        candidates.sort_unstable_by_key(|(_, size)| *size);

        let keep = candidates.len() / 2;
        let mut removed = 0;

        for (key, size) in candidates.drain(..).skip(keep) {
            if size <= 2 {
                continue;
            }
            // Safety: the key was read from a live slot above.
            let db_clause = unsafe { self.get(key).unwrap_unchecked() };
            if self.locked(db_clause, atom_db) {
                continue;
            }

            // Removal of a key from a live slot cannot fail.
            let _ = self.remove(key, atom_db);
            removed += 1;
        }

        log::info!(target: targets::REDUCTION, "Additions reduced by {removed} to {}", self.addition_count);
        removed
    }
}

#[cfg(test)]
mod clause_db_tests {
    use super::*;
    use crate::{
        config::Config,
        structures::literal::{CLiteral, Literal},
    };

    fn fresh_atoms(atom_db: &mut AtomDB, count: usize) {
        for _ in 0..count {
            atom_db.fresh_atom(false).expect("Atoms remain");
        }
    }

    #[test]
    fn watches_at_first_two_slots() {
        let mut atom_db = AtomDB::new(&Config::default());
        let mut clause_db = ClauseDB::default();
        fresh_atoms(&mut atom_db, 3);

        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, false);
        let r = CLiteral::new(2, true);

        let key = clause_db
            .store(vec![p, q, r], ClauseSource::Original, &mut atom_db)
            .expect("Storage");

        // The lists woken by the negations of the watched literals hold the key, no others.
        unsafe {
            assert!((*atom_db.watchers_unchecked(p.negate())).contains(&key));
            assert!((*atom_db.watchers_unchecked(q.negate())).contains(&key));
            assert!((*atom_db.watchers_unchecked(r.negate())).is_empty());
            assert!((*atom_db.watchers_unchecked(p)).is_empty());
            assert!((*atom_db.watchers_unchecked(q)).is_empty());
        }

        clause_db.remove(key, &mut atom_db).expect("Removal");
        unsafe {
            assert!((*atom_db.watchers_unchecked(p.negate())).is_empty());
            assert!((*atom_db.watchers_unchecked(q.negate())).is_empty());
        }
    }

    #[test]
    fn reduction_spares_locked_and_binary() {
        let mut atom_db = AtomDB::new(&Config::default());
        let mut clause_db = ClauseDB::default();
        fresh_atoms(&mut atom_db, 8);

        let literal = |atom, polarity| CLiteral::new(atom, polarity);

        // A binary addition, and two long additions, one of which will be locked.
        let binary_key = clause_db
            .store(
                vec![literal(0, true), literal(1, true)],
                ClauseSource::Resolution,
                &mut atom_db,
            )
            .expect("Storage");

        let locked_key = clause_db
            .store(
                vec![literal(2, true), literal(3, false), literal(4, false)],
                ClauseSource::Resolution,
                &mut atom_db,
            )
            .expect("Storage");

        let loose_key = clause_db
            .store(
                vec![literal(5, true), literal(6, false), literal(7, false)],
                ClauseSource::Resolution,
                &mut atom_db,
            )
            .expect("Storage");

        // Lock by valuing the first literal with the clause as reason.
        atom_db.set_value(2, true, 0, Some(locked_key));

        clause_db.reduce(&mut atom_db);

        assert!(clause_db.get(binary_key).is_some());
        assert!(clause_db.get(locked_key).is_some());
        assert!(clause_db.get(loose_key).is_none());
    }
}
