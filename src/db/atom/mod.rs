//! A database of atom related things, accessed via fields on an [AtomDB] struct.
//!
//! Things include:
//! - The current (often partial) [valuation](Valuation), and the previous value of each atom.
//! - The decision level and reason, if any, of each valued atom.
//! - Watch lists for each atom, in the form of [WatchDB] structs.
//! - An [IndexHeap] recording the activity of atoms, where any atom without a value is a
//!   candidate on the heap.
//!
//! Atom-indexed vectors are grown in lockstep by [fresh_atom](AtomDB::fresh_atom), so access by
//! any atom handed out is in bounds for each structure.

pub mod activity;
pub mod watch_db;

use watch_db::WatchDB;

use crate::{
    config::{Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        valuation::{VValuation, Valuation},
    },
    types::err::AtomDBError,
};

/// The atom database.
pub struct AtomDB {
    /// Watch lists for each atom.
    watch_dbs: Vec<WatchDB>,

    /// The current valuation.
    valuation: VValuation,

    /// The value each atom held most recently, for phase saving.
    ///
    /// Initialised before the atom is ever valued, according to the polarity lean.
    previous_valuation: Vec<bool>,

    /// The decision level at which each atom was valued, if valued.
    decision_indices: Vec<Option<LevelIndex>>,

    /// The clause which forced the value of each atom, if the value was propagated.
    reasons: Vec<Option<ClauseKey>>,

    /// Per-atom scratch marks, used by conflict analysis and cleared before analysis returns.
    analysis_marks: Vec<bool>,

    /// Atom activity, with every unvalued atom a candidate on the heap.
    activity_heap: IndexHeap<Activity>,

    /// The current activity increment.
    bump: Activity,

    /// The factor by which the increment inflates after each conflict.
    decay_factor: Activity,
}

/// The value of an atom, relative to some given value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom had no value.
    NotSet,

    /// The atom already holds the given value.
    Same,

    /// The atom holds the complement of the given value.
    Different,
}

impl AtomDB {
    /// A new [AtomDB], configured by `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            watch_dbs: Vec::default(),

            valuation: Vec::default(),
            previous_valuation: Vec::default(),
            decision_indices: Vec::default(),
            reasons: Vec::default(),
            analysis_marks: Vec::default(),

            activity_heap: IndexHeap::default(),
            bump: config.bump,
            decay_factor: config.decay,
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The value of a literal on the current valuation, if its atom is valued.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.valuation.value_of_literal(literal)
    }

    /// The decision level at which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        // Safety: the vector covers every atom handed out.
        unsafe { *self.decision_indices.get_unchecked(atom as usize) }
    }

    /// The clause which propagated the value of `atom`, if the value was propagated.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        // Safety: as with level_of.
        unsafe { *self.reasons.get_unchecked(atom as usize) }
    }

    /// Clears the reason of `atom`.
    ///
    /// Used when the reason clause is removed while the atom remains valued at level zero.
    pub fn clear_reason(&mut self, atom: Atom) {
        self.reasons[atom as usize] = None;
    }

    /// The value `atom` held most recently, for phase saving.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        // Safety: as with level_of.
        unsafe { *self.previous_valuation.get_unchecked(atom as usize) }
    }

    /// A fresh atom, with `previous_value` as the phase to prefer before the atom is ever valued.
    ///
    /// Grows every atom-indexed structure, so access through the returned atom is in bounds.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match self.valuation.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.activity_heap.ensure(atom as usize);
        self.activity_heap.enter(atom as usize);

        self.watch_dbs.push(WatchDB::default());
        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.decision_indices.push(None);
        self.reasons.push(None);
        self.analysis_marks.push(false);

        Ok(atom)
    }

    /// True if `atom` is marked for analysis.
    pub fn marked(&self, atom: Atom) -> bool {
        // Safety: the vector covers every atom handed out.
        unsafe { *self.analysis_marks.get_unchecked(atom as usize) }
    }

    /// Marks `atom` for analysis.
    pub fn mark(&mut self, atom: Atom) {
        // Safety: as with marked.
        unsafe { *self.analysis_marks.get_unchecked_mut(atom as usize) = true }
    }

    /// Clears the analysis mark of `atom`.
    pub fn clear_mark(&mut self, atom: Atom) {
        // Safety: as with marked.
        unsafe { *self.analysis_marks.get_unchecked_mut(atom as usize) = false }
    }

    /// Values `atom` as `value` at `level` for `reason`, unless the atom is already valued.
    ///
    /// The result distinguishes a fresh valuation from agreement and from conflict with an
    /// existing value; level and reason are recorded only for a fresh valuation.
    pub fn set_value(
        &mut self,
        atom: Atom,
        value: bool,
        level: LevelIndex,
        reason: Option<ClauseKey>,
    ) -> AtomValue {
        match self.value_of(atom) {
            None => {
                // Safety: the vectors cover every atom handed out.
                unsafe {
                    *self.valuation.get_unchecked_mut(atom as usize) = Some(value);
                    *self.decision_indices.get_unchecked_mut(atom as usize) = Some(level);
                    *self.reasons.get_unchecked_mut(atom as usize) = reason;
                }
                AtomValue::NotSet
            }
            Some(present) if present == value => AtomValue::Same,
            Some(_) => AtomValue::Different,
        }
    }

    /// Clears the value of `atom`, preserving the value as the phase to prefer, and returns the
    /// atom to the activity heap.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
        // Safety: the vectors cover every atom handed out.
        unsafe {
            if let Some(value) = *self.valuation.get_unchecked(atom as usize) {
                *self.previous_valuation.get_unchecked_mut(atom as usize) = value;
            }
            *self.valuation.get_unchecked_mut(atom as usize) = None;
            *self.decision_indices.get_unchecked_mut(atom as usize) = None;
            *self.reasons.get_unchecked_mut(atom as usize) = None;
        }
        self.activity_heap.enter(atom as usize);
    }
}

/// Watch list methods.
impl AtomDB {
    /// Notes `key` should be woken when `watched` is falsified.
    pub fn add_watcher(&mut self, watched: CLiteral, key: ClauseKey) {
        let watch_db = &mut self.watch_dbs[watched.atom() as usize];
        match watched.polarity() {
            // A positive watched literal is falsified when its atom is valued false.
            true => watch_db.negative.push(key),
            false => watch_db.positive.push(key),
        }
    }

    /// Removes any entry for `key` from the list woken when `watched` is falsified.
    pub fn remove_watcher(&mut self, watched: CLiteral, key: ClauseKey) {
        let watch_db = &mut self.watch_dbs[watched.atom() as usize];
        let list = match watched.polarity() {
            true => &mut watch_db.negative,
            false => &mut watch_db.positive,
        };

        let mut index = 0;
        let mut limit = list.len();
        while index < limit {
            if list[index] == key {
                list.swap_remove(index);
                limit -= 1;
            } else {
                index += 1;
            }
        }
    }

    /// The clauses to wake when `literal` becomes true, as a pointer.
    ///
    /// A pointer rather than a slice to ease the borrows of [bcp](crate::procedures::bcp), which
    /// reads the list while revising the valuation and other watch lists.
    /// Care must be taken to avoid creating aliases.
    ///
    /// # Safety
    /// No check is made that a [WatchDB] exists for the atom of the literal.
    pub unsafe fn watchers_unchecked(&mut self, literal: CLiteral) -> *mut Vec<ClauseKey> {
        let watch_db = unsafe { self.watch_dbs.get_unchecked_mut(literal.atom() as usize) };
        match literal.polarity() {
            true => &mut watch_db.positive,
            false => &mut watch_db.negative,
        }
    }
}
