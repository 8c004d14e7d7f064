//! Analysis of a conflict, producing an asserting clause.
//!
//! # Overview
//!
//! Analysis begins with a clause unsatisfiable on the current valuation and resolves backwards
//! through the reasons recorded on the trail until exactly one literal valued at the current
//! level remains — the first unique implication point, through which every path from the current
//! decision to the conflict passes.
//!
//! The learnt clause collects the negation of the implication point together with every literal
//! from the resolution which was valued below the current level.
//! Such a clause is *asserting*: after a backjump to the greatest level among those literals all
//! are false and the implication point's negation has no value, so propagation values it
//! immediately.
//!
//! # Implementation
//!
//! Rather than build each resolvent, a counter tracks how many marked atoms of the current level
//! remain to be resolved, and the trail is walked tail-first:
//! - Marked literals below the current level belong to the learnt clause.
//! - A marked trail literal at the current level either brings the counter to zero — it is the
//!   implication point — or its reason is resolved in, marking fresh atoms.
//!
//! The walk stays within the current level: the counter reaches zero at the shallowest marked
//! literal of the level, which is met before any literal of an earlier level.
//!
//! Atoms receive an activity bump as they are examined, and the bump increment is inflated by
//! the driver once per conflict.
//!
//! The marks are cleared before analysis returns.
//!
//! # Soundness
//!
//! The literals of a learnt clause are never revised after analysis: the clause asserts its
//! first literal by construction, and this is relied on when the clause is stored and its first
//! literal queued.
//! The one liberty taken is a swap of the greatest-level literal into the second slot, so the
//! watched slots are the last of the clause to be unvalued by later backjumps.

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{AnalysisError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The first-UIP asserting clause derived from `conflict`, and the level to backjump to
    /// before the clause is used.
    ///
    /// # Panics
    /// If called at decision level zero — a conflict at level zero decides the formula, with
    /// nothing to analyse.
    pub fn analyze(&mut self, conflict: ClauseKey) -> Result<(CClause, LevelIndex), ErrorKind> {
        let conflict_level = self.trail.level();
        assert!(conflict_level > 0, "Analysis of a conflict at level zero");
        log::info!(target: targets::ANALYSIS, "Analysis of {conflict} at level {conflict_level}");

        let mut learnt: CClause = Vec::default();
        let mut touched: Vec<Atom> = Vec::default();
        let mut unresolved: usize = 0;

        let conflict_literals: CClause = match self.clause_db.get(conflict) {
            Some(db_clause) => db_clause.literals().copied().collect(),
            None => return Err(AnalysisError::MissingReason.into()),
        };

        for literal in conflict_literals {
            let atom = literal.atom();
            self.atom_db.bump_activity(atom);
            self.atom_db.mark(atom);
            touched.push(atom);

            match self.atom_db.level_of(atom) {
                Some(level) if level < conflict_level => learnt.push(literal),
                _ => unresolved += 1,
            }
        }

        let mut uip = None;

        'trail_walk: for trail_literal in self.trail.assignments().iter().rev() {
            let atom = trail_literal.atom();
            if !self.atom_db.marked(atom) {
                continue 'trail_walk;
            }

            unresolved -= 1;
            self.atom_db.clear_mark(atom);

            if unresolved == 0 {
                uip = Some(*trail_literal);
                break 'trail_walk;
            }

            // Not the implication point, so the literal was propagated and has a reason whose
            // first literal it is.
            let Some(reason) = self.atom_db.reason_of(atom) else {
                return Err(AnalysisError::MissingReason.into());
            };
            let reason_literals: CClause = match self.clause_db.get(reason) {
                Some(db_clause) => db_clause.literals().skip(1).copied().collect(),
                None => return Err(AnalysisError::MissingReason.into()),
            };

            for literal in reason_literals {
                let atom = literal.atom();
                if self.atom_db.marked(atom) {
                    continue;
                }
                self.atom_db.bump_activity(atom);
                self.atom_db.mark(atom);
                touched.push(atom);

                match self.atom_db.level_of(atom) {
                    Some(level) if level < conflict_level => learnt.push(literal),
                    _ => unresolved += 1,
                }
            }
        }

        let Some(uip) = uip else {
            return Err(AnalysisError::NoUIP.into());
        };

        learnt.insert(0, uip.negate());

        for atom in touched {
            self.atom_db.clear_mark(atom);
        }

        let mut backjump_level: LevelIndex = 0;
        if learnt.len() > 1 {
            let mut deepest = 1;
            for (index, literal) in learnt.iter().enumerate().skip(1) {
                if let Some(level) = self.atom_db.level_of(literal.atom()) {
                    if level > backjump_level {
                        backjump_level = level;
                        deepest = index;
                    }
                }
            }
            learnt.swap(1, deepest);
        }

        log::info!(target: targets::ANALYSIS, "Learnt {} for level {backjump_level}", learnt.as_dimacs());
        Ok((learnt, backjump_level))
    }
}
