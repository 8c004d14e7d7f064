//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! Each iteration of the solve loop propagates the queued consequences of the current valuation,
//! and branches on the outcome:
//!
//! - A conflict at level zero is fundamental — the formula is unsatisfiable.
//! - Any other conflict is analysed to an asserting clause, the trail is returned to the level
//!   the analysis identifies, the clause is stored, and its asserted literal queued — the next
//!   iteration propagates it.
//! - No conflict, and propagation exhausted the queue: if every atom is valued the formula is
//!   satisfiable on the valuation; otherwise some atom is given a value by decision and its
//!   consequences propagated in turn.
//!
//! Between a quiet propagation and the next decision the loop attends to maintenance:
//!
//! - A restart, if conflicts since the last restart passed the scheduled allowance.
//!   Restarts forget every decision, while keeping learnt clauses, activity, and saved phases —
//!   the search re-descends, guided by what the conflicts taught.
//!   Allowances follow the Luby sequence scaled by a configured constant.
//! - A simplification pass, if fresh level-zero values arrived since the last pass.
//! - A reduction of the addition clauses, if additions have outgrown their limit.
//!   Each reduction raises the limit, so the database grows — just slowly.
//!
//! ```none
//!          +---------------+
//!  +------>| bcp           |--- conflict at level zero ----> unsatisfiable
//!  |       +---------------+
//!  |         |          |
//!  |    no conflict   conflict
//!  |         |          |
//!  |         ⌄          ⌄
//!  |  +------------+  +----------------------------+
//!  |  | restart?   |  | analyze, backjump, store,  |
//!  |  | simplify?  |  | queue asserted literal     |--+
//!  |  | reduce?    |  +----------------------------+  |
//!  |  +------------+                                  |
//!  |         |                                        |
//!  |         ⌄                                        |
//!  |  +------------+                                  |
//!  +--| decision   |--- every atom valued ----------> satisfiable
//!  |  +------------+                                  |
//!  +--------------------------------------------------+
//! ```
//!
//! # Termination
//!
//! Each iteration extends the trail, shortens it through a backjump paired with a fresh
//! asserting clause, or ends the loop.
//! Asserting clauses bar a return to the valuation which produced them, so the loop cannot
//! revisit a partial valuation and iterations are bounded (if astronomically, in the worst
//! case).

use crate::{
    context::{ContextState, GenericContext, Report},
    misc::log::targets::{self},
    procedures::decision::DecisionOk,
    structures::clause::ClauseSource,
    types::err::{BCPError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// Once the formula is decided further calls return the decided report without work.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {}
        }

        self.state = ContextState::Solving;
        self.counters.learnt_limit =
            self.config.learnt_fraction * self.clause_db.original_count() as f64;
        let mut skip_simplify = false;

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            log::trace!("Iteration {}", self.counters.total_iterations);

            match self.bcp() {
                Err(BCPError::Conflict(conflict)) => {
                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    if self.trail.level() == 0 {
                        log::info!("Fundamental conflict via {conflict}");
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }

                    let (learnt, backjump_level) = self.analyze(conflict)?;
                    self.backjump(backjump_level);

                    match learnt.len() {
                        1 => {
                            // A unit is never stored: its literal joins the level-zero facts,
                            // and a fresh fact may satisfy stored clauses.
                            self.value_and_queue(learnt[0], None);
                            skip_simplify = false;
                        }

                        _ => {
                            let asserted = learnt[0];
                            let key = self.clause_db.store(
                                learnt,
                                ClauseSource::Resolution,
                                &mut self.atom_db,
                            )?;
                            self.value_and_queue(asserted, Some(key));
                        }
                    }

                    self.atom_db.decay_activity();
                }

                Ok(()) => {
                    let allowance =
                        self.config.luby_u as usize * self.counters.luby.current() as usize;
                    if self.config.restarts && self.counters.fresh_conflicts >= allowance {
                        log::debug!("Restart after {} conflicts", self.counters.fresh_conflicts);
                        self.backjump(0);
                        self.counters.luby.advance();
                        self.counters.fresh_conflicts = 0;
                        self.counters.total_restarts += 1;
                    }

                    if !skip_simplify && self.trail.level() == 0 {
                        self.simplify();
                        skip_simplify = true;
                    }

                    if self.clause_db.addition_count() as f64 >= self.counters.learnt_limit {
                        self.counters.learnt_limit *= self.config.learnt_growth;
                        log::debug!(target: targets::REDUCTION, "Addition limit raised to {}", self.counters.learnt_limit);
                        self.clause_db.reduce(&mut self.atom_db);
                    }

                    match self.make_decision() {
                        DecisionOk::Literal(decision) => {
                            self.counters.total_decisions += 1;
                            self.trail.push_fresh_level();
                            self.value_and_queue(decision, None);
                        }

                        DecisionOk::Exhausted => {
                            self.state = ContextState::Satisfiable;
                            break 'solve_loop;
                        }
                    }
                }
            }
        }

        Ok(self.report())
    }
}
