//! Counters, attached to a context.

use crate::generic::luby::Luby;

/// Counters over the lifetime of a context, together with restart and reduction bookkeeping.
pub struct Counters {
    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    pub fresh_conflicts: usize,

    /// A count of every decision made.
    pub total_decisions: usize,

    /// A count of restarts performed.
    pub total_restarts: usize,

    /// A count of iterations of the solve loop.
    pub total_iterations: usize,

    /// The Luby generator which schedules restarts.
    pub luby: Luby,

    /// The current limit on addition clauses, grown whenever a reduction is scheduled.
    pub learnt_limit: f64,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,
            total_decisions: 0,
            total_restarts: 0,
            total_iterations: 0,
            luby: Luby::default(),
            learnt_limit: 0.0,
        }
    }
}
