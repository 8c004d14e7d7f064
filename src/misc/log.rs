/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library against the targets below.
Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const PROPAGATION: &str = "propagation";
    pub const QUEUE: &str = "queue";
    pub const REDUCTION: &str = "reduction";
    pub const SIMPLIFICATION: &str = "simplification";
    pub const VALUATION: &str = "valuation";
}
