//! Error types used in the library.
//!
//! - Some of these are internally expected — a BCP conflict is used to direct the flow of a
//!   solve, and is a learning opportunity rather than a failure.
//! - Some are external — a parse error reports malformed DIMACS input, with no partial state
//!   leaking into the context.
//! - The remainder are very unlikely to occur during use.
//!
//! Contract violations — valuing an atom already valued through the trail, storing a clause with
//! fewer than two literals — are asserted rather than returned, as no caller can recover from
//! them.

use crate::db::ClauseKey;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error during conflict analysis.
    Analysis(AnalysisError),

    /// An error when building a formula in a context.
    Build(BuildError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// An error in the atom database.
    AtomDB(AtomDBError),

    /// An error related to parsing.
    Parse(ParseError),

    /// An error related to BCP.
    BCP(BCPError),
}

/// An error during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// The trail was exhausted without isolating a unique implication point.
    NoUIP,

    /// A reason key failed to unlock a clause.
    MissingReason,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// An error in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a formula in a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clear instance of an unsatisfiable formula, e.g. by an empty clause.
    Unsatisfiable,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A stored clause is missing.
    Missing,

    /// All possible keys have been used for some arena.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification of a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is neither a literal nor a delimiter.
    Token(String),

    /// The input ended inside a clause, with no closing delimiter.
    MissingDelimiter,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
