//! The context — to which formulas are added and within which solves take place.
//!
//! Strictly, a [GenericContext] and a [Context].
//! The generic context is parameterised to a source of randomness, and the context fixes this to
//! the crate's own [Pcg32] so that, by default, solves are deterministic.
//!
//! # Example
//!
//! ```rust
//! # use aurochs_sat::config::Config;
//! # use aurochs_sat::context::{Context, Report};
//! # use aurochs_sat::structures::literal::{CLiteral, Literal};
//! let mut ctx: Context = Context::from_config(Config::default());
//!
//! let p = ctx.fresh_atom();
//! let q = ctx.fresh_atom();
//!
//! assert!(ctx.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).is_ok());
//! assert!(ctx.add_clause(CLiteral::new(p, false)).is_ok());
//!
//! assert!(ctx.solve().is_ok());
//! assert_eq!(ctx.report(), Report::Satisfiable);
//! assert_eq!(ctx.value_of(q), Some(true));
//! ```

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        atom::{AtomDB, AtomValue},
        clause::ClauseDB,
        trail::Trail,
        ClauseKey,
    },
    generic::pcg::Pcg32,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No formula is present.
    Configuration,

    /// A formula is being built.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is satisfiable, with a complete valuation as witness.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

/// A report on the satisfiability of the formula of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Satisfiable,
    Unsatisfiable,
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A context, generic over its source of randomness.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context and any solve within it.
    pub counters: Counters,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The trail of valuations, doubling as the propagation queue.
    pub trail: Trail,

    /// The state of the context.
    pub state: ContextState,

    /// The source of randomness.
    pub rng: R,
}

/// The context with the canonical source of randomness.
pub type Context = GenericContext<Pcg32>;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A fresh context, configured by `config`.
    pub fn from_config(config: Config) -> Self {
        GenericContext {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            counters: Counters::default(),
            state: ContextState::Configuration,
            rng: R::default(),
            config,
        }
    }

    /// A fresh atom, or [ATOM_MAX] if atoms have been exhausted.
    ///
    /// The initial phase of the atom is drawn against the configured polarity lean.
    pub fn fresh_atom(&mut self) -> Atom {
        let previous_value = self.rng.random_bool(self.config.polarity_lean);
        match self.atom_db.fresh_atom(previous_value) {
            Ok(atom) => atom,
            Err(_) => ATOM_MAX,
        }
    }

    /// Ensures every atom up to and including `atom` exists.
    pub fn ensure_atom(&mut self, atom: Atom) {
        while self.atom_db.count() <= atom as usize {
            self.fresh_atom();
        }
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The complete assignment witnessing satisfiability, indexed by atom.
    ///
    /// Meaningful after a solve has reported the formula satisfiable, as the valuation is then
    /// total.
    pub fn assignment(&self) -> Vec<bool> {
        use crate::structures::valuation::Valuation;
        self.atom_db
            .valuation()
            .values()
            .map(|value| value.unwrap_or(false))
            .collect()
    }

    /// A report on the satisfiability of the formula of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Report::Unknown
            }
        }
    }

    /// Values the literal at the current level for the given reason and appends it to the trail,
    /// unless the atom of the literal is already valued.
    ///
    /// The caller examines the returned [AtomValue]: a queued valuation reports
    /// [NotSet](AtomValue::NotSet), while agreement and conflict with an existing value are
    /// reported without revision to the trail.
    pub fn value_and_queue(&mut self, literal: CLiteral, reason: Option<ClauseKey>) -> AtomValue {
        let level = self.trail.level();
        let result = self
            .atom_db
            .set_value(literal.atom(), literal.polarity(), level, reason);

        if result == AtomValue::NotSet {
            log::trace!(target: targets::QUEUE, "Queued {literal} at level {level}");
            self.trail.push_literal(literal);
        }

        result
    }
}
