//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! aurochs_sat is a conflict-driven clause-learning solver built around a handful of databases and a
//! small collection of procedures which read from, and revise, those databases:
//! - A formula is stored in a [clause database](crate::db::clause), with two literals of each clause watched.
//! - A valuation is stored in an [atom database](crate::db::atom), together with the level and reason of each
//!   valued atom and an activity heap over atoms without a value.
//! - The order in which atoms were valued is stored on a [trail](crate::db::trail), with a queue pointer
//!   marking how far those valuations have been propagated.
//!
//! The [procedures](crate::procedures) tie these together: [bcp](crate::procedures::bcp) propagates
//! the consequences of a valuation, [analysis](crate::procedures::analysis) turns a conflict into an
//! asserting clause, and [solve](crate::procedures::solve) alternates the two with decisions, restarts,
//! and reductions until the formula is decided.
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
//! assert!(ctx.add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)]).is_ok());
//! assert!(ctx.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]).is_ok());
//!
//! assert!(ctx.solve().is_ok());
//! assert_eq!(ctx.report(), Report::Satisfiable);
//! ```
//!
//! Formulas may also be read from [DIMACS](crate::builder::dimacs) sources, and the crate ships a small
//! binary which does exactly that.
//!
//! # Logs
//!
//! Log calls are made throughout the library against the targets listed in [misc::log::targets].
//! No log implementation is linked by the library itself; with
//! [env_logger](https://docs.rs/env_logger/latest/env_logger/) installed, output narrows as in
//! `RUST_LOG=analysis=info …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
