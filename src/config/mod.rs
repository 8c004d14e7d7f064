//! Configuration of a context.
//!
//! All configuration for a context is fixed in a [Config] when the context is created.
//! The defaults are set to give quick, deterministic results on a library of tests.

/// The representation of activity.
pub type Activity = f64;

/// The probability an atom is given positive polarity when no saved phase applies.
pub type PolarityLean = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The `u` value to multiply the Luby sequence by when scheduling restarts.
    pub luby_u: u32,

    /// Permit (scheduled) restarts.
    pub restarts: bool,

    /// Default to the last value an atom held when deciding a value for the atom.
    pub phase_saving: bool,

    /// The probability an atom's initial phase is positive.
    ///
    /// Read once per atom, when the atom is created.
    pub polarity_lean: PolarityLean,

    /// The initial activity bump applied to atoms examined during conflict analysis.
    pub bump: Activity,

    /// The decay factor for atom activity.
    ///
    /// After each conflict the bump increment is scaled by the reciprocal of this factor, so
    /// earlier bumps weigh geometrically less.
    pub decay: Activity,

    /// The initial limit on addition clauses, as a fraction of the original clause count.
    pub learnt_fraction: f64,

    /// The factor by which the addition limit grows each time a reduction is scheduled.
    pub learnt_growth: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            luby_u: 128,
            restarts: true,
            phase_saving: true,
            polarity_lean: 0.0,
            bump: 1.0,
            decay: 0.95,
            learnt_fraction: 0.3,
            learnt_growth: 1.1,
        }
    }
}
