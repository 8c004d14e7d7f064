//! The Luby sequence, as used to schedule restarts.
//!
//! The sequence (<https://oeis.org/A182105>) begins 1, 1, 2, 1, 1, 2, 4, … and is generated by
//! Knuth's 'reluctant doubling' recurrence over a pair of counters.
//! A solver multiplies the current element by some constant to obtain the number of conflicts to
//! allow before the next restart.

/// Representation used for elements of the sequence.
pub type LubyElement = u32;

/// A generator for the Luby sequence, holding the current element.
pub struct Luby {
    /// The reluctant-doubling counter pair.
    u: LubyElement,
    v: LubyElement,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 1, v: 1 }
    }
}

impl Luby {
    /// The current element of the sequence.
    pub fn current(&self) -> LubyElement {
        self.v
    }

    /// Advances to, and returns, the next element of the sequence.
    ///
    /// Saturates rather than overflows, though a solve which exhausts the representation would
    /// have restarted some billions of times.
    pub fn advance(&mut self) -> LubyElement {
        if (self.u & self.u.wrapping_neg()) == self.v {
            self.u = self.u.saturating_add(1);
            self.v = 1;
        } else {
            self.v = self.v.saturating_mul(2);
        }
        self.v
    }
}
