//! Monotonic timestamp model.
//!
//! # Design
//!
//! Time is represented as `Millis`, a monotonically increasing millisecond
//! counter stamped on each position sample by the location source (capture
//! time, not receive time).  Debounce arithmetic stays in integer
//! milliseconds, so window comparisons are exact — no floating-point drift
//! and no dependency on the host's wall clock.
//!
//! The engine never reads a clock itself: every decision is driven either
//! by a sample's `captured_at` or by a `now` the host passes to `poll`.

use std::fmt;

/// A monotonic timestamp in milliseconds.
///
/// Stored as `u64`: at 1 000 ticks per second a u64 lasts ~585 million
/// years, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the timestamp `n` milliseconds after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Millis {
        Millis(self.0 + n)
    }

    /// Milliseconds elapsed from `earlier` to `self`, clamped at zero.
    ///
    /// Saturating because sources occasionally re-deliver an old sample;
    /// a negative interval must read as "no time has passed", not wrap.
    #[inline]
    pub fn saturating_since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
