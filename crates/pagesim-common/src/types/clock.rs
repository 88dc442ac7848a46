//! Logical clock type for pagesim.
//!
//! The simulator orders events with a caller- or engine-supplied integer
//! clock. Ticks are pure ordering keys with no relation to wall-clock time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical clock value.
///
/// Ticks are monotonically increasing over a simulation run. `Tick::ZERO`
/// doubles as the "never" sentinel: a freshly constructed engine and every
/// non-resident page table entry carry it, and the first generated tick
/// is 1.
///
/// # Example
///
/// ```rust
/// use pagesim_common::types::Tick;
///
/// let t = Tick::ZERO.next();
/// assert_eq!(t.as_u64(), 1);
/// assert!(t > Tick::ZERO);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Tick(u64);

impl Tick {
    /// The zero tick, used as the "never" sentinel.
    pub const ZERO: Self = Self(0);

    /// Maximum tick value.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a tick from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(tick: u64) -> Self {
        Self(tick)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next tick.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Checks whether this tick is the "never" sentinel.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Tick {
    #[inline]
    fn from(tick: u64) -> Self {
        Self::new(tick)
    }
}

impl From<Tick> for u64 {
    #[inline]
    fn from(tick: Tick) -> Self {
        tick.0
    }
}
