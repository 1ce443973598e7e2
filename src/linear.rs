//! Non-wrapping value ranges.
//!
//! [`LinearRange`] is the simplified counterpart of
//! [`WrappedRange`](crate::WrappedRange): a conventional closed interval on
//! the linear number line. Every producer maintains `start <= end`, so the
//! bound accessors read the endpoints directly and wraparound never enters
//! the picture. Signed reasoning is out of scope for this type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed interval `[start, end]` with `start <= end` under unsigned
/// comparison.
///
/// The ordering of the bounds is a precondition on producers, not a checked
/// property: constructing a range with `end < start` is not rejected at
/// runtime and yields meaningless (but memory-safe) accessor results. Debug
/// builds assert the ordering in [`LinearRange::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearRange {
    /// Smallest possible value.
    pub start: u32,
    /// Largest possible value, inclusive.
    pub end: u32,
}

impl LinearRange {
    /// Create the range `[start, end]`. Callers keep `start <= end`.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "linear range bounds out of order");
        Self { start, end }
    }

    /// Create the degenerate range containing exactly `value`.
    pub fn constant(value: u32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Create the full-domain range `[0, u32::MAX]`.
    pub fn full() -> Self {
        Self {
            start: u32::MIN,
            end: u32::MAX,
        }
    }

    /// Smallest possible value.
    pub fn unsigned_min(&self) -> u32 {
        self.start
    }

    /// Largest possible value.
    pub fn unsigned_max(&self) -> u32 {
        self.end
    }
}

impl Default for LinearRange {
    /// The full domain: the only sound assumption about an unknown value.
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for LinearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#010x}, {:#010x}]", self.start, self.end)
    }
}
