//! Wraparound-aware value ranges.
//!
//! A [`WrappedRange`] tracks what is known about a 32-bit value as a closed
//! interval on the circular (modulo 2^32) number line. Picture the 32-bit
//! domain as a circle with 0 at six o'clock and values increasing clockwise,
//! which places `u32::MAX` one step counter-clockwise of 0. A range is an
//! arc drawn from `start` clockwise to `end`; every value on the arc is a
//! possible value. Because the arc may cross the point where the domain
//! wraps back to zero, `end < start` is a valid range.

use std::fmt;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Range Type
// ═══════════════════════════════════════════════════════════════════════════

/// A closed interval `[start, end]` on the circular 32-bit number line.
///
/// The possible values are those reached by starting at `start` and
/// incrementing, with wraparound from `u32::MAX` to 0, until `end` is
/// reached, inclusive of both endpoints. No ordering between the bounds is
/// required.
///
/// The same stored pair is read under two interpretations: unsigned (`u32`)
/// and signed two's-complement (`i32`). Wraparound is detected independently
/// per interpretation, so a range can wrap under one view and not the other
/// (e.g. an arc crossing the signed boundary at `0x8000_0000` wraps in the
/// signed view while staying ordered in the unsigned one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WrappedRange {
    /// Start of the arc. May exceed `end`.
    pub start: u32,
    /// End of the arc, inclusive.
    pub end: u32,
}

impl WrappedRange {
    /// Create the range covering `start` clockwise through `end`.
    pub fn new(start: u32, end: u32) -> Self {
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
    ///
    /// This is the top element of the domain: nothing is known about the
    /// value beyond its width.
    pub fn full() -> Self {
        Self {
            start: u32::MIN,
            end: u32::MAX,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Unsigned interpretation
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns true if the arc crosses the `u32::MAX` → 0 boundary, i.e.
    /// `end < start` with both bounds read as unsigned.
    pub fn is_unsigned_wrapping(&self) -> bool {
        self.end < self.start
    }

    /// Smallest possible value under the unsigned interpretation.
    ///
    /// A wrapping arc covers 0, so the sound bound is the domain minimum;
    /// otherwise the bound is `start` itself.
    pub fn unsigned_min(&self) -> u32 {
        if self.is_unsigned_wrapping() {
            u32::MIN
        } else {
            self.start
        }
    }

    /// Largest possible value under the unsigned interpretation.
    ///
    /// A wrapping arc covers `u32::MAX`; otherwise the bound is `end`.
    pub fn unsigned_max(&self) -> u32 {
        if self.is_unsigned_wrapping() {
            u32::MAX
        } else {
            self.end
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Signed interpretation
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns true if the arc crosses the `i32::MAX` → `i32::MIN` boundary,
    /// i.e. `end < start` with both bounds reinterpreted as signed.
    pub fn is_signed_wrapping(&self) -> bool {
        (self.end as i32) < (self.start as i32)
    }

    /// Smallest possible value under the signed interpretation.
    ///
    /// A signed-wrapping arc covers `i32::MIN`; otherwise the bound is
    /// `start` reinterpreted as signed.
    pub fn signed_min(&self) -> i32 {
        if self.is_signed_wrapping() {
            i32::MIN
        } else {
            self.start as i32
        }
    }

    /// Largest possible value under the signed interpretation.
    ///
    /// A signed-wrapping arc covers `i32::MAX`; otherwise the bound is
    /// `end` reinterpreted as signed.
    pub fn signed_max(&self) -> i32 {
        if self.is_signed_wrapping() {
            i32::MAX
        } else {
            self.end as i32
        }
    }
}

impl Default for WrappedRange {
    /// The full domain: the only sound assumption about an unknown value.
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for WrappedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#010x}, {:#010x}]", self.start, self.end)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
