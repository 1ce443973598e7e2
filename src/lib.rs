//! Value-range primitives for 32-bit abstract interpretation.
//!
//! This crate provides the value domain a static analyzer uses to track what
//! is known about a 32-bit quantity: a pair of bounds read as a closed
//! interval. Two invariant regimes are provided as distinct types:
//!
//! - [`WrappedRange`]: bounds on the circular (modulo 2^32) number line,
//!   where `end < start` denotes a range that wraps past the maximum back to
//!   zero. Minimum and maximum are answered separately under unsigned and
//!   signed interpretations of the same stored bits, and a wrapping range
//!   widens to the full domain of the interpretation in which it wraps.
//! - [`LinearRange`]: a conventional interval whose producers maintain
//!   `start <= end`, with unsigned accessors only.
//!
//! The two types encode different invariants and are not interchangeable:
//! an analyzer adopts one at its boundary and holds to it. Operators that
//! combine ranges or propagate them through arithmetic belong to the
//! consuming analyzer, not to this crate.

pub mod linear;
pub mod wrapped;

pub use linear::LinearRange;
pub use wrapped::WrappedRange;
