//! This module and its submodules contain a software implementation of IEEE 754 binary floating
//! point, for any format with an exponent field of 2 to 15 bits and a fraction field of 1 to 52
//! bits that fits a machine word.
//!
//! Every operation is correctly rounded (round to nearest, ties to even), which is checked
//! against an exact rational oracle and, for the standard `binary32` and `binary64` formats,
//! against the host's FPU.
//!
//! The implementation follows a fixed pipeline: **unpack** the operands into an integer
//! significand and a binary exponent (`sig × 2^exp`, see [`Unpacked`]), compute the exact result
//! (or a result that is exact up to a *sticky* bit) with plain integer arithmetic in a `u128`,
//! and **round and pack** once at the end. Special values (NaN, ∞, zero) are dealt with before
//! the pipeline starts.
//!
//! Some notation used in the comments:
//!
//!   - **sig**: the significand as an integer, including the hidden bit for normal numbers.
//!   - **exp**: the exponent of the *last* significand bit, so the value is `sig × 2^exp`.
//!   - **Sticky bit**: whether any nonzero bits were discarded to the right of a `sig`.

/// An IEEE 754 binary floating point number with an `EXP`-bit exponent field and a `FRAC`-bit
/// fraction field, stored in the machine integer `Bits`.
///
/// The encoding is the standard one: sign bit, biased exponent, fraction with an implicit
/// leading bit for normal numbers. `1 + EXP + FRAC` must be exactly `Bits::BITS`.
///
/// Examples:
///
/// ```
/// # use soft_tower::Float;
/// type Half = Float::<5, 10, u16>;  // IEEE binary16
/// type BFloat = Float::<8, 7, u16>;  // bfloat16
/// type Mini = Float::<4, 3, u8>;  // An 8-bit format with 3 fraction bits
/// ```
#[derive(Clone, Copy, Default)]
pub struct Float<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> (Bits);

/// Whether subnormal numbers take part in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subnormals {
  /// IEEE gradual underflow.
  Gradual,
  /// Subnormal operands read as zero, and results that would be subnormal become zero (with
  /// the sign of the exact result).
  FlushToZero,
}

impl Subnormals {
  /// The behaviour of the operators and the methods without an `_in` suffix; selected by the
  /// `flush-to-zero` feature.
  pub const NATIVE: Self = if cfg!(feature = "flush-to-zero") { Self::FlushToZero } else { Self::Gradual };
}

/// Basics
mod basics;

/// Constants (zero, one, infinity, pi, etc)
mod consts;

/// Unpacking into `sig × 2^exp`, and rounding back
mod unpack;
pub(crate) use unpack::Unpacked;

/// Classification and predicates
mod classify;
pub use classify::Category;

/// Comparisons and total order
mod cmp;

/// Sign manipulation, neighbours, ulp
mod unary;

/// Rounding to integral values
mod round_int;
pub use round_int::RoundingRule;

/// Arithmetic operators
mod ops;

/// Functions
mod math;

/// Conversions to and from other types
pub(crate) mod convert;

/// Evenly spaced sequences
mod stride;
pub use stride::Stride;

/// Test oracles
#[cfg(test)]
pub(crate) mod rational;

/// Test case generation
#[cfg(test)]
mod test;
