//! The machine integers used as the storage of a [`Float`](crate::Float) format. These are hidden
//! from the end-user, which only sees the sealed [`Bits`] trait, implemented for `u8`, `u16`,
//! `u32`, and `u64`.
//!
//! All the arithmetic kernels work on a `u64` view of the encoding (and `u128` intermediates), so
//! the storage type only needs to move bits in and out losslessly.

/// The trait for the unsigned machine integer types that can hold the encoding of a float
/// format (only satisfied by `u8`, `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Bits: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display +
  core::fmt::Binary + core::fmt::LowerHex + core::fmt::UpperHex + core::fmt::Octal +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  Send + Sync + 'static
{
  const ZERO: Self;
  const BITS: u32;

  /// Zero-extend to a `u64`.
  fn to_u64(self) -> u64;

  /// Keep the lowest [`Self::BITS`] bits of `x`.
  fn of_u64(x: u64) -> Self;
}

mod unsigned;
mod const_as;
pub use const_as::const_as;
