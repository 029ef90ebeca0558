#![cfg_attr(not(test), no_std)]
//! This crate provides a software numeric tower: fixed-width integers whose overflow behaviour is
//! always explicit, and IEEE 754 binary floating point in any format from 8 to 64 bits, with
//! shortest round-trip decimal formatting and correctly rounded parsing.
//!
//! # Introduction
//!
//! Everything here is computed with plain integer arithmetic, bit-exact and independent of the
//! host's FPU, so results are the same on every platform. The crate is organised in layers:
//!
//!   - [`BitPattern`]: raw `N`-bit storage, with shifts that never hit platform-defined
//!     behaviour, sign and zero extension, and truncation.
//!   - [`Integer`]: a signed or unsigned integer over a bit pattern. Arithmetic comes in three
//!     overflow policies (trapping, wrapping, and overflow-reporting), and conversions between
//!     integer types in five modes (exact, failable, clamping, truncating, and bit pattern
//!     reinterpretation).
//!   - [`Float`]: IEEE 754 binary floating point, correctly rounded, with fused multiply-add,
//!     ulp, square root, remainders, rounding to integral values, and conversions between
//!     formats and to and from integers.
//!   - Decimal text: [`Display`](core::fmt::Display) prints the shortest digits that read back
//!     as the same float, and [`FromStr`](core::str::FromStr) is correctly rounded.
//!   - [`traits`]: capability traits tying the above together for generic code.
//!
//! Failures are values of one [`Error`] type. Only [`Error::FatalOverflow`] is fatal: the
//! trapping operators panic with it, and every one of them has a `try_*` form that returns it
//! instead.
//!
//! # Usage
//!
//! ```
//! # use soft_tower::{Float, RoundFrom, RoundInto};
//! // Use the standard float formats, or define your own.
//! use soft_tower::{b16, b32, b64};
//! type Mini = Float<4, 3, u8>;  // 8 bits: 4-bit exponent, 3-bit fraction
//!
//! // Create floats from native floats, ints, strings, constants, or raw bits.
//! let a = b64::round_from(0.1);
//! let b: b64 = "0.2".parse().unwrap();
//! let c = b32::round_from(42_i32);
//! let d = b16::from_bits(0x3c00);
//! assert!(d == b16::ONE);
//!
//! // Arithmetic with the usual operators is correctly rounded, ...
//! assert_eq!((a + b).to_string(), "0.30000000000000004");
//! // ... and fused operations round once.
//! assert_eq!(b64::round_from(-0.2).adding_product(6f64.round_into(), 0.2f64.round_into()).to_string(), "1.0");
//! assert_eq!(Mini::GREATEST_FINITE_MAGNITUDE.to_string(), "2.4e+02");
//! assert_eq!(i32::round_from(c), 42);
//! ```
//!
//! ```
//! # use soft_tower::{I8, I16, I32, U8, Error, Overflow};
//! // Integers: pick the overflow policy per operation.
//! let x = I8::from(100);
//! assert_eq!(x.wrapping_add(x), I8::from(-56));
//! assert_eq!(x.overflowing_add(x), (I8::from(-56), true));
//! assert_eq!(x.try_add(x), Err(Error::FatalOverflow(Overflow::Arithmetic)));
//!
//! // Conversions between integer types.
//! assert_eq!(I16::clamping(I32::from(32768)), I16::MAX);
//! assert_eq!(I16::exactly(I32::from(32768)), None);
//! assert_eq!(U8::truncating(I8::from(-1)), U8::from(255));
//! ```
//!
//! # Subnormals
//!
//! Every float operation has an `_in` variant taking a [`Subnormals`] mode: gradual underflow
//! (IEEE) or flush-to-zero. The operators and the methods without the suffix use
//! [`Subnormals::NATIVE`], which is gradual unless the `flush-to-zero` feature is enabled.
//!
//! # Performance
//!
//! Correctness comes first; operations are straight-line integer code on a `u128`, with no
//! allocation except in the exact paths of decimal conversion. This crate includes benchmarks;
//! run them with `cargo bench -F bench`.

extern crate alloc;

mod underlying;
mod bits;
mod int;
mod float;
mod codec;
mod error;
pub mod traits;

pub use underlying::Bits;
pub use bits::BitPattern;
pub use int::{Integer, Conversion, Policy, ArithOp};
pub use float::{Float, Subnormals, RoundingRule, Category, Stride};
pub use float::convert::{RoundFrom, RoundInto};
pub use error::{Error, Overflow, TextError};
pub use traits::{AdditiveArithmetic, Numeric, SignedNumeric, FixedWidth, BinaryFloatingPoint};

/// Signed 8-bit integer.
pub type I8 = Integer<8, true>;

/// Signed 16-bit integer.
pub type I16 = Integer<16, true>;

/// Signed 32-bit integer.
pub type I32 = Integer<32, true>;

/// Signed 64-bit integer.
pub type I64 = Integer<64, true>;

/// Signed integer of the platform's word size.
pub type INative = Integer<{ bits::NATIVE_BITS }, true>;

/// Unsigned 8-bit integer.
pub type U8 = Integer<8, false>;

/// Unsigned 16-bit integer.
pub type U16 = Integer<16, false>;

/// Unsigned 32-bit integer.
pub type U32 = Integer<32, false>;

/// Unsigned 64-bit integer.
pub type U64 = Integer<64, false>;

/// Unsigned integer of the platform's word size.
pub type UNative = Integer<{ bits::NATIVE_BITS }, false>;

/// IEEE 754 `binary16` (half precision).
#[allow(non_camel_case_types)]
pub type b16 = Float<5, 10, u16>;

/// IEEE 754 `binary32` (single precision).
#[allow(non_camel_case_types)]
pub type b32 = Float<8, 23, u32>;

/// IEEE 754 `binary64` (double precision).
#[allow(non_camel_case_types)]
pub type b64 = Float<11, 52, u64>;

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};
