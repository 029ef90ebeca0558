//! Fixed-width integers with explicit overflow policies.
//!
//! An [`Integer<BITS, SIGNED>`] is a [`BitPattern<BITS>`] read either as two's complement
//! (`SIGNED = true`) or as plain binary. Every arithmetic operation exists under three policies:
//!
//!   - **Trapping** (the `std::ops` operators, and the `try_*` methods): a result that does not
//!     fit is a [`FatalOverflow`](crate::Error::FatalOverflow). The operators panic with it, the
//!     `try_*` methods return it.
//!   - **Wrapping** (`wrapping_*`): the low `BITS` bits of the exact result.
//!   - **Overflow-reporting** (`overflowing_*`): the wrapped result plus a flag.
//!
//! Division or remainder by zero is fatal under every policy.
//!
//! The approach to detect overflow is the boring one: every operand fits in an `i128` with room
//! to spare, so we compute the exact result there and ask whether it's in range. Only a
//! product can leave the `i128` range, and then it is out of range for every width anyway.

use crate::bits::BitPattern;

/// A `BITS`-bit integer, signed if `SIGNED`.
///
/// ```
/// # use soft_tower::{I8, I16, I32, U8};
/// let x = I32::from(32768);
/// assert_eq!(I16::clamping(x), I16::MAX);
/// assert_eq!(I16::exactly(x), None);
/// assert_eq!(U8::truncating(I8::from(-1)), U8::from(255));
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]  // Eq is the same as for the bit pattern
pub struct Integer<const BITS: u32, const SIGNED: bool>(BitPattern<BITS>);

/// Arithmetic: the three overflow policies.
mod arith;

/// The five conversion modes between integer types.
pub(crate) mod convert;

/// Construction from text.
mod parse;

/// Display and the radix formatting traits.
mod fmt;

pub use arith::{ArithOp, Policy};
pub use convert::Conversion;

impl<const BITS: u32, const SIGNED: bool> Integer<BITS, SIGNED> {
  /// The width of this type in bits.
  pub const BITS: u32 = BitPattern::<BITS>::BITS;

  /// Whether this type is signed (i.e. parameter `SIGNED`).
  pub const IS_SIGNED: bool = SIGNED;

  /// The smallest representable value, as an `i128`.
  pub(crate) const MIN_VALUE: i128 = if SIGNED { -(1 << (Self::BITS - 1)) } else { 0 };

  /// The largest representable value, as an `i128`.
  pub(crate) const MAX_VALUE: i128 = if SIGNED { (1 << (Self::BITS - 1)) - 1 } else { (1 << Self::BITS) - 1 };

  /// The smallest representable value.
  pub const MIN: Self = Self::wrapping_from_value(Self::MIN_VALUE);

  /// The largest representable value.
  pub const MAX: Self = Self::wrapping_from_value(Self::MAX_VALUE);

  pub const ZERO: Self = Self(BitPattern::ZERO);

  pub const ONE: Self = Self(BitPattern::new(1));

  /// The mathematical value of `self`.
  #[inline]
  pub const fn value(self) -> i128 {
    if SIGNED { self.0.get_signed() as i128 } else { self.0.get() as i128 }
  }

  /// Whether `value` is within `MIN ..= MAX`.
  #[inline]
  pub(crate) const fn fits(value: i128) -> bool {
    Self::MIN_VALUE <= value && value <= Self::MAX_VALUE
  }

  /// The low `BITS` bits of `value`, which is taken to be two's complement of infinite width.
  #[inline]
  pub(crate) const fn wrapping_from_value(value: i128) -> Self {
    Self(BitPattern::new(value as u64))
  }

  /// Construct from a value, which must be in range.
  ///
  /// # Panics
  ///
  /// If `value` is not representable, with [`Overflow::Conversion`](crate::Overflow::Conversion);
  /// in a `const` context this is a compile error.
  #[inline]
  #[track_caller]
  pub const fn new(value: i128) -> Self {
    if !Self::fits(value) {
      // Same text as `Error::FatalOverflow(Overflow::Conversion)`; `trap` is not `const`.
      panic!("fatal overflow: value out of range of the target integer type")
    }
    Self::wrapping_from_value(value)
  }

  /// Construct from a value, or [`Error::Range`](crate::Error::Range) if it's not
  /// representable.
  #[inline]
  pub fn try_new(value: i128) -> Result<Self, crate::Error> {
    if Self::fits(value) { Ok(Self::wrapping_from_value(value)) } else { Err(crate::Error::Range) }
  }

  /// Construct from a raw bit pattern.
  #[inline]
  pub const fn from_bits(bits: BitPattern<BITS>) -> Self {
    Self(bits)
  }

  /// The raw bit pattern of `self`.
  #[inline]
  pub const fn to_bits(self) -> BitPattern<BITS> {
    self.0
  }

  #[inline]
  pub const fn is_negative(self) -> bool {
    SIGNED && self.0.sign_bit()
  }

  /// Number of 1 bits in the pattern.
  #[inline]
  pub const fn nonzero_bit_count(self) -> u32 {
    self.0.count_ones()
  }

  #[inline]
  pub const fn leading_zero_bit_count(self) -> u32 {
    self.0.leading_zeros()
  }

  #[inline]
  pub const fn trailing_zero_bit_count(self) -> u32 {
    self.0.trailing_zeros()
  }

  #[inline]
  pub const fn byte_swapped(self) -> Self {
    Self(self.0.swap_bytes())
  }
}

impl<const BITS: u32, const SIGNED: bool> PartialOrd for Integer<BITS, SIGNED> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<const BITS: u32, const SIGNED: bool> Ord for Integer<BITS, SIGNED> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.value().cmp(&other.value())
  }
}

/// Lossless interchange with the primitive of the same width and signedness.
macro_rules! impl_primitive {
  ($ty:ty, $prim:ty) => {
    impl From<$prim> for $ty {
      #[inline]
      fn from(value: $prim) -> Self {
        Self::wrapping_from_value(value as i128)
      }
    }

    impl From<$ty> for $prim {
      #[inline]
      fn from(value: $ty) -> Self {
        value.value() as $prim
      }
    }
  }
}

impl_primitive!{crate::I8, i8}
impl_primitive!{crate::I16, i16}
impl_primitive!{crate::I32, i32}
impl_primitive!{crate::I64, i64}
impl_primitive!{crate::INative, isize}
impl_primitive!{crate::U8, u8}
impl_primitive!{crate::U16, u16}
impl_primitive!{crate::U32, u32}
impl_primitive!{crate::U64, u64}
impl_primitive!{crate::UNative, usize}
