//! Raw fixed-width bit vectors.
//!
//! A [`BitPattern<BITS>`] is `BITS` bits with no interpretation attached: it is neither signed
//! nor unsigned, that is decided by whoever reads it (an [`Integer`](crate::Integer) or one of
//! the extension operations below). The bits live in the low end of a `u64`; every bit above
//! `BITS` is always 0.
//!
//! Shifts never inherit the platform's behaviour for out-of-range amounts: shifting by `BITS` or
//! more yields all-zero (logical shifts) or all-sign (arithmetic right shift). The `masking_*`
//! variants reduce the amount modulo `BITS` instead.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

/// A fixed-width bit vector of `BITS` bits, `BITS` being 8, 16, 32, or 64.
///
/// ```
/// # use soft_tower::BitPattern;
/// let x = BitPattern::<8>::new(0b1000_0001);
/// assert_eq!(x.ashr(1).get(), 0b1100_0000);
/// assert_eq!(x.lshr(1).get(), 0b0100_0000);
/// assert_eq!(x.sign_extend::<16>().get(), 0xff81);
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct BitPattern<const BITS: u32>(u64);

/// The width of the platform's native word.
pub const NATIVE_BITS: u32 = usize::BITS;

impl<const BITS: u32> BitPattern<BITS> {
  /// The width of this pattern (i.e. parameter `BITS`).
  pub const BITS: u32 = {
    assert!(
      BITS == 8 || BITS == 16 || BITS == 32 || BITS == 64,
      "A bit pattern must be 8, 16, 32, or 64 bits wide",
    );
    BITS
  };

  /// The bits that are part of the pattern.
  pub(crate) const MASK: u64 = u64::MAX >> (64 - Self::BITS);

  /// All bits clear.
  pub const ZERO: Self = Self(0);

  /// All bits set.
  pub const ALL_ONES: Self = Self(Self::MASK);

  /// Construct a pattern from the low `BITS` bits of `bits`; higher bits are ignored.
  #[inline]
  pub const fn new(bits: u64) -> Self {
    Self(bits & Self::MASK)
  }

  /// The pattern, zero-extended to a `u64`.
  #[inline]
  pub const fn get(self) -> u64 {
    self.0
  }

  /// The pattern read as two's complement, sign-extended to an `i64`.
  #[inline]
  pub const fn get_signed(self) -> i64 {
    let junk = 64 - Self::BITS;
    ((self.0 << junk) as i64) >> junk
  }

  /// The most significant bit.
  #[inline]
  pub const fn sign_bit(self) -> bool {
    self.0 >> (Self::BITS - 1) != 0
  }

  /// Shift left, filling with 0s. An amount of `BITS` or more clears every bit.
  #[inline]
  pub const fn shl(self, n: u32) -> Self {
    if n >= Self::BITS { Self::ZERO } else { Self::new(self.0 << n) }
  }

  /// Logical shift right, filling with 0s. An amount of `BITS` or more clears every bit.
  #[inline]
  pub const fn lshr(self, n: u32) -> Self {
    if n >= Self::BITS { Self::ZERO } else { Self(self.0 >> n) }
  }

  /// Arithmetic shift right, filling with copies of the sign bit. An amount of `BITS` or more
  /// yields all sign bits.
  #[inline]
  pub const fn ashr(self, n: u32) -> Self {
    let n = if n >= Self::BITS { Self::BITS - 1 } else { n };
    Self::new((self.get_signed() >> n) as u64)
  }

  /// Shift left by `n % BITS`.
  #[inline]
  pub const fn masking_shl(self, n: u32) -> Self {
    self.shl(n % Self::BITS)
  }

  /// Logical shift right by `n % BITS`.
  #[inline]
  pub const fn masking_lshr(self, n: u32) -> Self {
    self.lshr(n % Self::BITS)
  }

  /// Arithmetic shift right by `n % BITS`.
  #[inline]
  pub const fn masking_ashr(self, n: u32) -> Self {
    self.ashr(n % Self::BITS)
  }

  #[inline]
  pub const fn rotate_left(self, n: u32) -> Self {
    let n = n % Self::BITS;
    if n == 0 { return self }
    Self::new((self.0 << n) | (self.0 >> (Self::BITS - n)))
  }

  #[inline]
  pub const fn rotate_right(self, n: u32) -> Self {
    self.rotate_left(Self::BITS - n % Self::BITS)
  }

  #[inline]
  pub const fn count_ones(self) -> u32 {
    self.0.count_ones()
  }

  #[inline]
  pub const fn leading_zeros(self) -> u32 {
    self.0.leading_zeros() - (64 - Self::BITS)
  }

  #[inline]
  pub const fn trailing_zeros(self) -> u32 {
    if self.0 == 0 { Self::BITS } else { self.0.trailing_zeros() }
  }

  /// Reverse the order of the bytes.
  #[inline]
  pub const fn swap_bytes(self) -> Self {
    Self(self.0.swap_bytes() >> (64 - Self::BITS))
  }

  /// Widen to `W` bits, padding with copies of the sign bit.
  #[inline]
  pub const fn sign_extend<const W: u32>(self) -> BitPattern<W> {
    const { assert!(W >= BITS, "sign extension cannot narrow a pattern") }
    BitPattern::<W>::new(self.get_signed() as u64)
  }

  /// Widen to `W` bits, padding with 0s.
  #[inline]
  pub const fn zero_extend<const W: u32>(self) -> BitPattern<W> {
    const { assert!(W >= BITS, "zero extension cannot narrow a pattern") }
    BitPattern::<W>::new(self.0)
  }

  /// Narrow to `W` bits, keeping the low-order bits.
  #[inline]
  pub const fn truncate<const W: u32>(self) -> BitPattern<W> {
    const { assert!(W <= BITS, "truncation cannot widen a pattern") }
    BitPattern::<W>::new(self.0)
  }

  /// Change the width to `W`: sign- or zero-extend (according to `signed`) when widening,
  /// truncate when narrowing.
  #[inline]
  pub const fn resize<const W: u32>(self, signed: bool) -> BitPattern<W> {
    if signed {
      BitPattern::<W>::new(self.get_signed() as u64)
    } else {
      BitPattern::<W>::new(self.0)
    }
  }
}

impl<const BITS: u32> Not for BitPattern<BITS> {
  type Output = Self;

  #[inline]
  fn not(self) -> Self { Self::new(!self.0) }
}

/// Helper macro for the bitwise operators, which don't need to care about the width.
macro_rules! mk_bitwise {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $op:tt) => {
    impl<const BITS: u32> $trait for BitPattern<BITS> {
      type Output = Self;

      #[inline]
      fn $name(self, rhs: Self) -> Self { Self(self.0 $op rhs.0) }
    }

    impl<const BITS: u32> $trait_assign for BitPattern<BITS> {
      #[inline]
      fn $name_assign(&mut self, rhs: Self) { self.0 = self.0 $op rhs.0 }
    }
  }
}

mk_bitwise!{BitAnd, BitAndAssign, bitand, bitand_assign, &}
mk_bitwise!{BitOr, BitOrAssign, bitor, bitor_assign, |}
mk_bitwise!{BitXor, BitXorAssign, bitxor, bitxor_assign, ^}

impl<const BITS: u32> Shl<u32> for BitPattern<BITS> {
  type Output = Self;

  #[inline]
  fn shl(self, n: u32) -> Self { BitPattern::shl(self, n) }
}

/// Logical shift right; use [`BitPattern::ashr`] for the arithmetic one.
impl<const BITS: u32> Shr<u32> for BitPattern<BITS> {
  type Output = Self;

  #[inline]
  fn shr(self, n: u32) -> Self { self.lshr(n) }
}

impl<const BITS: u32> core::fmt::Debug for BitPattern<BITS> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("BitPattern")
      .field(&format_args!("0b{bits:0w$b}", w=Self::BITS as usize))
      .finish()
  }
}

impl<const BITS: u32> core::fmt::Binary for BitPattern<BITS> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Binary::fmt(&self.0, f)
  }
}

impl<const BITS: u32> core::fmt::Octal for BitPattern<BITS> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Octal::fmt(&self.0, f)
  }
}

impl<const BITS: u32> core::fmt::LowerHex for BitPattern<BITS> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::LowerHex::fmt(&self.0, f)
  }
}

impl<const BITS: u32> core::fmt::UpperHex for BitPattern<BITS> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::UpperHex::fmt(&self.0, f)
  }
}
