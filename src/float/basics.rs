use super::*;
use crate::underlying::const_as;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The size of this format in bits (i.e. `1 + EXP + FRAC`).
  pub const BITS: u32 = {
    assert!(
      1 + EXP + FRAC == Bits::BITS,
      "The sign, exponent, and fraction fields must exactly fill the underlying Bits type",
    );
    Bits::BITS
  };

  /// The width of the exponent field (i.e. parameter `EXP`).
  pub const EXPONENT_BITS: u32 = {
    // The kernels keep exponents in an `i32` with plenty of headroom, and the decimal codec
    // has bignums sized for this range.
    assert!(EXP >= 2 && EXP <= 15, "The exponent field must have between 2 and 15 bits");
    EXP
  };

  /// The width of the fraction field (i.e. parameter `FRAC`), not counting the hidden bit.
  pub const SIGNIFICAND_BITS: u32 = {
    // A product of two significands has to fit comfortably in the `u128` the kernels use, with
    // two guard bits on top.
    assert!(FRAC >= 1 && FRAC <= 52, "The fraction field must have between 1 and 52 bits");
    FRAC
  };

  /// The number of significant bits of a normal number (the fraction field plus the hidden
  /// bit).
  pub const PRECISION: u32 = Self::SIGNIFICAND_BITS + 1;

  /// The exponent bias.
  pub(crate) const BIAS: i32 = (1 << (Self::EXPONENT_BITS - 1)) - 1;

  /// The exponent of the largest finite numbers (in the `1.xxx × 2^e` sense).
  pub(crate) const EMAX: i32 = Self::BIAS;

  /// The exponent of the smallest normal numbers (in the `1.xxx × 2^e` sense).
  pub(crate) const EMIN: i32 = 1 - Self::BIAS;

  /// The exponent of the last significand bit of a subnormal number; the smallest `exp` of an
  /// [`Unpacked`].
  pub(crate) const QMIN: i32 = Self::EMIN - Self::SIGNIFICAND_BITS as i32;

  pub(crate) const SIGN_MASK: u64 = 1 << (Self::BITS - 1);

  /// A biased exponent field of all 1s (the exponent of ∞ and NaN).
  pub(crate) const EXP_MASK: u64 = (1 << Self::EXPONENT_BITS) - 1;

  pub(crate) const FRAC_MASK: u64 = (1 << Self::SIGNIFICAND_BITS) - 1;

  /// The hidden bit, in the position it has in the `sig` of an [`Unpacked`] normal number.
  pub(crate) const HIDDEN_BIT: u64 = 1 << Self::SIGNIFICAND_BITS;

  /// The most significant fraction bit, which tells quiet NaNs from signaling ones.
  pub(crate) const QUIET_BIT: u64 = 1 << (Self::SIGNIFICAND_BITS - 1);

  /// The encoding of +∞.
  pub(crate) const INF_BITS: u64 = Self::EXP_MASK << Self::SIGNIFICAND_BITS;

  /// Construct a float from its raw bit representation.
  #[inline]
  pub const fn from_bits(bits: Bits) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> Bits {
    self.0
  }

  /// Construct a float from the low [`Self::BITS`] bits of a `u64`.
  #[inline]
  pub(crate) const fn from_u64(bits: u64) -> Self {
    Self(const_as::<u64, Bits>(bits))
  }

  /// The encoding, zero-extended to a `u64`.
  #[inline]
  pub(crate) const fn bits(self) -> u64 {
    const_as::<Bits, u64>(self.0)
  }

  /// The encoding without the sign bit.
  #[inline]
  pub(crate) const fn abs_bits(self) -> u64 {
    self.bits() & !Self::SIGN_MASK
  }

  /// The biased exponent field.
  #[inline]
  pub(crate) const fn exp_field(self) -> u64 {
    (self.bits() >> Self::SIGNIFICAND_BITS) & Self::EXP_MASK
  }

  /// The fraction field.
  #[inline]
  pub(crate) const fn frac_field(self) -> u64 {
    self.bits() & Self::FRAC_MASK
  }

  /// ±0.
  #[inline]
  pub(crate) const fn zero(sign: bool) -> Self {
    Self::from_u64(if sign { Self::SIGN_MASK } else { 0 })
  }

  /// ±∞.
  #[inline]
  pub(crate) const fn infinity(sign: bool) -> Self {
    Self::from_u64(if sign { Self::SIGN_MASK | Self::INF_BITS } else { Self::INF_BITS })
  }

  /// `self` with the quiet bit set (for a NaN, its quiet counterpart with the same payload).
  #[inline]
  pub(crate) const fn quieted(self) -> Self {
    Self::from_u64(self.bits() | Self::QUIET_BIT)
  }

  /// The encoding of `2^e`, for `e` in the range of normal and subnormal exponents.
  pub(crate) const fn exp2_bits(e: i32) -> u64 {
    if e >= Self::EMIN {
      ((e + Self::BIAS) as u64) << Self::SIGNIFICAND_BITS
    } else {
      1 << (e - Self::QMIN)
    }
  }
}
