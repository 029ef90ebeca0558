use super::*;

/// π × 2<sup>126</sup>, truncated; enough bits to truncate π to any precision up to 53.
const PI_FIXED: u128 = 0xc90fdaa2_2168c234_c4c6628b_80dc1cd1;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Zero (`+0`), the additive identity element.
  pub const ZERO: Self = Self::zero(false);

  /// Negative zero (`-0`), which compares equal to [`Self::ZERO`].
  pub const NEG_ZERO: Self = Self::zero(true);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self::from_u64(Self::exp2_bits(0));

  /// Minus one (`-1`).
  pub const MINUS_ONE: Self = Self::from_u64(Self::SIGN_MASK | Self::exp2_bits(0));

  /// Positive infinity (`+∞`).
  //
  // Represented by the bit pattern `0b0_111…1_000…0`.
  pub const INFINITY: Self = Self::infinity(false);

  /// Negative infinity (`-∞`).
  pub const NEG_INFINITY: Self = Self::infinity(true);

  /// The canonical quiet NaN, with no payload.
  //
  // Represented by the bit pattern `0b0_111…1_100…0`.
  pub const NAN: Self = Self::from_u64(Self::INF_BITS | Self::QUIET_BIT);

  /// A signaling NaN. In a format with a single fraction bit there is no room for one, and this
  /// is the same as [`Self::NAN`].
  //
  // Represented by the bit pattern `0b0_111…1_010…0`.
  pub const SIGNALING_NAN: Self = {
    if Self::SIGNIFICAND_BITS >= 2 {
      Self::from_u64(Self::INF_BITS | (Self::QUIET_BIT >> 1))
    } else {
      Self::NAN
    }
  };

  /// The largest finite value.
  //
  // Represented by the bit pattern `0b0_111…10_111…1`.
  pub const GREATEST_FINITE_MAGNITUDE: Self =
    Self::from_u64(((Self::EXP_MASK - 1) << Self::SIGNIFICAND_BITS) | Self::FRAC_MASK);

  /// The smallest positive normal value, 2<sup>`1 - bias`</sup>.
  pub const LEAST_NORMAL_MAGNITUDE: Self = Self::from_u64(Self::HIDDEN_BIT);

  /// The smallest positive value, the least subnormal number.
  pub const LEAST_NONZERO_MAGNITUDE: Self = Self::from_u64(1);

  /// The distance between one and the next larger value, 2<sup>`-FRAC`</sup>. Same as
  /// `ONE.ulp()`.
  pub const ULP_OF_ONE: Self = Self::from_u64(Self::exp2_bits(-(Self::SIGNIFICAND_BITS as i32)));

  /// π, rounded **toward zero** to the precision of the format.
  ///
  /// Note that this is not always the nearest value to π; for `binary32` it is one ulp below it.
  ///
  /// ```
  /// # use soft_tower::{b32, b64};
  /// assert_eq!(b32::PI.to_bits(), 0x40490fda);
  /// assert_eq!(b64::PI.to_bits(), core::f64::consts::PI.to_bits());
  /// ```
  pub const PI: Self = {
    // π is in [2, 4[, so its first bit is 2^1 and lies at position 127 of `PI_FIXED`.
    let sig = (PI_FIXED >> (128 - Self::PRECISION)) as u64;
    let biased = (Self::BIAS + 1) as u64;
    Self::from_u64((biased << Self::SIGNIFICAND_BITS) | (sig & Self::FRAC_MASK))
  };

  /// The radix of the format.
  pub const RADIX: u32 = 2;
}
