use super::*;

/// The ten IEEE 754 classes a float falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  SignalingNan,
  QuietNan,
  NegativeInfinity,
  NegativeNormal,
  NegativeSubnormal,
  NegativeZero,
  PositiveZero,
  PositiveSubnormal,
  PositiveNormal,
  PositiveInfinity,
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The class of `self`. The sign of a NaN does not matter.
  ///
  /// ```
  /// # use soft_tower::{b32, Category};
  /// assert_eq!(b32::NEG_ZERO.classify(), Category::NegativeZero);
  /// assert_eq!(b32::LEAST_NONZERO_MAGNITUDE.classify(), Category::PositiveSubnormal);
  /// assert_eq!((-b32::NAN).classify(), Category::QuietNan);
  /// ```
  pub fn classify(self) -> Category {
    let negative = self.is_sign_minus();
    match (self.exp_field(), self.frac_field()) {
      (e, 0) if e == Self::EXP_MASK =>
        if negative { Category::NegativeInfinity } else { Category::PositiveInfinity },
      (e, f) if e == Self::EXP_MASK =>
        if f & Self::QUIET_BIT != 0 { Category::QuietNan } else { Category::SignalingNan },
      (0, 0) =>
        if negative { Category::NegativeZero } else { Category::PositiveZero },
      (0, _) =>
        if negative { Category::NegativeSubnormal } else { Category::PositiveSubnormal },
      _ =>
        if negative { Category::NegativeNormal } else { Category::PositiveNormal },
    }
  }

  /// Whether `self` is a NaN, quiet or signaling.
  #[inline]
  pub const fn is_nan(self) -> bool {
    self.abs_bits() > Self::INF_BITS
  }

  /// Whether `self` is a signaling NaN (a NaN with the quiet bit clear).
  #[inline]
  pub const fn is_signaling_nan(self) -> bool {
    self.is_nan() && self.frac_field() & Self::QUIET_BIT == 0
  }

  /// Whether `self` is +∞ or -∞.
  #[inline]
  pub const fn is_infinite(self) -> bool {
    self.abs_bits() == Self::INF_BITS
  }

  /// Whether `self` is neither infinite nor NaN.
  #[inline]
  pub const fn is_finite(self) -> bool {
    self.abs_bits() < Self::INF_BITS
  }

  /// Whether `self` is a normal number (not zero, subnormal, infinite, or NaN).
  #[inline]
  pub const fn is_normal(self) -> bool {
    let e = self.exp_field();
    e != 0 && e != Self::EXP_MASK
  }

  #[inline]
  pub const fn is_subnormal(self) -> bool {
    self.exp_field() == 0 && self.frac_field() != 0
  }

  /// Whether `self` is +0 or -0.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.abs_bits() == 0
  }

  /// Whether the sign bit is set. This is true of -0 and of NaNs with the sign bit set.
  #[inline]
  pub const fn is_sign_minus(self) -> bool {
    self.bits() & Self::SIGN_MASK != 0
  }

  /// Whether `self` is a canonical encoding under [`Subnormals::NATIVE`]; see
  /// [`Self::is_canonical_in`].
  #[inline]
  pub fn is_canonical(self) -> bool {
    self.is_canonical_in(Subnormals::NATIVE)
  }

  /// Whether `self` is a canonical encoding. Every encoding of a binary format is canonical,
  /// except that under [`Subnormals::FlushToZero`] a subnormal is not: it reads as, and is never
  /// produced in place of, a zero.
  #[inline]
  pub fn is_canonical_in(self, mode: Subnormals) -> bool {
    mode == Subnormals::Gradual || !self.is_subnormal()
  }
}
