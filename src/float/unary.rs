use super::*;

impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
core::ops::Neg for Float<EXP, FRAC, Bits> {
  type Output = Float<EXP, FRAC, Bits>;

  /// Flip the sign bit. Exact, and applies to NaN too.
  #[inline]
  fn neg(self) -> Self::Output {
    Float::from_u64(self.bits() ^ Self::SIGN_MASK)
  }
}

impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
core::ops::Neg for &Float<EXP, FRAC, Bits> {
  type Output = Float<EXP, FRAC, Bits>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Same as `-self`.
  #[inline]
  pub fn negated(self) -> Self {
    -self
  }

  /// The absolute value of `self` (i.e. `self` with the sign bit cleared).
  #[inline]
  pub fn abs(self) -> Self {
    Self::from_u64(self.abs_bits())
  }

  /// The magnitude of `self` with the sign of `sign`.
  #[inline]
  pub fn copysign(self, sign: Self) -> Self {
    Self::from_u64(self.abs_bits() | (sign.bits() & Self::SIGN_MASK))
  }

  /// The least float that compares greater than `self`, under [`Subnormals::NATIVE`].
  ///
  /// The successor of `+∞` is `+∞`, that of `-∞` is `-GREATEST_FINITE_MAGNITUDE`, and a NaN
  /// gives a quiet NaN.
  #[inline]
  pub fn next_up(self) -> Self {
    self.next_up_in(Subnormals::NATIVE)
  }

  /// The least float that compares greater than `self`. Under [`Subnormals::FlushToZero`],
  /// subnormals are skipped over: the successor of any zero is the least normal magnitude, and
  /// the successor of the greatest negative normal is -0.
  pub fn next_up_in(self, mode: Subnormals) -> Self {
    if self.is_nan() {
      return self.quieted()
    }
    let flushes = mode == Subnormals::FlushToZero;
    if self.reads_as_zero(mode) {
      return if flushes { Self::LEAST_NORMAL_MAGNITUDE } else { Self::LEAST_NONZERO_MAGNITUDE }
    }
    if self.is_sign_minus() {
      // Towards zero in magnitude; -∞ goes to the greatest finite magnitude, just as intended.
      let next = Self::from_u64(self.bits() - 1);
      if flushes && next.is_subnormal() { Self::NEG_ZERO } else { next }
    } else if self.is_infinite() {
      self
    } else {
      Self::from_u64(self.bits() + 1)
    }
  }

  /// The greatest float that compares less than `self`, under [`Subnormals::NATIVE`].
  #[inline]
  pub fn next_down(self) -> Self {
    self.next_down_in(Subnormals::NATIVE)
  }

  /// The greatest float that compares less than `self`; the mirror image of
  /// [`Self::next_up_in`].
  #[inline]
  pub fn next_down_in(self, mode: Subnormals) -> Self {
    -(-self).next_up_in(mode)
  }

  /// The unit in the last place of `self` under [`Subnormals::NATIVE`]; see
  /// [`Self::ulp_in`].
  ///
  /// ```
  /// # use soft_tower::b64;
  /// assert_eq!(b64::ONE.ulp(), b64::ULP_OF_ONE);
  /// assert!(b64::GREATEST_FINITE_MAGNITUDE.ulp().is_finite());
  /// assert!(b64::INFINITY.ulp().is_nan());
  /// ```
  #[inline]
  pub fn ulp(self) -> Self {
    self.ulp_in(Subnormals::NATIVE)
  }

  /// The unit in the last place of `self`: the (positive) distance between `|self|` and the
  /// next float of greater magnitude, or for the greatest finite magnitude, the distance to
  /// where that next float would be.
  ///
  /// It is the least nonzero magnitude for zero and subnormals, and NaN for ∞ and NaN. Under
  /// [`Subnormals::FlushToZero`] an ulp that would be subnormal is 0 instead.
  pub fn ulp_in(self, mode: Subnormals) -> Self {
    if !self.is_finite() {
      return Self::NAN
    }
    let x = self.unpack(mode);
    if x.sig == 0 {
      return if mode == Subnormals::FlushToZero { Self::ZERO } else { Self::LEAST_NONZERO_MAGNITUDE }
    }
    // For a normal number, `exp` is the exponent of its last significand bit, which is exactly
    // the ulp; for a subnormal it's `QMIN`, the same.
    if mode == Subnormals::FlushToZero && x.exp < Self::EMIN {
      Self::ZERO
    } else {
      Self::from_u64(Self::exp2_bits(x.exp))
    }
  }

  /// The exponent of `self`: `floor(log2(|self|))` for finite nonzero numbers (subnormals
  /// included), `i32::MIN` for zero, and `i32::MAX` for ∞ and NaN.
  pub fn exponent(self) -> i32 {
    if !self.is_finite() {
      i32::MAX
    } else if self.is_zero() {
      i32::MIN
    } else {
      self.unpack(Subnormals::Gradual).lead_exp()
    }
  }

  /// The significand of `self`, a number in `[1, 2[` such that
  /// `|self| == significand × 2^exponent` for finite nonzero `self`. It is 0 for zero, ∞ for ∞,
  /// and NaN for NaN.
  pub fn significand(self) -> Self {
    if self.is_nan() {
      self.abs().quieted()
    } else if self.is_infinite() {
      Self::INFINITY
    } else if self.is_zero() {
      Self::ZERO
    } else {
      let x = self.unpack(Subnormals::Gradual);
      let shift = FRAC as i32 - (x.lead_exp() - x.exp);
      let sig = (x.sig as u64) << shift;
      Self::from_u64(Self::exp2_bits(0) | (sig & Self::FRAC_MASK))
    }
  }
}
