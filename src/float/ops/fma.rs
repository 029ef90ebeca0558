use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// `self + lhs × rhs`, computed exactly and rounded once, under [`Subnormals::NATIVE`].
  ///
  /// ```
  /// # use soft_tower::{b64, RoundFrom};
  /// let (x, y, z) = (b64::round_from(-0.2), b64::round_from(6.0), b64::round_from(0.2));
  /// assert_eq!(f64::round_from(x + y * z), 1.0000000000000002);
  /// assert_eq!(f64::round_from(x.adding_product(y, z)), 1.0);
  /// ```
  #[inline]
  pub fn adding_product(self, lhs: Self, rhs: Self) -> Self {
    self.adding_product_in(lhs, rhs, Subnormals::NATIVE)
  }

  /// `self + lhs × rhs`, computed exactly and rounded once (IEEE `fusedMultiplyAdd`).
  ///
  /// If any operand is NaN, the first NaN of `self`, `lhs`, `rhs` is returned (quiet). Otherwise
  /// `∞ × 0` is invalid whatever `self` is, and so is adding infinities of opposite signs.
  pub fn adding_product_in(self, lhs: Self, rhs: Self, mode: Subnormals) -> Self {
    if let Some(nan) = [self, lhs, rhs].into_iter().find(|x| x.is_nan()) {
      return nan.quieted()
    }
    let product_sign = lhs.is_sign_minus() != rhs.is_sign_minus();
    if lhs.is_infinite() || rhs.is_infinite() {
      if lhs.reads_as_zero(mode) || rhs.reads_as_zero(mode) {
        return Self::NAN
      }
      return if self.is_infinite() && self.is_sign_minus() != product_sign {
        Self::NAN
      } else {
        Self::infinity(product_sign)
      }
    }
    if self.is_infinite() {
      return self
    }

    let a = self.unpack(mode);
    let b = lhs.unpack(mode);
    let c = rhs.unpack(mode);
    if b.sig == 0 || c.sig == 0 {
      // Adding a zero product: only the sign of an exact zero sum is of interest.
      return if a.sig == 0 {
        Self::zero(a.sign && product_sign)
      } else {
        Self::round_pack(a, false, mode)
      }
    }
    let product = Self::mul_kernel(b, c);
    if a.sig == 0 {
      return Self::round_pack(product, false, mode)
    }
    let (sum, sticky) = Self::add_kernel(a, product);
    Self::round_pack(sum, sticky, mode)
  }
}
