use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The exact product of `x` and `y`. Significands have at most 53 bits, so their product fits a
  /// `u128` with room to spare.
  #[inline]
  pub(crate) fn mul_kernel(x: Unpacked, y: Unpacked) -> Unpacked {
    Unpacked { sign: x.sign != y.sign, exp: x.exp + y.exp, sig: x.sig * y.sig }
  }

  /// The product `self × other`, correctly rounded.
  pub fn mul_in(self, other: Self, mode: Subnormals) -> Self {
    if let Some(nan) = Self::propagate_nan(self, other) {
      return nan
    }
    let sign = self.is_sign_minus() != other.is_sign_minus();
    if self.is_infinite() || other.is_infinite() {
      // ∞ × 0 is invalid.
      return if self.reads_as_zero(mode) || other.reads_as_zero(mode) {
        Self::NAN
      } else {
        Self::infinity(sign)
      }
    }
    let x = self.unpack(mode);
    let y = other.unpack(mode);
    if x.sig == 0 || y.sig == 0 {
      return Self::zero(sign)
    }
    Self::round_pack(Self::mul_kernel(x, y), false, mode)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign, mul_in}
