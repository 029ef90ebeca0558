use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The quotient of `x` and `y` as a `sig × 2^exp` that is exact up to the sticky bit, which is
  /// also returned. Both `sig`s must be nonzero, and at most 53 bits.
  #[inline]
  pub(crate) fn div_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, bool) {
    // With the dividend's leading 1 at bit 125 and a divisor of at most 53 bits, the integer
    // quotient has at least 73 bits: plenty for rounding to 53, with the remainder telling
    // whether the division was exact.
    let x = x.normalised();
    let sig = x.sig / y.sig;
    let sticky = x.sig % y.sig != 0;
    (Unpacked { sign: x.sign != y.sign, exp: x.exp - y.exp, sig }, sticky)
  }

  /// The quotient `self / other`, correctly rounded.
  ///
  /// A nonzero number divided by zero is an infinity with the sign of the quotient; `0 / 0` and
  /// `∞ / ∞` are NaN.
  pub fn div_in(self, other: Self, mode: Subnormals) -> Self {
    if let Some(nan) = Self::propagate_nan(self, other) {
      return nan
    }
    let sign = self.is_sign_minus() != other.is_sign_minus();
    match (self.is_infinite(), other.is_infinite()) {
      (true, true) => return Self::NAN,
      (true, false) => return Self::infinity(sign),
      (false, true) => return Self::zero(sign),
      (false, false) => (),
    }
    let x = self.unpack(mode);
    let y = other.unpack(mode);
    match (x.sig == 0, y.sig == 0) {
      (true, true) => Self::NAN,
      (true, false) => Self::zero(sign),
      (false, true) => Self::infinity(sign),
      (false, false) => {
        let (quotient, sticky) = Self::div_kernel(x, y);
        Self::round_pack(quotient, sticky, mode)
      }
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign, div_in}
