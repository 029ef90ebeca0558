use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Return the sum of `x` and `y` as a `sig × 2^exp` that is exact up to the sticky bit, which
  /// is also returned. An exact zero sum comes out as +0.
  ///
  /// `x` and `y` must have nonzero `sig`s of at most 125 bits.
  #[inline]
  pub(crate) fn add_kernel(x: Unpacked, y: Unpacked) -> (Unpacked, bool) {
    // Place the leading 1 of both at bit `LEAD`, which leaves room for a carry. Then the one with
    // the greater `exp` has the greater magnitude, or if the `exp`s are equal the one with the
    // greater `sig`. Call it `x`.
    let (x, y) = (x.normalised(), y.normalised());
    let (x, y) = if (x.exp, x.sig) >= (y.exp, y.sig) { (x, y) } else { (y, x) };

    // Line up `y` with `x` by shifting it right by the difference in exponents. Whatever bits fall
    // off the end go to the sticky bit.
    let shift = (x.exp - y.exp) as u32;
    let (shifted, sticky) = if shift >= 128 {
      (0, true)
    } else {
      let shifted = y.sig >> shift;
      (shifted, shifted << shift != y.sig)
    };

    // If we add, the lost bits of `y` are an extra positive amount less than 1; if we subtract,
    // we borrow 1 from the result, and the lost bits become the positive amount `1 - lost` that
    // is less than 1 too. Either way, the sticky bit survives as is.
    let sig = if x.sign == y.sign {
      x.sig + shifted
    } else {
      x.sig - shifted - u128::from(sticky)
    };
    let sign = x.sign && sig != 0;
    (Unpacked { sign, exp: x.exp, sig }, sticky)
  }

  /// The sum `self + other`, correctly rounded.
  ///
  /// With round to nearest, an exact zero sum is +0, unless both operands are -0.
  pub fn add_in(self, other: Self, mode: Subnormals) -> Self {
    if let Some(nan) = Self::propagate_nan(self, other) {
      return nan
    }
    if self.is_infinite() {
      // ∞ - ∞ is invalid.
      return if other.is_infinite() && other.is_sign_minus() != self.is_sign_minus() {
        Self::NAN
      } else {
        self
      }
    }
    if other.is_infinite() {
      return other
    }

    let x = self.unpack(mode);
    let y = other.unpack(mode);
    match (x.sig == 0, y.sig == 0) {
      (true, true) => Self::zero(x.sign && y.sign),
      (true, false) => Self::round_pack(y, false, mode),
      (false, true) => Self::round_pack(x, false, mode),
      (false, false) => {
        let (sum, sticky) = Self::add_kernel(x, y);
        Self::round_pack(sum, sticky, mode)
      }
    }
  }

  /// The difference `self - other`, correctly rounded.
  pub fn sub_in(self, other: Self, mode: Subnormals) -> Self {
    // NaNs first, so that a NaN `other` keeps its sign bit.
    if let Some(nan) = Self::propagate_nan(self, other) {
      return nan
    }
    self.add_in(-other, mode)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign, add_in}
super::mk_ops!{Sub, SubAssign, sub, sub_assign, sub_in}
