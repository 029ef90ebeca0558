use super::*;

/// `mx × 2^ex` modulo `my × 2^ey`, for `mx`, `my` of at most 53 bits, `my` nonzero. The result is
/// exact, returned as a `sig × 2^exp` pair.
fn mod_kernel(mx: u128, ex: i32, my: u128, ey: i32) -> (u128, i32) {
  if ex >= ey {
    // Work at `y`'s exponent: `x = mx × 2^(ex - ey)` units of `2^ey`. Reduce modulo `my` while
    // shifting in the difference at most 64 bits at a time, so that `r < my` never overflows.
    let mut r = mx % my;
    let mut d = (ex - ey) as u32;
    while d > 0 {
      let s = d.min(64);
      r = (r << s) % my;
      d -= s;
    }
    (r, ey)
  } else {
    // Work at `x`'s exponent, where `y` is `my << shift`; if that is larger than any `mx`,
    // there's nothing to reduce.
    let shift = (ey - ex) as u32;
    if shift >= 64 { (mx, ex) } else { (mx % (my << shift), ex) }
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The special cases shared by both remainders: NaN if either is NaN, `self` is ∞, or `other`
  /// is zero; `self` if `self` is zero or `other` is ∞.
  fn remainder_special(self, other: Self, mode: Subnormals) -> Option<Self> {
    if let Some(nan) = Self::propagate_nan(self, other) {
      return Some(nan)
    }
    if self.is_infinite() || other.reads_as_zero(mode) {
      return Some(Self::NAN)
    }
    if self.reads_as_zero(mode) || other.is_infinite() {
      return Some(Self::round_pack(self.unpack(mode), false, mode))
    }
    None
  }

  /// The remainder of `self / other` with the quotient truncated towards zero, under
  /// [`Subnormals::NATIVE`]; same as `self % other` and as C `fmod`.
  #[inline]
  pub fn truncating_remainder(self, other: Self) -> Self {
    self.truncating_remainder_in(other, Subnormals::NATIVE)
  }

  /// The remainder of `self / other` with the quotient truncated towards zero. The result has
  /// the sign of `self` and is always exact.
  pub fn truncating_remainder_in(self, other: Self, mode: Subnormals) -> Self {
    if let Some(special) = self.remainder_special(other, mode) {
      return special
    }
    let x = self.unpack(mode);
    let y = other.unpack(mode);
    let (sig, exp) = mod_kernel(x.sig, x.exp, y.sig, y.exp);
    Self::round_pack(Unpacked { sign: x.sign, exp, sig }, false, mode)
  }

  /// The IEEE remainder of `self / other`, under [`Subnormals::NATIVE`]; see
  /// [`Self::remainder_in`].
  #[inline]
  pub fn remainder(self, other: Self) -> Self {
    self.remainder_in(other, Subnormals::NATIVE)
  }

  /// The IEEE remainder `self - n × other`, where `n` is the integer nearest to `self / other`
  /// (ties to even). The result is exact, at most `|other| / 2` in magnitude, and a zero result
  /// has the sign of `self`.
  ///
  /// ```
  /// # use soft_tower::{b64, RoundFrom};
  /// let r = |x: f64, y: f64| f64::round_from(b64::round_from(x).remainder(b64::round_from(y)));
  /// assert_eq!(r(5., 3.), -1.);
  /// assert_eq!(r(7., 2.), -1.);
  /// assert_eq!(r(5., 2.), 1.);
  /// ```
  pub fn remainder_in(self, other: Self, mode: Subnormals) -> Self {
    if let Some(special) = self.remainder_special(other, mode) {
      return special
    }
    let x = self.unpack(mode);
    let y = other.unpack(mode);
    // If `|x| < 2^(ex + 53) <= |y| / 2`, the nearest integer quotient is 0.
    if y.exp - x.exp >= 54 {
      return Self::round_pack(x, false, mode)
    }

    // First reduce modulo `2y`; what remains is in `[0, 2y[`. Then move to one bit finer than
    // both `r` and `y`, so that comparing `r` to `y/2` is exact.
    let (r, e) = mod_kernel(x.sig, x.exp, y.sig, y.exp + 1);
    let mut r = r << 1;
    let y_sig = y.sig << (y.exp - e + 1);
    let e = e - 1;

    // If `r >= y` the quotient so far is odd; take another `y` off.
    let odd = r >= y_sig;
    if odd {
      r -= y_sig;
    }
    // Now `r` is in `[0, y[`; if it's over half of `y` (or exactly half, with an odd quotient),
    // going one quotient further gives the smaller magnitude `y - r`, of the opposite sign.
    let (sig, flip) = if 2 * r > y_sig || (2 * r == y_sig && odd) { (y_sig - r, true) } else { (r, false) };
    let sign = if sig == 0 { x.sign } else { x.sign != flip };
    Self::round_pack(Unpacked { sign, exp: e, sig }, false, mode)
  }
}

use core::ops::{Rem, RemAssign};
super::mk_ops!{Rem, RemAssign, rem, rem_assign, truncating_remainder_in}
