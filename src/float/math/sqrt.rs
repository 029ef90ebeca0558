use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Return √x as a `sig × 2^exp` that is exact up to the sticky bit, which is also returned.
  /// `x` must have a nonzero `sig`; its sign is ignored.
  #[inline]
  pub(crate) fn sqrt_kernel(x: Unpacked) -> (Unpacked, bool) {
    // Taking the square root of `sig × 2^exp` has two steps.
    //
    // First, make `exp` even and `sig` as wide as possible: normalise so the leading 1 is at bit
    // 125, then, if `exp` is odd, shift one more place left (the leading 1 then is at bit 126,
    // which still fits).
    //
    // Then
    //
    //   √(sig × 2^exp) = √sig × 2^(exp / 2)
    //
    // where the integer square root of a 126- or 127-bit `sig` has 63 or 64 bits, and it's exact
    // iff it squares back to `sig`.
    let x = x.normalised();
    let odd = x.exp & 1 != 0;
    let (sig, exp) = if odd { (x.sig << 1, x.exp - 1) } else { (x.sig, x.exp) };
    let root = sig.isqrt();
    let sticky = root * root != sig;
    (Unpacked { sign: false, exp: exp / 2, sig: root }, sticky)
  }

  /// The square root of `self`, correctly rounded, under [`Subnormals::NATIVE`].
  ///
  /// ```
  /// # use soft_tower::{b32, RoundFrom};
  /// assert_eq!(f32::round_from(b32::round_from(2f32).square_root()), 2f32.sqrt());
  /// assert!(b32::MINUS_ONE.square_root().is_nan());
  /// ```
  #[inline]
  pub fn square_root(self) -> Self {
    self.square_root_in(Subnormals::NATIVE)
  }

  /// The square root of `self`, correctly rounded. The square root of -0 is -0, that of +∞ is
  /// +∞, and that of any other negative number is NaN.
  pub fn square_root_in(self, mode: Subnormals) -> Self {
    if self.is_nan() {
      return self.quieted()
    }
    let x = self.unpack(mode);
    if x.sig == 0 {
      return Self::zero(x.sign)
    }
    if x.sign {
      return Self::NAN
    }
    if self.is_infinite() {
      return self
    }
    let (root, sticky) = Self::sqrt_kernel(x);
    Self::round_pack(root, sticky, mode)
  }
}
