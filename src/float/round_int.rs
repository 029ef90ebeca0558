use super::*;

/// How to round a number to an integral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingRule {
  /// To the nearest integer, ties away from zero (the schoolbook rule, C `round`).
  ToNearestOrAwayFromZero,
  /// To the nearest integer, ties to the even one (IEEE `roundToIntegralTiesToEven`).
  ToNearestOrEven,
  /// Toward +∞ (C `ceil`).
  Up,
  /// Toward -∞ (C `floor`).
  Down,
  /// Toward zero (C `trunc`).
  TowardZero,
  /// Away from zero.
  AwayFromZero,
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// `self` rounded to an integral value according to `rule`, under [`Subnormals::NATIVE`].
  ///
  /// ```
  /// # use soft_tower::{b64, RoundingRule, RoundFrom};
  /// let x = b64::round_from(-2.5f64);
  /// assert_eq!(f64::round_from(x.rounded(RoundingRule::ToNearestOrAwayFromZero)), -3.);
  /// assert_eq!(f64::round_from(x.rounded(RoundingRule::ToNearestOrEven)), -2.);
  /// assert_eq!(f64::round_from(x.rounded(RoundingRule::Up)), -2.);
  /// assert_eq!(f64::round_from(x.rounded(RoundingRule::Down)), -3.);
  /// ```
  #[inline]
  pub fn rounded(self, rule: RoundingRule) -> Self {
    self.rounded_in(rule, Subnormals::NATIVE)
  }

  /// `self` rounded to an integral value according to `rule`. The result is exact, and keeps
  /// the sign of `self` even if it is zero (e.g. `-0.5` rounds up to `-0`). ∞ and zero are
  /// returned unchanged, NaN as a quiet NaN.
  pub fn rounded_in(self, rule: RoundingRule, mode: Subnormals) -> Self {
    if self.is_nan() {
      return self.quieted()
    }
    if !self.is_finite() {
      return self
    }
    let Unpacked { sign, exp, sig } = self.unpack(mode);
    if sig == 0 {
      return Self::zero(sign)
    }
    // With a non-negative `exp` there are no bits right of the point: already integral.
    if exp >= 0 {
      return self
    }

    // Split `sig` into the `integral` part, left of the point, and the `rest` right of it, which
    // we compare with one `half`. Since `sig` has at most 53 bits, with a shift of 64 or more
    // the number is less than a half (but not zero).
    let shift = exp.unsigned_abs();
    let (integral, rest, half) = if shift >= 64 {
      (0, 1, 2)
    } else {
      (sig >> shift, sig & ((1 << shift) - 1), 1 << (shift - 1))
    };
    let inexact = rest != 0;
    let round_up = match rule {
      RoundingRule::ToNearestOrAwayFromZero => rest >= half,
      RoundingRule::ToNearestOrEven => rest > half || (rest == half && integral & 1 == 1),
      RoundingRule::Up => inexact && !sign,
      RoundingRule::Down => inexact && sign,
      RoundingRule::TowardZero => false,
      RoundingRule::AwayFromZero => inexact,
    };
    let integral = integral + u128::from(round_up);
    Self::round_pack(Unpacked { sign, exp: 0, sig: integral }, false, mode)
  }
}
