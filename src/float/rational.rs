use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs};

/// The error type returned when a [Float] cannot be converted to a [Rational] because it is
/// infinite or NaN.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct NotFinite;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> TryFrom<Float<EXP, FRAC, Bits>> for Rational {
  type Error = NotFinite;

  /// This is a **super-explicit** rendition of decoding an IEEE float, straight from the
  /// definition, since this is what the optimised code is checked against.
  fn try_from(value: Float<EXP, FRAC, Bits>) -> Result<Self, Self::Error> {
    let bits = value.bits();
    let sign = bits >> (EXP + FRAC) & 1 == 1;
    let biased = (bits >> FRAC) & ((1 << EXP) - 1);
    let fraction = bits & ((1 << FRAC) - 1);
    let bias = (1i64 << (EXP - 1)) - 1;

    let magnitude = if biased == (1 << EXP) - 1 {
      return Err(NotFinite)
    } else if biased == 0 {
      // Subnormal: 0.fff × 2^(1 - bias)
      Rational::from(fraction) * Rational::power_of_2(1 - bias - FRAC as i64)
    } else {
      // Normal: 1.fff × 2^(biased - bias)
      Rational::from(fraction + (1 << FRAC)) * Rational::power_of_2(biased as i64 - bias - FRAC as i64)
    };
    Ok(if sign { -magnitude } else { magnitude })
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The same value as an `f64`, computed naively. Only exact for formats whose values all lie
  /// in the normal range of `f64` and have at most 53 significant bits, which holds for the
  /// small formats used in exhaustive tests.
  pub(crate) fn to_f64_naive(self) -> f64 {
    let negative = self.bits() & Self::SIGN_MASK != 0;
    let magnitude = if self.exp_field() == Self::EXP_MASK {
      if self.frac_field() == 0 { f64::INFINITY } else { f64::NAN }
    } else {
      let x = self.unpack(Subnormals::Gradual);
      x.sig as f64 * 2f64.powi(x.exp)
    };
    if negative { -magnitude } else { magnitude }
  }
}

/// Check whether the rational number `exact` should be rounded to `float`, under round to
/// nearest, ties to even, with gradual underflow.
///
///   - Only a NaN is rounded to NaN, so no `exact` is.
///   - `exact` is rounded to ±∞ iff its magnitude is at least halfway between the greatest finite
///     magnitude and the next power of two (where the next float would be, if there were one).
///   - Otherwise, `float` must be the closest to `exact`, or tied for closest and even.
///
/// The sign of a zero `float` is not checked.
pub fn is_correct_rounded<const EXP: u32, const FRAC: u32, Bits: crate::Bits>(
  exact: Rational,
  float: Float<EXP, FRAC, Bits>,
) -> bool {
  if float.is_nan() { return false }

  let magnitude = (&exact).abs();
  let negative = exact < Rational::from(0);
  let abs_bits = float.abs_bits();
  if abs_bits != 0 && negative != float.is_sign_minus() { return false }

  // The (virtual) float right after the greatest finite one.
  let beyond = Rational::power_of_2(Float::<EXP, FRAC, Bits>::EMAX as i64 + 1);
  let magnitude_of = |abs_bits: u64| -> Rational {
    if abs_bits == Float::<EXP, FRAC, Bits>::INF_BITS {
      beyond.clone()
    } else {
      Rational::try_from(Float::<EXP, FRAC, Bits>::from_u64(abs_bits)).unwrap()
    }
  };

  let curr = magnitude_of(abs_bits);
  if magnitude == curr { return true }
  let is_even = abs_bits & 1 == 0;

  if magnitude < curr {
    // Needs to be closer to `curr` than to the float below it.
    if abs_bits == 0 { return false }
    let prev = magnitude_of(abs_bits - 1);
    if magnitude <= prev { return false }
    let (d_curr, d_prev) = (&curr - &magnitude, &magnitude - &prev);
    d_curr < d_prev || (d_curr == d_prev && is_even)
  } else {
    // Needs to be closer to `curr` than to the float above it.
    if abs_bits == Float::<EXP, FRAC, Bits>::INF_BITS { return true }
    let next = magnitude_of(abs_bits + 1);
    if magnitude >= next { return false }
    let (d_curr, d_next) = (&magnitude - &curr, &next - &magnitude);
    d_curr < d_next || (d_curr == d_next && is_even)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tiny_format_by_hand() {
    type F = Float<4, 3, u8>;
    for (bits, (num, den)) in [
      (0b0_0000_000, (0, 1)),
      (0b0_0000_001, (1, 512)),
      (0b0_0000_111, (7, 512)),
      (0b0_0001_000, (8, 512)),
      (0b0_0001_001, (9, 512)),
      (0b0_0111_000, (1, 1)),
      (0b0_0111_100, (3, 2)),
      (0b0_1000_100, (3, 1)),
      (0b0_1110_111, (240, 1)),
    ] {
      assert_eq!(Rational::try_from(F::from_bits(bits)), Ok(Rational::from_signeds(num, den)));
      assert_eq!(Rational::try_from(F::from_bits(bits | 0x80)), Ok(-Rational::from_signeds(num, den)));
    }
    assert_eq!(Rational::try_from(F::from_bits(0b0_1111_000)), Err(NotFinite));
    assert_eq!(Rational::try_from(F::from_bits(0b1_1111_010)), Err(NotFinite));
  }

  #[test]
  fn binary64() {
    assert_eq!(Rational::try_from(crate::b64::ONE), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(crate::b64::from_bits(0.375f64.to_bits())), Ok(Rational::from_signeds(3, 8)));
    assert_eq!(Rational::try_from(crate::b64::LEAST_NONZERO_MAGNITUDE), Ok(Rational::power_of_2(-1074i64)));
  }

  #[test]
  fn naive_f64() {
    type F = Float<4, 3, u8>;
    assert_eq!(F::from_bits(0b0_0000_001).to_f64_naive(), 1. / 512.);
    assert_eq!(F::from_bits(0b1_1110_111).to_f64_naive(), -240.);
    assert!(F::from_bits(0b1_1111_000).to_f64_naive() == f64::NEG_INFINITY);
    assert!(F::from_bits(0b0_1111_100).to_f64_naive().is_nan());
  }

  #[test]
  fn oracle() {
    type F = Float<4, 3, u8>;
    let r = |n: i64, d: i64| Rational::from_signeds(n, d);
    // 1 and 1.125 are neighbours; 1.0625 is a tie that goes to the even 1.
    assert!(is_correct_rounded(r(17, 16), F::from_bits(0b0_0111_000)));
    assert!(!is_correct_rounded(r(17, 16), F::from_bits(0b0_0111_001)));
    assert!(is_correct_rounded(r(-18, 16), F::from_bits(0b1_0111_001)));
    assert!(!is_correct_rounded(r(18, 16), F::from_bits(0b1_0111_001)));
    // 240 is the greatest finite, the next would be 256; 248 is the tie, which goes to ∞.
    assert!(is_correct_rounded(r(247, 1), F::GREATEST_FINITE_MAGNITUDE));
    assert!(is_correct_rounded(r(248, 1), F::INFINITY));
    assert!(!is_correct_rounded(r(248, 1), F::GREATEST_FINITE_MAGNITUDE));
    assert!(is_correct_rounded(r(-10000, 1), F::NEG_INFINITY));
    // Half of the least subnormal is a tie with zero.
    assert!(is_correct_rounded(r(1, 1024), F::ZERO));
    assert!(is_correct_rounded(r(1, 1023), F::LEAST_NONZERO_MAGNITUDE));
    assert!(!is_correct_rounded(r(0, 1), F::NAN));
  }
}
