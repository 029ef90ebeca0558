use super::*;

/// Addition and subtraction (both use the same kernel, and `a - b` is simply `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Fused multiply-add.
mod fma;

/// Remainders (truncating and IEEE).
mod rem;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// If any of `a`, `b` is a NaN, the first one, made quiet.
  #[inline]
  pub(crate) fn propagate_nan(a: Self, b: Self) -> Option<Self> {
    if a.is_nan() {
      Some(a.quieted())
    } else if b.is_nan() {
      Some(b.quieted())
    } else {
      None
    }
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $name_in:ident) => {
    impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
    $trait<Float<EXP, FRAC, Bits>> for Float<EXP, FRAC, Bits> {
      type Output = Float<EXP, FRAC, Bits>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name_in(rhs, Subnormals::NATIVE) }
    }

    impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
    $trait<&Float<EXP, FRAC, Bits>> for Float<EXP, FRAC, Bits> {
      type Output = Float<EXP, FRAC, Bits>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name_in(*rhs, Subnormals::NATIVE) }
    }

    impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
    $trait<Float<EXP, FRAC, Bits>> for &Float<EXP, FRAC, Bits> {
      type Output = Float<EXP, FRAC, Bits>;

      #[inline]
      fn $name(self, rhs: Float<EXP, FRAC, Bits>) -> Self::Output { (*self).$name_in(rhs, Subnormals::NATIVE) }
    }

    impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
    $trait<&Float<EXP, FRAC, Bits>> for &Float<EXP, FRAC, Bits> {
      type Output = Float<EXP, FRAC, Bits>;

      #[inline]
      fn $name(self, rhs: &Float<EXP, FRAC, Bits>) -> Self::Output { (*self).$name_in(*rhs, Subnormals::NATIVE) }
    }

    impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
    $trait_assign<Float<EXP, FRAC, Bits>> for Float<EXP, FRAC, Bits> {
      #[inline]
      fn $name_assign(&mut self, rhs: Float<EXP, FRAC, Bits>) { *self = self.$name_in(rhs, Subnormals::NATIVE) }
    }

    impl<const EXP: u32, const FRAC: u32, Bits: crate::Bits>
    $trait_assign<&Float<EXP, FRAC, Bits>> for Float<EXP, FRAC, Bits> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Float<EXP, FRAC, Bits>) { *self = self.$name_in(*rhs, Subnormals::NATIVE) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator of floats, implemented by
/// the method `$name_in`.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $name_in:ident) => {
    use crate::float::{Float, Subnormals};
    use crate::float::rational::is_correct_rounded;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::b32::ONE;
      let mut b = crate::b32::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is rounded correctly, for a format whose values are all
    /// exact in `f64`.
    ///
    /// The host's `f64` arithmetic on the (exact) operands tells the special cases and the sign of
    /// the result; the rational oracle checks the rounding.
    fn is_correct<const EXP: u32, const FRAC: u32, Bits: crate::Bits>(
      a: Float<EXP, FRAC, Bits>,
      b: Float<EXP, FRAC, Bits>,
    ) -> bool {
      let got = a.$name_in(b, Subnormals::Gradual);
      let host = a.to_f64_naive() $op b.to_f64_naive();
      if host.is_nan() {
        return got.is_nan() && !got.is_signaling_nan()
      }
      if got.is_nan() || got.is_sign_minus() != host.is_sign_negative() {
        return false
      }
      match (Rational::try_from(a), Rational::try_from(b)) {
        (Ok(x), Ok(y)) if !(stringify!($op) == "/" && y == Rational::from(0)) =>
          is_correct_rounded(x $op y, got),
        _ =>
          if host.is_infinite() { got.is_infinite() } else { host == 0. && got.is_zero() },
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $float:ty) => {
        #[test]
        fn $name() {
          for a in <$float>::cases_exhaustive() {
            for b in <$float>::cases_exhaustive() {
              assert!(is_correct(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    /// Compare bit for bit with the host's arithmetic, except that any NaN matches any NaN.
    macro_rules! test_native {
      ($name:ident, $float:ty, $native:ty, $cases:ident) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(a in <$float>::$cases(), b in <$float>::$cases()) {
            let got = a.$name_in(b, Subnormals::Gradual);
            let expected = <$native>::from_bits(a.to_bits()) $op <$native>::from_bits(b.to_bits());
            if expected.is_nan() {
              assert!(got.is_nan(), "{:?} ⋅ {:?}", a, b)
            } else {
              assert_eq!(got.to_bits(), expected.to_bits(), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    /// Under flush-to-zero, the result must be the gradual one with subnormal operands replaced by
    /// zero and a subnormal result replaced by a zero of the same sign.
    macro_rules! test_flush_to_zero {
      ($name:ident, $float:ty) => {
        #[test]
        fn $name() {
          let flush = |x: $float| if x.is_subnormal() { <$float>::zero(x.is_sign_minus()) } else { x };
          for a in <$float>::cases_exhaustive() {
            for b in <$float>::cases_exhaustive() {
              let got = a.$name_in(b, Subnormals::FlushToZero);
              let expected = flush(flush(a).$name_in(flush(b), Subnormals::Gradual));
              assert!(
                got.to_bits() == expected.to_bits() || (got.is_nan() && expected.is_nan())
                  // A result that is only subnormal before rounding flushes too.
                  || (got.is_zero() && expected.abs() == <$float>::LEAST_NORMAL_MAGNITUDE
                      && got.is_sign_minus() == expected.is_sign_minus()),
                "{:?} ⋅ {:?}", a, b,
              )
            }
          }
        }
      };
    }

    test_exhaustive!{float_4_3_exhaustive, Float::<4, 3, u8>}
    test_exhaustive!{float_5_2_exhaustive, Float::<5, 2, u8>}
    test_exhaustive!{float_3_4_exhaustive, Float::<3, 4, u8>}

    test_flush_to_zero!{float_4_3_flush_to_zero, Float::<4, 3, u8>}

    test_native!{b32_bits, crate::b32, f32, cases_proptest}
    test_native!{b32_near, crate::b32, f32, cases_proptest_finite}
    test_native!{b64_bits, crate::b64, f64, cases_proptest}
    test_native!{b64_near, crate::b64, f64, cases_proptest_finite}
  }
}

pub(crate) use mk_tests;
