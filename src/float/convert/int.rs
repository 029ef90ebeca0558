use super::*;

use crate::error::{trap, Error, Overflow};
use crate::int::Integer;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The integer `value`, correctly rounded; a magnitude too large for the format is ±∞.
  #[inline]
  fn from_value(value: i128, mode: Subnormals) -> Self {
    let x = Unpacked { sign: value < 0, exp: 0, sig: value.unsigned_abs() };
    Self::round_pack(x, false, mode)
  }

  /// Whether the integer `value` is exactly representable: it has at most [`Self::PRECISION`]
  /// significant bits, once trailing zeros are dropped, and it's below the overflow threshold.
  fn holds_exactly(value: i128) -> bool {
    let magnitude = value.unsigned_abs();
    if magnitude == 0 {
      return true
    }
    let lead = 127 - magnitude.leading_zeros() as i32;
    let width = lead + 1 - magnitude.trailing_zeros() as i32;
    width <= Self::PRECISION as i32 && lead <= Self::EMAX
  }

  /// The value of `int`, if it is exactly representable in this format, or `None` otherwise.
  ///
  /// ```
  /// # use soft_tower::{b16, I32};
  /// assert!(b16::from_int_exactly(I32::from(2048)).is_some());
  /// assert!(b16::from_int_exactly(I32::from(2049)).is_none());
  /// assert!(b16::from_int_exactly(I32::from(-65504)).is_some());
  /// assert!(b16::from_int_exactly(I32::from(65536)).is_none());
  /// ```
  pub fn from_int_exactly<const W: u32, const S: bool>(int: Integer<W, S>) -> Option<Self> {
    let value = int.value();
    Self::holds_exactly(value).then(|| Self::from_value(value, Subnormals::Gradual))
  }

  /// `self` truncated towards zero, and whether it already was an integer; `None` for NaN and
  /// ∞. Every magnitude of `2^64` or more comes out as `2^64`, which no integer type holds.
  fn truncated(self) -> Option<(i128, bool)> {
    if !self.is_finite() {
      return None
    }
    // Subnormals are never integers, even if they're zeros under `FlushToZero`.
    let x = self.unpack(Subnormals::Gradual);
    let (magnitude, exact) = if x.sig == 0 {
      (0, true)
    } else if x.exp >= 0 {
      if x.lead_exp() >= 64 { (1 << 64, true) } else { (x.sig << x.exp, true) }
    } else {
      let shift = x.exp.unsigned_abs();
      if shift >= 128 {
        (0, false)
      } else {
        (x.sig >> shift, x.sig & ((1 << shift) - 1) == 0)
      }
    };
    let value = magnitude as i128;
    Some((if x.sign { -value } else { value }, exact))
  }

  /// `self` truncated towards zero, as an integer of type `Integer<W, S>`, or an error: a
  /// [`FatalOverflow`](Error::FatalOverflow) if `self` is NaN, ∞, or out of range after
  /// truncation.
  pub fn try_to_int<const W: u32, const S: bool>(self) -> Result<Integer<W, S>, Error> {
    let (value, _) = self.truncated().ok_or(Overflow::NonFinite)?;
    Integer::try_new(value).map_err(|_| Overflow::Conversion.into())
  }

  /// `self` truncated towards zero, as an integer of type `Integer<W, S>`.
  ///
  /// # Panics
  ///
  /// If `self` is NaN or ∞, or if it's out of range of the target after truncation, with a
  /// [`FatalOverflow`](Error::FatalOverflow).
  ///
  /// ```
  /// # use soft_tower::{b64, I8, U8, RoundFrom};
  /// assert_eq!(b64::round_from(-127.9).to_int::<8, true>(), I8::from(-127));
  /// assert_eq!(b64::round_from(255.5).to_int::<8, false>(), U8::MAX);
  /// ```
  ///
  /// ```should_panic
  /// # use soft_tower::{b64, RoundFrom};
  /// let _ = b64::round_from(256).to_int::<8, false>();
  /// ```
  #[track_caller]
  pub fn to_int<const W: u32, const S: bool>(self) -> Integer<W, S> {
    match self.try_to_int() {
      Ok(int) => int,
      Err(e) => trap(e),
    }
  }

  /// `self` as an integer of type `Integer<W, S>`, if it is an integer in the range of that type,
  /// or `None` otherwise. Both zeros convert to 0.
  pub fn to_int_exactly<const W: u32, const S: bool>(self) -> Option<Integer<W, S>> {
    match self.truncated() {
      Some((value, true)) => Integer::try_new(value).ok(),
      _ => None,
    }
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
  const W: u32,
  const S: bool,
> RoundFrom<Integer<W, S>> for Float<EXP, FRAC, Bits> {
  /// Convert an [`Integer`] into a `Float`, correctly rounded: to the nearest value, or in case
  /// of a tie, to the one with an even significand. Values beyond the greatest finite magnitude
  /// (by at least half an ulp) become ±∞.
  #[inline]
  fn round_from(value: Integer<W, S>) -> Self {
    Self::from_value(value.value(), Subnormals::NATIVE)
  }
}

macro_rules! make_impl {
  ($int:ty) => {
    impl<
      const EXP: u32,
      const FRAC: u32,
      Bits: crate::Bits,
    > RoundFrom<$int> for Float<EXP, FRAC, Bits> {
      #[doc = concat!("Convert an `", stringify!($int), "` into a `Float`, correctly rounded (see the conversion from [`Integer`]).")]
      #[inline]
      fn round_from(value: $int) -> Self {
        Self::from_value(value as i128, Subnormals::NATIVE)
      }
    }

    impl<
      const EXP: u32,
      const FRAC: u32,
      Bits: crate::Bits,
    > RoundFrom<Float<EXP, FRAC, Bits>> for $int {
      #[doc = concat!("Convert a `Float` into an `", stringify!($int), "`, the same way as an `as` cast of a native float:")]
      ///
      ///   - The value is truncated towards zero.
      ///   - Values out of range saturate to the minimum or maximum, and so do infinities.
      ///   - NaN converts to 0.
      ///
      /// Use [`Float::to_int`] to trap instead.
      #[inline]
      fn round_from(value: Float<EXP, FRAC, Bits>) -> Self {
        match value.truncated() {
          Some((int, _)) => int.clamp(<$int>::MIN as i128, <$int>::MAX as i128) as $int,
          None if value.is_nan() => 0,
          None => if value.is_sign_minus() { <$int>::MIN } else { <$int>::MAX },
        }
      }
    }
  }
}

make_impl!{i8}
make_impl!{i16}
make_impl!{i32}
make_impl!{i64}
make_impl!{isize}
make_impl!{u8}
make_impl!{u16}
make_impl!{u32}
make_impl!{u64}
make_impl!{usize}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{b16, b32, b64, I8, I16, I32, I64, U8, U16, U64};
  use crate::float::rational::is_correct_rounded;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn from_int() {
    assert_eq!(f32::from(b32::round_from(16777217)), 16777216.);
    assert_eq!(f32::from(b32::round_from(16777219)), 16777220.);
    assert_eq!(f64::from(b64::round_from(i64::MIN)), i64::MIN as f64);
    assert_eq!(f64::from(b64::round_from(u64::MAX)), u64::MAX as f64);
    assert!(b16::round_from(65520) == b16::INFINITY);
    assert!(b16::round_from(-65520) == b16::NEG_INFINITY);
    assert_eq!(b16::round_from(I16::MAX).to_bits(), 0x7800);
    let z = b64::round_from(0u8);
    assert!(z.is_zero() && !z.is_sign_minus());
  }

  #[test]
  fn from_int_exactly() {
    assert!(b64::from_int_exactly(I64::from(1i64 << 53)).is_some());
    assert!(b64::from_int_exactly(I64::from((1i64 << 53) + 1)).is_none());
    assert!(b64::from_int_exactly(I64::MIN).is_some());
    assert!(b64::from_int_exactly(U64::MAX).is_none());
    assert!(b16::from_int_exactly(U16::from(65504)).is_some());
    assert!(b16::from_int_exactly(U16::from(65505)).is_none());
    assert!(Float::<4, 3, u8>::from_int_exactly(I16::from(240)).is_some());
    assert!(Float::<4, 3, u8>::from_int_exactly(I16::from(256)).is_none());
  }

  #[test]
  fn to_int() {
    let x = |v: f64| b64::from(v);
    assert_eq!(x(-0.).to_int::<32, true>(), I32::ZERO);
    assert_eq!(x(-128.99).to_int::<8, true>(), I8::MIN);
    assert_eq!(x(-0.99).to_int::<8, false>(), U8::ZERO);
    assert_eq!(x(5e-324).to_int::<64, true>(), I64::ZERO);
    assert_eq!(x(9.223372036854775e18).to_int::<64, true>(), I64::new(9223372036854774784));
    assert_eq!(x(-9.223372036854775808e18).to_int::<64, true>(), I64::MIN);
    assert_eq!(x(-129.).try_to_int::<8, true>(), Err(Error::FatalOverflow(Overflow::Conversion)));
    assert_eq!(x(1.8446744073709552e19).try_to_int::<64, false>(), Err(Error::FatalOverflow(Overflow::Conversion)));
    assert_eq!(x(f64::NAN).try_to_int::<8, true>(), Err(Error::FatalOverflow(Overflow::NonFinite)));
    assert_eq!(x(f64::INFINITY).try_to_int::<64, false>(), Err(Error::FatalOverflow(Overflow::NonFinite)));
    assert_eq!(x(1e300).try_to_int::<64, true>(), Err(Error::FatalOverflow(Overflow::Conversion)));
  }

  #[test]
  #[should_panic(expected = "fatal overflow: NaN or infinity cannot be converted to an integer")]
  fn to_int_traps_on_nan() {
    let _ = b32::NAN.to_int::<32, true>();
  }

  #[test]
  #[should_panic(expected = "fatal overflow: value out of range of the target integer type")]
  fn to_int_traps_out_of_range() {
    let _ = b16::GREATEST_FINITE_MAGNITUDE.to_int::<16, true>();
  }

  #[test]
  fn to_int_exactly() {
    let x = |v: f64| b64::from(v);
    assert_eq!(x(-0.).to_int_exactly::<8, false>(), Some(U8::ZERO));
    assert_eq!(x(42.).to_int_exactly::<8, true>(), Some(I8::from(42)));
    assert_eq!(x(42.5).to_int_exactly::<8, true>(), None);
    assert_eq!(x(128.).to_int_exactly::<8, true>(), None);
    assert_eq!(x(-1.).to_int_exactly::<8, false>(), None);
    assert_eq!(x(f64::INFINITY).to_int_exactly::<64, true>(), None);
    assert_eq!(b64::LEAST_NONZERO_MAGNITUDE.to_int_exactly::<8, true>(), None);
  }

  #[test]
  fn saturating_primitives() {
    assert_eq!(i8::round_from(b64::from(-1000.)), i8::MIN);
    assert_eq!(u8::round_from(b64::from(-1.5)), 0);
    assert_eq!(u64::round_from(b64::INFINITY), u64::MAX);
    assert_eq!(i32::round_from(b32::NEG_INFINITY), i32::MIN);
    assert_eq!(i32::round_from(b32::NAN), 0);
    assert_eq!(i64::round_from(b16::GREATEST_FINITE_MAGNITUDE), 65504);
  }

  macro_rules! test_exhaustive_int {
    ($name:ident, $int:ty, $wrapper:ty, $float:ty) => {
      #[test]
      fn $name() {
        for int in <$int>::MIN ..= <$int>::MAX {
          let float = <$float>::round_from(int);
          assert!(is_correct_rounded(Rational::from(int), float), "{int} {:?}", float);
          let exact = Rational::try_from(float) == Ok(Rational::from(int));
          assert_eq!(<$float>::from_int_exactly(<$wrapper>::from(int)).is_some(), exact, "{int}");
        }
      }
    };
  }

  test_exhaustive_int!{i8_to_float_4_3, i8, I8, Float::<4, 3, u8>}
  test_exhaustive_int!{u8_to_float_4_3, u8, U8, Float::<4, 3, u8>}
  test_exhaustive_int!{i16_to_float_5_2, i16, I16, Float::<5, 2, u8>}
  test_exhaustive_int!{u16_to_b16, u16, U16, b16}

  #[test]
  fn float_to_primitive_exhaustive() {
    for x in b16::cases_exhaustive() {
      let native = f64::from(x.convert_in::<11, 52, u64>(Subnormals::Gradual));
      assert_eq!(i8::round_from(x), native as i8, "{:?}", x);
      assert_eq!(u16::round_from(x), native as u16, "{:?}", x);
      assert_eq!(i64::round_from(x), native as i64, "{:?}", x);
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn i64_to_b64_matches_native(int: i64) {
      assert_eq!(f64::from(b64::round_from(int)), int as f64)
    }

    #[test]
    fn u64_to_b32_matches_native(int: u64) {
      assert_eq!(f32::from(b32::round_from(int)), int as f32)
    }

    #[test]
    fn b64_to_i64_matches_native(x in b64::cases_proptest()) {
      let native = f64::from(x);
      assert_eq!(i64::round_from(x), native as i64);
      if native.is_finite() && native.trunc() >= -9.223372036854775808e18 && native.trunc() < 9.223372036854775808e18 {
        assert_eq!(x.to_int::<64, true>(), I64::from(native as i64))
      } else {
        assert!(x.try_to_int::<64, true>().is_err())
      }
    }

    #[test]
    fn b64_to_int_exactly(x in b64::cases_proptest_finite()) {
      let native = f64::from(x);
      let expected = (native.trunc() == native && native >= -2147483648. && native < 2147483648.).then(|| I32::from(native as i32));
      assert_eq!(x.to_int_exactly::<32, true>(), expected)
    }
  }
}
