//! Capability traits, layered by what generic code needs from a number.
//!
//! ```text
//! AdditiveArithmetic          ZERO, +, -
//!  └─ Numeric                 ×, magnitude, exact construction from integers
//!      ├─ SignedNumeric       negation
//!      │   └─ BinaryFloatingPoint
//!      └─ FixedWidth          bit width, MIN/MAX, overflow-reporting arithmetic
//! ```
//!
//! [`Integer`] implements the integer side of the hierarchy (and [`SignedNumeric`] when
//! signed), [`Float`] the floating point side. Each trait has a few required methods and
//! derives the rest; the doc of each default method says which methods it is built on, so an
//! implementation that overrides one knows which others it affects.
//!
//! Dispatch is always static. The generic algorithms at the bottom of this module ([`sum`],
//! [`dot`], [`horner`], [`wrapping_sum`]) each ask for the weakest capability they need.

use crate::float::{Float, RoundingRule};
use crate::int::Integer;
use core::ops::{Add, Mul, Neg, Sub};

/// Types with addition, subtraction, and a zero.
pub trait AdditiveArithmetic:
  Copy + PartialEq +
  Add<Output = Self> + Sub<Output = Self>
{
  /// The additive identity.
  const ZERO: Self;

  /// Whether `self` equals [`Self::ZERO`].
  ///
  /// Default: `==` against [`Self::ZERO`].
  fn is_zero(self) -> bool {
    self == Self::ZERO
  }
}

/// Types with multiplication on top of [`AdditiveArithmetic`].
pub trait Numeric: AdditiveArithmetic + Mul<Output = Self> {
  /// The type of [`Self::magnitude`]: the unsigned counterpart of a signed integer, the type
  /// itself for floats.
  type Magnitude: Numeric;

  /// `|self|`, which is always representable in [`Self::Magnitude`].
  fn magnitude(self) -> Self::Magnitude;

  /// The value of `source`, if it is exactly representable in `Self`.
  fn exactly<const B: u32, const S: bool>(source: Integer<B, S>) -> Option<Self>;

  /// `self × self`.
  ///
  /// Default: `*`.
  fn squared(self) -> Self {
    self * self
  }
}

/// [`Numeric`] types closed under negation.
pub trait SignedNumeric: Numeric + Neg<Output = Self> {
  /// `-self`.
  ///
  /// Default: [`Self::ZERO`] `- self`. Floats override this, since `0 - 0` is `+0` rather
  /// than `-0`.
  fn negated(self) -> Self {
    Self::ZERO - self
  }
}

/// Integers of a fixed bit width, with arithmetic that reports overflow instead of trapping.
pub trait FixedWidth: Numeric + Ord {
  /// The width in bits.
  const BIT_WIDTH: u32;
  /// The smallest value.
  const MIN: Self;
  /// The largest value.
  const MAX: Self;

  /// `self + rhs` wrapped, and whether it overflowed.
  fn overflowing_add(self, rhs: Self) -> (Self, bool);
  /// `self - rhs` wrapped, and whether it overflowed.
  fn overflowing_sub(self, rhs: Self) -> (Self, bool);
  /// `self × rhs` wrapped, and whether it overflowed.
  fn overflowing_mul(self, rhs: Self) -> (Self, bool);

  /// `self + rhs` wrapped.
  ///
  /// Default: [`Self::overflowing_add`].
  fn wrapping_add(self, rhs: Self) -> Self {
    self.overflowing_add(rhs).0
  }

  /// `self × rhs` wrapped.
  ///
  /// Default: [`Self::overflowing_mul`].
  fn wrapping_mul(self, rhs: Self) -> Self {
    self.overflowing_mul(rhs).0
  }

  /// `self + rhs`, or `None` if that's out of range.
  ///
  /// Default: [`Self::overflowing_add`].
  fn checked_add(self, rhs: Self) -> Option<Self> {
    match self.overflowing_add(rhs) {
      (sum, false) => Some(sum),
      (_, true) => None,
    }
  }

  /// `self + rhs`, saturated to [`Self::MIN`] or [`Self::MAX`].
  ///
  /// Default: [`Self::overflowing_add`], and the sign of `rhs` (compared to [`Self::ZERO`]) to
  /// pick the bound, since only a negative `rhs` can overflow downwards.
  fn clamping_add(self, rhs: Self) -> Self {
    match self.overflowing_add(rhs) {
      (sum, false) => sum,
      (_, true) => if rhs < Self::ZERO { Self::MIN } else { Self::MAX },
    }
  }
}

/// IEEE 754 binary floating point.
pub trait BinaryFloatingPoint: SignedNumeric + PartialOrd {
  /// The width of the exponent field.
  const EXPONENT_BITS: u32;
  /// The width of the fraction field (the significand without its hidden bit).
  const SIGNIFICAND_BITS: u32;
  /// +∞.
  const INFINITY: Self;
  /// The canonical quiet NaN.
  const NAN: Self;
  /// The largest finite value.
  const GREATEST_FINITE_MAGNITUDE: Self;
  /// The smallest positive (subnormal) value.
  const LEAST_NONZERO_MAGNITUDE: Self;
  /// π, rounded towards zero.
  const PI: Self;

  fn is_nan(self) -> bool;
  fn is_infinite(self) -> bool;
  fn is_sign_minus(self) -> bool;

  /// The least value greater than `self`.
  fn next_up(self) -> Self;

  /// The unit in the last place of `self`.
  fn ulp(self) -> Self;

  /// `self + lhs × rhs` with a single rounding.
  fn adding_product(self, lhs: Self, rhs: Self) -> Self;

  /// The correctly rounded square root.
  fn square_root(self) -> Self;

  /// `self` rounded to an integral value.
  fn rounded(self, rule: RoundingRule) -> Self;

  /// Whether `self` is neither NaN nor infinite.
  ///
  /// Default: [`Self::is_nan`] and [`Self::is_infinite`].
  fn is_finite(self) -> bool {
    !self.is_nan() && !self.is_infinite()
  }

  /// The greatest value less than `self`.
  ///
  /// Default: [`Self::next_up`] of the negation.
  fn next_down(self) -> Self {
    -(-self).next_up()
  }

  /// The unit in the last place of 1, that is, the machine epsilon.
  ///
  /// Default: [`Self::ulp`] of `1`, built with [`Numeric::exactly`].
  fn ulp_of_one() -> Self {
    Self::exactly(Integer::<8, false>::ONE).map_or(Self::NAN, Self::ulp)
  }
}

impl<const BITS: u32, const SIGNED: bool> AdditiveArithmetic for Integer<BITS, SIGNED> {
  const ZERO: Self = Self::ZERO;
}

impl<const BITS: u32, const SIGNED: bool> Numeric for Integer<BITS, SIGNED> {
  type Magnitude = Integer<BITS, false>;

  #[inline]
  fn magnitude(self) -> Self::Magnitude {
    Integer::magnitude(self)
  }

  #[inline]
  fn exactly<const B: u32, const S: bool>(source: Integer<B, S>) -> Option<Self> {
    Integer::exactly(source)
  }
}

impl<const BITS: u32> SignedNumeric for Integer<BITS, true> {
  #[inline]
  fn negated(self) -> Self {
    Integer::negated(self)
  }
}

impl<const BITS: u32, const SIGNED: bool> FixedWidth for Integer<BITS, SIGNED> {
  const BIT_WIDTH: u32 = Self::BITS;
  const MIN: Self = Self::MIN;
  const MAX: Self = Self::MAX;

  #[inline]
  fn overflowing_add(self, rhs: Self) -> (Self, bool) {
    Integer::overflowing_add(self, rhs)
  }

  #[inline]
  fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
    Integer::overflowing_sub(self, rhs)
  }

  #[inline]
  fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
    Integer::overflowing_mul(self, rhs)
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> AdditiveArithmetic for Float<EXP, FRAC, Bits> {
  const ZERO: Self = Self::ZERO;

  /// Both zeros are zero.
  #[inline]
  fn is_zero(self) -> bool {
    Float::is_zero(self)
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Numeric for Float<EXP, FRAC, Bits> {
  type Magnitude = Self;

  #[inline]
  fn magnitude(self) -> Self {
    self.abs()
  }

  #[inline]
  fn exactly<const B: u32, const S: bool>(source: Integer<B, S>) -> Option<Self> {
    Self::from_int_exactly(source)
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> SignedNumeric for Float<EXP, FRAC, Bits> {
  #[inline]
  fn negated(self) -> Self {
    -self
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> BinaryFloatingPoint for Float<EXP, FRAC, Bits> {
  const EXPONENT_BITS: u32 = Self::EXPONENT_BITS;
  const SIGNIFICAND_BITS: u32 = Self::SIGNIFICAND_BITS;
  const INFINITY: Self = Self::INFINITY;
  const NAN: Self = Self::NAN;
  const GREATEST_FINITE_MAGNITUDE: Self = Self::GREATEST_FINITE_MAGNITUDE;
  const LEAST_NONZERO_MAGNITUDE: Self = Self::LEAST_NONZERO_MAGNITUDE;
  const PI: Self = Self::PI;

  #[inline]
  fn is_nan(self) -> bool { Float::is_nan(self) }
  #[inline]
  fn is_infinite(self) -> bool { Float::is_infinite(self) }
  #[inline]
  fn is_sign_minus(self) -> bool { Float::is_sign_minus(self) }
  #[inline]
  fn next_up(self) -> Self { Float::next_up(self) }
  #[inline]
  fn ulp(self) -> Self { Float::ulp(self) }
  #[inline]
  fn adding_product(self, lhs: Self, rhs: Self) -> Self { Float::adding_product(self, lhs, rhs) }
  #[inline]
  fn square_root(self) -> Self { Float::square_root(self) }
  #[inline]
  fn rounded(self, rule: RoundingRule) -> Self { Float::rounded(self, rule) }

  #[inline]
  fn is_finite(self) -> bool { Float::is_finite(self) }
  #[inline]
  fn next_down(self) -> Self { Float::next_down(self) }

  #[inline]
  fn ulp_of_one() -> Self {
    Self::ULP_OF_ONE
  }
}

/// The sum of `values`, left to right, starting from zero.
///
/// ```
/// # use soft_tower::{traits::sum, I32, b64, RoundFrom};
/// assert_eq!(sum((1 ..= 4).map(I32::from)), I32::from(10));
/// assert_eq!(f64::round_from(sum([0.5, 0.25].map(b64::round_from))), 0.75);
/// ```
pub fn sum<T: AdditiveArithmetic>(values: impl IntoIterator<Item = T>) -> T {
  values.into_iter().fold(T::ZERO, |acc, x| acc + x)
}

/// The dot product of `a` and `b`, over the length of the shorter one.
pub fn dot<T: Numeric>(a: &[T], b: &[T]) -> T {
  sum(a.iter().zip(b).map(|(&x, &y)| x * y))
}

/// The polynomial with `coefficients` (highest degree first) evaluated at `x`, with one fused
/// multiply-add per coefficient.
///
/// ```
/// # use soft_tower::{traits::horner, b64, RoundFrom};
/// // 2x² - 3x + 1 at x = 4
/// let p = [2., -3., 1.].map(b64::round_from);
/// assert_eq!(f64::round_from(horner(&p, b64::round_from(4.))), 21.);
/// ```
pub fn horner<T: BinaryFloatingPoint>(coefficients: &[T], x: T) -> T {
  coefficients.iter().fold(T::ZERO, |acc, &c| c.adding_product(acc, x))
}

/// The sum of `values` modulo `2^BIT_WIDTH`, and whether any step overflowed.
pub fn wrapping_sum<T: FixedWidth>(values: impl IntoIterator<Item = T>) -> (T, bool) {
  values.into_iter().fold((T::ZERO, false), |(acc, overflow), x| {
    let (sum, o) = acc.overflowing_add(x);
    (sum, overflow || o)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{b16, b32, b64, I8, I32, U8};

  #[test]
  fn integer_capabilities() {
    assert!(AdditiveArithmetic::is_zero(I8::ZERO));
    assert_eq!(Numeric::magnitude(I8::MIN), U8::from(128));
    assert_eq!(<U8 as Numeric>::exactly(I8::from(-1)), None);
    assert_eq!(<I8 as Numeric>::exactly(I32::from(-128)), Some(I8::MIN));
    assert_eq!(I8::from(-11).squared(), I8::from(121));
    assert_eq!(SignedNumeric::negated(I8::from(5)), I8::from(-5));
    assert_eq!(<I8 as FixedWidth>::BIT_WIDTH, 8);
  }

  #[test]
  fn fixed_width_defaults() {
    let (a, b) = (I8::from(100), I8::from(100));
    assert_eq!(FixedWidth::checked_add(a, b), None);
    assert_eq!(FixedWidth::checked_add(a, I8::from(27)), Some(I8::MAX));
    assert_eq!(FixedWidth::clamping_add(a, b), I8::MAX);
    assert_eq!(FixedWidth::clamping_add(-a, -b), I8::MIN);
    assert_eq!(FixedWidth::clamping_add(U8::from(200), U8::from(100)), U8::MAX);
    assert_eq!(FixedWidth::wrapping_add(a, b), I8::from(-56));
    assert_eq!(FixedWidth::wrapping_mul(U8::from(16), U8::from(17)), U8::from(16));
  }

  #[test]
  fn float_capabilities() {
    assert!(AdditiveArithmetic::is_zero(b32::NEG_ZERO));
    let z = SignedNumeric::negated(b32::ZERO);
    assert!(z.is_zero() && z.is_sign_minus());
    assert!(Numeric::magnitude(b32::MINUS_ONE) == b32::ONE);
    assert!(<b16 as Numeric>::exactly(I32::from(2049)).is_none());
    assert!(<b16 as BinaryFloatingPoint>::ulp_of_one() == b16::ULP_OF_ONE);
    assert!(BinaryFloatingPoint::next_down(b16::ZERO) == -b16::LEAST_NONZERO_MAGNITUDE);
    assert!(!BinaryFloatingPoint::is_finite(b16::NAN));
  }

  /// A float type that only uses the default methods, to check them against the overrides.
  #[derive(Clone, Copy, PartialEq, PartialOrd)]
  struct Plain(b32);

  impl Add for Plain { type Output = Self; fn add(self, rhs: Self) -> Self { Plain(self.0 + rhs.0) } }
  impl Sub for Plain { type Output = Self; fn sub(self, rhs: Self) -> Self { Plain(self.0 - rhs.0) } }
  impl Mul for Plain { type Output = Self; fn mul(self, rhs: Self) -> Self { Plain(self.0 * rhs.0) } }
  impl Neg for Plain { type Output = Self; fn neg(self) -> Self { Plain(-self.0) } }

  impl AdditiveArithmetic for Plain {
    const ZERO: Self = Plain(b32::ZERO);
  }

  impl Numeric for Plain {
    type Magnitude = Self;
    fn magnitude(self) -> Self { Plain(self.0.abs()) }
    fn exactly<const B: u32, const S: bool>(source: Integer<B, S>) -> Option<Self> {
      b32::from_int_exactly(source).map(Plain)
    }
  }

  impl SignedNumeric for Plain {}

  impl BinaryFloatingPoint for Plain {
    const EXPONENT_BITS: u32 = 8;
    const SIGNIFICAND_BITS: u32 = 23;
    const INFINITY: Self = Plain(b32::INFINITY);
    const NAN: Self = Plain(b32::NAN);
    const GREATEST_FINITE_MAGNITUDE: Self = Plain(b32::GREATEST_FINITE_MAGNITUDE);
    const LEAST_NONZERO_MAGNITUDE: Self = Plain(b32::LEAST_NONZERO_MAGNITUDE);
    const PI: Self = Plain(b32::PI);
    fn is_nan(self) -> bool { self.0.is_nan() }
    fn is_infinite(self) -> bool { self.0.is_infinite() }
    fn is_sign_minus(self) -> bool { self.0.is_sign_minus() }
    fn next_up(self) -> Self { Plain(self.0.next_up()) }
    fn ulp(self) -> Self { Plain(self.0.ulp()) }
    fn adding_product(self, lhs: Self, rhs: Self) -> Self { Plain(self.0.adding_product(lhs.0, rhs.0)) }
    fn square_root(self) -> Self { Plain(self.0.square_root()) }
    fn rounded(self, rule: RoundingRule) -> Self { Plain(self.0.rounded(rule)) }
  }

  #[test]
  fn float_defaults() {
    let xs = [b32::ZERO, b32::NEG_ZERO, b32::ONE, b32::MINUS_ONE, b32::LEAST_NONZERO_MAGNITUDE,
      b32::GREATEST_FINITE_MAGNITUDE, b32::INFINITY, b32::NEG_INFINITY, b32::PI];
    for x in xs {
      assert_eq!(Plain(x).next_down().0.to_bits(), x.next_down().to_bits(), "{x:?}");
      assert_eq!(Plain(x).is_finite(), x.is_finite());
    }
    assert!(Plain::ulp_of_one().0 == b32::ULP_OF_ONE);
    // The default negation can't produce -0.
    assert!(!SignedNumeric::negated(Plain(b32::ZERO)).0.is_sign_minus());
    assert!(Plain(b32::ONE).squared() == Plain(b32::ONE));
  }

  #[test]
  fn algorithms() {
    let ints = [I32::from(3), I32::from(-4), I32::from(5)];
    assert_eq!(sum(ints), I32::from(4));
    assert_eq!(dot(&ints, &ints), I32::from(50));
    assert_eq!(wrapping_sum([I8::MAX, I8::ONE, I8::ONE]), (I8::from(-127), true));
    assert_eq!(wrapping_sum([I8::ONE, I8::ONE]), (I8::from(2), false));

    let floats = [0.1, 0.2, 0.3].map(b64::from);
    assert_eq!(f64::from(sum(floats)), 0.1 + 0.2 + 0.3);
    assert_eq!(f64::from(dot(&floats, &floats[.. 2])), 0.1 * 0.1 + 0.2 * 0.2);
    // x³ - 1 at the float nearest to 1 + 2⁻⁵², where only fused steps keep the low bits.
    let p = [1., 0., 0., -1.].map(b64::from);
    let x = b64::ONE.next_up();
    let expected = [1., 0., 0., -1.].into_iter().fold(0f64, |acc, c| acc.mul_add(f64::from(x), c));
    assert_eq!(f64::from(horner(&p, x)), expected);
    assert!(horner(&[] as &[b64], x).is_zero());
  }
}
