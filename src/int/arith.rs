use super::*;
use crate::error::{Error, Overflow, trap};

/// An arithmetic operation, for callers that pick the operation at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
  Add,
  Sub,
  Mul,
  /// Division rounding towards zero.
  Div,
  /// Remainder with the sign of the dividend.
  Rem,
}

/// What to do when the exact result of an operation doesn't fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
  /// Fail with [`Error::FatalOverflow`].
  Trapping,
  /// Keep the low-order bits.
  Wrapping,
  /// Keep the low-order bits, and say whether that happened.
  Reporting,
}

impl<const BITS: u32, const SIGNED: bool> Integer<BITS, SIGNED> {
  /// The wrapped result of `self op rhs`, and whether it differs from the exact result.
  ///
  /// Fails only on division or remainder by zero.
  fn overflowing(self, op: ArithOp, rhs: Self) -> Result<(Self, bool), Overflow> {
    let (a, b) = (self.value(), rhs.value());
    let exact = match op {
      ArithOp::Add => a + b,
      ArithOp::Sub => a - b,
      ArithOp::Mul => match a.checked_mul(b) {
        Some(exact) => exact,
        // Past the range of `i128`, and so past the range of any `Self`. The low bits of a
        // product don't depend on the signedness of the factors, so multiply the patterns.
        None => {
          let low = self.0.get().wrapping_mul(rhs.0.get());
          return Ok((Self(BitPattern::new(low)), true))
        },
      },
      ArithOp::Div => {
        if b == 0 { return Err(Overflow::DivisionByZero) }
        a / b
      },
      ArithOp::Rem => {
        if b == 0 { return Err(Overflow::RemainderByZero) }
        // The remainder itself is 0, but it belongs to a quotient that overflows.
        if SIGNED && a == Self::MIN_VALUE && b == -1 { return Ok((Self::ZERO, true)) }
        a % b
      },
    };
    Ok((Self::wrapping_from_value(exact), !Self::fits(exact)))
  }

  /// Compute `self op rhs` under `policy`. The flag is the overflow flag; it can only be set
  /// under [`Policy::Reporting`].
  ///
  /// ```
  /// # use soft_tower::{U8, ArithOp, Policy};
  /// let (a, b) = (U8::from(200), U8::from(100));
  /// assert_eq!(a.arith(ArithOp::Add, b, Policy::Wrapping), Ok((U8::from(44), false)));
  /// assert_eq!(a.arith(ArithOp::Add, b, Policy::Reporting), Ok((U8::from(44), true)));
  /// assert!(a.arith(ArithOp::Add, b, Policy::Trapping).is_err());
  /// ```
  pub fn arith(self, op: ArithOp, rhs: Self, policy: Policy) -> Result<(Self, bool), Error> {
    let (result, overflow) = self.overflowing(op, rhs)?;
    match policy {
      Policy::Trapping if overflow => Err(Overflow::Arithmetic.into()),
      Policy::Trapping | Policy::Wrapping => Ok((result, false)),
      Policy::Reporting => Ok((result, overflow)),
    }
  }

  /// `self op rhs`, panicking on overflow.
  #[inline]
  #[track_caller]
  pub(crate) fn trapping(self, op: ArithOp, rhs: Self) -> Self {
    match self.overflowing(op, rhs) {
      Ok((result, false)) => result,
      Ok((_, true)) => trap(Overflow::Arithmetic),
      Err(e) => trap(e),
    }
  }

  /// The wrapped negation of `self`, and whether it overflowed (`-MIN` for signed types, any
  /// nonzero value for unsigned ones).
  #[inline]
  pub fn overflowing_neg(self) -> (Self, bool) {
    let exact = -self.value();
    (Self::wrapping_from_value(exact), !Self::fits(exact))
  }

  #[inline]
  pub fn wrapping_neg(self) -> Self {
    self.overflowing_neg().0
  }

  /// `-self`, or [`Error::FatalOverflow`] if it isn't representable.
  #[inline]
  pub fn try_neg(self) -> Result<Self, Error> {
    match self.overflowing_neg() {
      (result, false) => Ok(result),
      (_, true) => Err(Overflow::NegateMin.into()),
    }
  }

  /// `-self`, trapping if it isn't representable. Same as the `-` operator.
  #[inline]
  #[track_caller]
  pub fn negated(self) -> Self {
    match self.try_neg() {
      Ok(result) => result,
      Err(e) => trap(e),
    }
  }

  /// The absolute value, as the unsigned type of the same width (so it never overflows).
  #[inline]
  pub fn magnitude(self) -> Integer<BITS, false> {
    Integer::wrapping_from_value(self.value().abs())
  }

  /// The absolute value, trapping on `MIN` of a signed type.
  #[inline]
  #[track_caller]
  pub fn abs(self) -> Self {
    if self.is_negative() { self.negated() } else { self }
  }

  /// `-1`, `0`, or `1` according to the sign of `self`.
  #[inline]
  pub fn signum(self) -> Self {
    Self::wrapping_from_value(self.value().signum())
  }

  /// The exact product of `self` and `rhs`, as a pair of `(high, low)` halves; `high` has the
  /// signedness of `Self`, `low` is always unsigned.
  ///
  /// ```
  /// # use soft_tower::{I8, U8};
  /// assert_eq!(I8::from(-128).multiplied_full_width(I8::from(127)), (I8::from(-64), U8::from(128)));
  /// ```
  pub fn multiplied_full_width(self, rhs: Self) -> (Self, Integer<BITS, false>) {
    // Wide enough for any product of two 64-bit values, signed or not.
    let bits: u128 = if SIGNED {
      (self.value() * rhs.value()) as u128
    } else {
      self.0.get() as u128 * rhs.0.get() as u128
    };
    let high = Self(BitPattern::new((bits >> Self::BITS) as u64));
    let low = Integer(BitPattern::new(bits as u64));
    (high, low)
  }
}

/// The per-operation method families, for each policy.
macro_rules! mk_policies {
  ($op:ident, $sym:literal, $overflowing:ident, $wrapping:ident, $checked:ident) => {
    impl<const BITS: u32, const SIGNED: bool> Integer<BITS, SIGNED> {
      #[doc = concat!("`self ", $sym, " rhs` wrapped, and whether that overflowed.")]
      ///
      /// # Panics
      ///
      /// On division or remainder by zero.
      #[inline]
      #[track_caller]
      pub fn $overflowing(self, rhs: Self) -> (Self, bool) {
        match self.overflowing(ArithOp::$op, rhs) {
          Ok(result) => result,
          Err(e) => trap(e),
        }
      }

      #[doc = concat!("`self ", $sym, " rhs`, keeping the low-order bits.")]
      ///
      /// # Panics
      ///
      /// On division or remainder by zero.
      #[inline]
      #[track_caller]
      pub fn $wrapping(self, rhs: Self) -> Self {
        self.$overflowing(rhs).0
      }

      #[doc = concat!("`self ", $sym, " rhs`, or [`Error::FatalOverflow`] if it isn't representable.")]
      #[inline]
      pub fn $checked(self, rhs: Self) -> Result<Self, Error> {
        self.arith(ArithOp::$op, rhs, Policy::Trapping).map(|(result, _)| result)
      }
    }
  }
}

mk_policies!{Add, "+", overflowing_add, wrapping_add, try_add}
mk_policies!{Sub, "-", overflowing_sub, wrapping_sub, try_sub}
mk_policies!{Mul, "*", overflowing_mul, wrapping_mul, try_mul}
mk_policies!{Div, "/", overflowing_div, wrapping_div, try_div}
mk_policies!{Rem, "%", overflowing_rem, wrapping_rem, try_rem}

/// Helper macro for implementing the (trapping) operators for all combinations of value and
/// reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $op:ident) => {
    impl<const BITS: u32, const SIGNED: bool>
    $trait<Integer<BITS, SIGNED>> for Integer<BITS, SIGNED> {
      type Output = Integer<BITS, SIGNED>;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: Self) -> Self::Output { self.trapping(ArithOp::$op, rhs) }
    }

    impl<const BITS: u32, const SIGNED: bool>
    $trait<&Integer<BITS, SIGNED>> for Integer<BITS, SIGNED> {
      type Output = Integer<BITS, SIGNED>;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: &Self) -> Self::Output { self.trapping(ArithOp::$op, *rhs) }
    }

    impl<const BITS: u32, const SIGNED: bool>
    $trait<Integer<BITS, SIGNED>> for &Integer<BITS, SIGNED> {
      type Output = Integer<BITS, SIGNED>;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: Integer<BITS, SIGNED>) -> Self::Output { (*self).trapping(ArithOp::$op, rhs) }
    }

    impl<const BITS: u32, const SIGNED: bool>
    $trait<&Integer<BITS, SIGNED>> for &Integer<BITS, SIGNED> {
      type Output = Integer<BITS, SIGNED>;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: &Integer<BITS, SIGNED>) -> Self::Output { (*self).trapping(ArithOp::$op, *rhs) }
    }

    impl<const BITS: u32, const SIGNED: bool>
    $trait_assign<Integer<BITS, SIGNED>> for Integer<BITS, SIGNED> {
      #[inline]
      #[track_caller]
      fn $name_assign(&mut self, rhs: Integer<BITS, SIGNED>) { *self = self.trapping(ArithOp::$op, rhs) }
    }

    impl<const BITS: u32, const SIGNED: bool>
    $trait_assign<&Integer<BITS, SIGNED>> for Integer<BITS, SIGNED> {
      #[inline]
      #[track_caller]
      fn $name_assign(&mut self, rhs: &Integer<BITS, SIGNED>) { *self = self.trapping(ArithOp::$op, *rhs) }
    }
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Rem, RemAssign};
mk_ops!{Add, AddAssign, add, add_assign, Add}
mk_ops!{Sub, SubAssign, sub, sub_assign, Sub}
mk_ops!{Mul, MulAssign, mul, mul_assign, Mul}
mk_ops!{Div, DivAssign, div, div_assign, Div}
mk_ops!{Rem, RemAssign, rem, rem_assign, Rem}

impl<const BITS: u32, const SIGNED: bool> core::ops::Neg for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  #[track_caller]
  fn neg(self) -> Self { self.negated() }
}

impl<const BITS: u32, const SIGNED: bool> core::ops::Neg for &Integer<BITS, SIGNED> {
  type Output = Integer<BITS, SIGNED>;

  #[inline]
  #[track_caller]
  fn neg(self) -> Integer<BITS, SIGNED> { self.negated() }
}

// Bitwise operations go straight to the pattern.

impl<const BITS: u32, const SIGNED: bool> core::ops::Not for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  fn not(self) -> Self { Self(!self.0) }
}

impl<const BITS: u32, const SIGNED: bool> core::ops::BitAnd for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }
}

impl<const BITS: u32, const SIGNED: bool> core::ops::BitOr for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl<const BITS: u32, const SIGNED: bool> core::ops::BitXor for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  fn bitxor(self, rhs: Self) -> Self { Self(self.0 ^ rhs.0) }
}

/// Shifting by `BITS` or more yields 0.
impl<const BITS: u32, const SIGNED: bool> core::ops::Shl<u32> for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  fn shl(self, n: u32) -> Self { Self(self.0.shl(n)) }
}

/// Arithmetic for signed types, logical for unsigned ones. Shifting by `BITS` or more yields 0
/// or -1.
impl<const BITS: u32, const SIGNED: bool> core::ops::Shr<u32> for Integer<BITS, SIGNED> {
  type Output = Self;

  #[inline]
  fn shr(self, n: u32) -> Self {
    if SIGNED { Self(self.0.ashr(n)) } else { Self(self.0.lshr(n)) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{I8, I16, I32, I64, U8, U16, U32, U64};
  use proptest::prelude::*;

  #[test]
  fn trapping_in_range() {
    assert_eq!(I8::from(100) + I8::from(27), I8::MAX);
    assert_eq!(U8::from(3) * U8::from(85), U8::MAX);
    assert_eq!(I16::from(-7) / I16::from(2), I16::from(-3));
    assert_eq!(I16::from(-7) % I16::from(2), I16::from(-1));
    let mut x = U32::from(10);
    x -= &U32::from(4);
    x *= U32::from(7);
    assert_eq!(x, U32::from(42));
  }

  #[test]
  #[should_panic(expected = "fatal overflow: arithmetic result out of range")]
  fn add_traps() {
    let _ = I8::MAX + I8::ONE;
  }

  #[test]
  #[should_panic(expected = "fatal overflow: arithmetic result out of range")]
  fn unsigned_sub_traps() {
    let _ = U64::ZERO - U64::ONE;
  }

  #[test]
  #[should_panic(expected = "fatal overflow: arithmetic result out of range")]
  fn mul_past_i128_traps() {
    let _ = U64::MAX * U64::MAX;
  }

  #[test]
  #[should_panic(expected = "fatal overflow: arithmetic result out of range")]
  fn min_div_minus_one_traps() {
    let _ = I32::MIN / I32::from(-1);
  }

  #[test]
  #[should_panic(expected = "fatal overflow: negation of the minimum signed value")]
  fn negate_min_traps() {
    let _ = -I16::MIN;
  }

  #[test]
  #[should_panic(expected = "fatal overflow: division by zero")]
  fn wrapping_div_by_zero_traps() {
    let _ = U8::from(1).wrapping_div(U8::ZERO);
  }

  #[test]
  #[should_panic(expected = "fatal overflow: remainder by zero")]
  fn overflowing_rem_by_zero_traps() {
    let _ = I64::MAX.overflowing_rem(I64::ZERO);
  }

  #[test]
  fn div_by_zero_under_every_policy() {
    for policy in [Policy::Trapping, Policy::Wrapping, Policy::Reporting] {
      assert_eq!(
        I8::ONE.arith(ArithOp::Div, I8::ZERO, policy),
        Err(Error::FatalOverflow(Overflow::DivisionByZero)),
      );
      assert_eq!(
        U16::ONE.arith(ArithOp::Rem, U16::ZERO, policy),
        Err(Error::FatalOverflow(Overflow::RemainderByZero)),
      );
    }
  }

  #[test]
  fn min_by_minus_one() {
    assert_eq!(I8::MIN.overflowing_div(I8::from(-1)), (I8::MIN, true));
    assert_eq!(I8::MIN.overflowing_rem(I8::from(-1)), (I8::ZERO, true));
    assert_eq!(I64::MIN.wrapping_div(I64::new(-1)), I64::MIN);
    assert_eq!(I64::MIN.try_rem(I64::new(-1)), Err(Error::FatalOverflow(Overflow::Arithmetic)));
  }

  #[test]
  fn wrapping_and_reporting() {
    assert_eq!(U8::from(250).overflowing_add(U8::from(10)), (U8::from(4), true));
    assert_eq!(I8::from(-128).overflowing_sub(I8::ONE), (I8::MAX, true));
    assert_eq!(I16::from(300).wrapping_mul(I16::from(300)), I16::from(24464));
    assert_eq!(U64::MAX.overflowing_mul(U64::MAX), (U64::ONE, true));
    assert_eq!(I64::MIN.overflowing_mul(I64::MIN), (I64::ZERO, true));
    assert_eq!(U8::from(5).overflowing_neg(), (U8::from(251), true));
    assert_eq!(U8::ZERO.overflowing_neg(), (U8::ZERO, false));
    assert_eq!(I8::MIN.wrapping_neg(), I8::MIN);
  }

  #[test]
  fn magnitude_signum_abs() {
    assert_eq!(I8::MIN.magnitude(), U8::from(128));
    assert_eq!(I8::from(-3).signum(), I8::from(-1));
    assert_eq!(U8::from(9).signum(), U8::ONE);
    assert_eq!(I32::from(-9).abs(), I32::from(9));
  }

  #[test]
  #[should_panic(expected = "fatal overflow")]
  fn abs_min_traps() {
    let _ = I8::MIN.abs();
  }

  #[test]
  fn full_width() {
    assert_eq!(U64::MAX.multiplied_full_width(U64::MAX), (U64::MAX - U64::ONE, U64::ONE));
    assert_eq!(I16::from(-1).multiplied_full_width(I16::from(1)), (I16::from(-1), U16::MAX));
    assert_eq!(U8::from(16).multiplied_full_width(U8::from(16)), (U8::ONE, U8::ZERO));
  }

  #[test]
  fn shifts() {
    assert_eq!(I8::from(-128) >> 3, I8::from(-16));
    assert_eq!(U8::from(128) >> 3, U8::from(16));
    assert_eq!(I8::from(-1) >> 100, I8::from(-1));
    assert_eq!(U8::from(1) << 8, U8::ZERO);
  }

  /// Check an `i16` operation against the native `overflowing_*`.
  macro_rules! check_against_i16 {
    ($a:ident, $b:ident, $ours:ident, $native:ident) => {
      let (x, y) = (I16::from($a), I16::from($b));
      let (r, o) = x.$ours(y);
      let (nr, no) = $a.$native($b);
      prop_assert_eq!((i16::from(r), o), (nr, no));
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn i16_matches_native(a: i16, b: i16) {
      check_against_i16!(a, b, overflowing_add, overflowing_add);
      check_against_i16!(a, b, overflowing_sub, overflowing_sub);
      check_against_i16!(a, b, overflowing_mul, overflowing_mul);
      if b != 0 {
        check_against_i16!(a, b, overflowing_div, overflowing_div);
        check_against_i16!(a, b, overflowing_rem, overflowing_rem);
      }
    }

    #[test]
    fn u32_matches_native(a: u32, b: u32) {
      let (x, y) = (U32::from(a), U32::from(b));
      prop_assert_eq!(x.overflowing_add(y), (U32::from(a.wrapping_add(b)), a.checked_add(b).is_none()));
      prop_assert_eq!(x.overflowing_sub(y), (U32::from(a.wrapping_sub(b)), a.checked_sub(b).is_none()));
      prop_assert_eq!(x.overflowing_mul(y), (U32::from(a.wrapping_mul(b)), a.checked_mul(b).is_none()));
      prop_assert_eq!(x.try_add(y).ok(), a.checked_add(b).map(U32::from));
    }

    #[test]
    fn i64_full_width_is_exact(a: i64, b: i64) {
      let (high, low) = I64::new(a.into()).multiplied_full_width(I64::new(b.into()));
      prop_assert_eq!((high.value() << 64) | low.value(), a as i128 * b as i128);
    }

    #[test]
    fn negation_involution(a: i8) {
      let x = I8::from(a);
      if x == I8::MIN {
        prop_assert!(x.try_neg().is_err());
      } else {
        prop_assert_eq!(-(-x), x);
      }
    }
  }
}
