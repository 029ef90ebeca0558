use super::*;

use core::cmp::Ordering;

/// IEEE equality: NaN is unequal to everything (itself included), and +0 equals -0.
impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> PartialEq for Float<EXP, FRAC, Bits> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    if self.is_nan() || other.is_nan() {
      false
    } else {
      self.bits() == other.bits() || (self.is_zero() && other.is_zero())
    }
  }
}

/// IEEE ordering: NaN is unordered, and +0 equals -0.
impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> PartialOrd for Float<EXP, FRAC, Bits> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self.is_nan() || other.is_nan() {
      return None
    }
    if self.is_zero() && other.is_zero() {
      return Some(Ordering::Equal)
    }
    // Sign-magnitude: among non-negatives the encodings are ordered like the values, among
    // negatives in reverse.
    Some(match (self.is_sign_minus(), other.is_sign_minus()) {
      (false, false) => self.abs_bits().cmp(&other.abs_bits()),
      (true, true) => other.abs_bits().cmp(&self.abs_bits()),
      (false, true) => Ordering::Greater,
      (true, false) => Ordering::Less,
    })
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// A key whose unsigned order is the IEEE total order of the encodings.
  #[inline]
  fn total_key(self) -> u64 {
    let bits = self.bits();
    if bits & Self::SIGN_MASK != 0 {
      !bits & (Self::SIGN_MASK | (Self::SIGN_MASK - 1))
    } else {
      bits | Self::SIGN_MASK
    }
  }

  /// The IEEE 754 `totalOrder` predicate, as an [`Ordering`]:
  ///
  /// -NaN < -∞ < negative numbers < -0 < +0 < positive numbers < +∞ < +NaN
  ///
  /// with NaNs ordered among themselves by payload (signaling before quiet).
  ///
  /// ```
  /// # use soft_tower::b32;
  /// # use core::cmp::Ordering;
  /// assert_eq!(b32::NEG_ZERO.total_cmp(&b32::ZERO), Ordering::Less);
  /// assert_eq!(b32::INFINITY.total_cmp(&b32::NAN), Ordering::Less);
  /// ```
  #[inline]
  pub fn total_cmp(&self, other: &Self) -> Ordering {
    self.total_key().cmp(&other.total_key())
  }

  /// The lesser of `self` and `other`, treating -0 as less than +0. If either is NaN, the result
  /// is NaN (IEEE 754-2019 `minimum`).
  pub fn minimum(self, other: Self) -> Self {
    if let Some(nan) = Self::propagate_nan(self, other) {
      return nan
    }
    if self.is_zero() && other.is_zero() {
      return if self.is_sign_minus() { self } else { other }
    }
    if self <= other { self } else { other }
  }

  /// The greater of `self` and `other`, treating +0 as greater than -0. If either is NaN, the
  /// result is NaN (IEEE 754-2019 `maximum`).
  pub fn maximum(self, other: Self) -> Self {
    if let Some(nan) = Self::propagate_nan(self, other) {
      return nan
    }
    if self.is_zero() && other.is_zero() {
      return if self.is_sign_minus() { other } else { self }
    }
    if self >= other { self } else { other }
  }
}
