use super::*;

use core::iter::FusedIterator;
use crate::RoundFrom;

/// An iterator over `start`, `start + step`, `start + 2 × step`, …, up to an end value, created
/// by [`Float::stride`] or [`Float::stride_through`].
///
/// Each element is `start + i × step` computed with a single rounding (by a fused multiply-add),
/// rather than by repeatedly adding `step`, so rounding errors do not accumulate: if the end is
/// exactly a multiple of `step` away from `start`, the iterator lands exactly on it.
#[derive(Debug, Clone)]
pub struct Stride<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> {
  start: Float<EXP, FRAC, Bits>,
  step: Float<EXP, FRAC, Bits>,
  end: Float<EXP, FRAC, Bits>,
  inclusive: bool,
  index: Option<u64>,
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The values `self + i × by` (each rounded once), for `i = 0, 1, 2, …`, as long as they are
  /// strictly before `to` (below it if `by` is positive, above it if negative).
  ///
  /// # Panics
  ///
  /// If `by` is zero.
  ///
  /// ```
  /// # use soft_tower::{b64, RoundFrom};
  /// let x = |x: f64| b64::round_from(x);
  /// let v: Vec<f64> = x(0.).stride(x(1.), x(0.25)).map(f64::round_from).collect();
  /// assert_eq!(v, [0., 0.25, 0.5, 0.75]);
  /// ```
  #[track_caller]
  pub fn stride(self, to: Self, by: Self) -> Stride<EXP, FRAC, Bits> {
    Stride::new(self, to, by, false)
  }

  /// The values `self + i × by` (each rounded once), for `i = 0, 1, 2, …`, as long as they are
  /// not past `through` (above it if `by` is positive, below it if negative).
  ///
  /// # Panics
  ///
  /// If `by` is zero.
  ///
  /// ```
  /// # use soft_tower::{b64, RoundFrom};
  /// let x = |x: f64| b64::round_from(x);
  /// let v: Vec<_> = x(0.).stride_through(x(1.), x(0.1)).collect();
  /// assert_eq!(v.len(), 11);
  /// assert_eq!(v[10], b64::ONE);
  /// ```
  #[track_caller]
  pub fn stride_through(self, through: Self, by: Self) -> Stride<EXP, FRAC, Bits> {
    Stride::new(self, through, by, true)
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Stride<EXP, FRAC, Bits> {
  #[track_caller]
  fn new(
    start: Float<EXP, FRAC, Bits>,
    end: Float<EXP, FRAC, Bits>,
    step: Float<EXP, FRAC, Bits>,
    inclusive: bool,
  ) -> Self {
    assert!(!step.is_zero(), "stride step must not be zero");
    Self { start, step, end, inclusive, index: Some(0) }
  }

  /// Whether `x` is past the end, in the direction of `step`.
  fn is_past_end(&self, x: Float<EXP, FRAC, Bits>) -> bool {
    use core::cmp::Ordering;
    let beyond = if self.step.is_sign_minus() { Ordering::Less } else { Ordering::Greater };
    match x.partial_cmp(&self.end) {
      None => true,
      Some(Ordering::Equal) => !self.inclusive,
      Some(ordering) => ordering == beyond,
    }
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Iterator for Stride<EXP, FRAC, Bits> {
  type Item = Float<EXP, FRAC, Bits>;

  fn next(&mut self) -> Option<Self::Item> {
    let index = self.index?;
    let i = Float::round_from(index);
    let x = self.start.adding_product(i, self.step);
    if self.is_past_end(x) {
      self.index = None;
      return None
    }
    self.index = index.checked_add(1);
    Some(x)
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> FusedIterator for Stride<EXP, FRAC, Bits> {}
