use super::*;

/// Used to do value-to-value conversions that may *round* the input to the nearest value of the
/// target type (see below). It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_. The exact meaning of each conversion depends on
/// the types involved; **consult the documentation for specific implementations of
/// `round_from`**.
///
/// Many of the usage guidelines for [`From`] also apply to [`RoundFrom`]: prefer implementing
/// [`RoundFrom`] over [`RoundInto`], because the former automatically provides the latter, and
/// prefer using [`RoundInto`] when specifying trait bounds on a generic function. There's also a
/// blanket implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// Into a [`Float`], "rounding" is the IEEE 754 default:
///
///   - Round to the nearest representable value, or in case of a tie, to the one with an even
///     significand.
///   - A value too large in magnitude for the format becomes ±∞.
///   - A value too small in magnitude becomes a subnormal or ±0 (under [`Subnormals::NATIVE`]).
///   - NaN stays NaN.
///
/// Into an integer, the fraction is truncated towards zero; see the implementations for what
/// happens to NaN, ∞, and values out of range.
///
/// # Examples
///
/// ```
/// # use soft_tower::*;
/// assert!(b16::round_from(1.0) == b16::round_from(1.0001));
/// assert!(b32::round_from(1.0) <  b32::round_from(1.0001));
/// assert!(b16::round_from(1e6).is_infinite());
/// assert!(b32::round_from(f64::NAN).is_nan());
///
/// assert_eq!(f64::round_from(b16::LEAST_NONZERO_MAGNITUDE), 5.960464477539063e-8);
/// assert_eq!(i64::round_from(b16::GREATEST_FINITE_MAGNITUDE), 65504);
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)). If you're looking for the usual Rust-y conversions
  /// ([`From`] if exact, [`TryFrom`] if fallible), use those traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input to the nearest value of the
/// target type. It is the reciprocal of [`RoundFrom`], and blanket implemented for every type
/// `U: RoundFrom<T>`; see there for the rounding rules.
///
/// # Examples
///
/// ```
/// # use soft_tower::*;
/// assert_eq!(b16::ONE.next_up(), 1.0009765625_f64.round_into());
/// assert!(f64::is_nan(b32::NAN.round_into()));
/// let x: b32 = 16777217_i32.round_into();
/// assert_eq!(i32::round_from(x), 16777216);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

/// Between float formats, and native `f32`/`f64`.
mod float;

/// From and to integers.
mod int;
