use super::*;
use crate::error::{Error, Overflow, trap};

/// How to convert an integer into an integer type of a different width or signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
  /// The value, if it fits losslessly; otherwise [`Error::Range`].
  Exact,
  /// The value, if it fits losslessly; otherwise no value.
  Failable,
  /// The value, saturated to the target's `MIN ..= MAX`.
  Clamping,
  /// The bit pattern, sign- or zero-extended (according to the source's signedness) or
  /// truncated to the target width.
  TruncatingReinterpret,
  /// The same bit pattern, read with the target's signedness; both widths must be equal or it's
  /// [`Error::InvalidWidthPairing`].
  BitPatternReinterpret,
}

impl<const BITS: u32, const SIGNED: bool> Integer<BITS, SIGNED> {
  /// Convert `self` into `Integer<B, S>` according to `mode`.
  ///
  /// `Ok(None)` is only ever returned by [`Conversion::Failable`], and every mode except
  /// [`Conversion::Exact`] and [`Conversion::BitPatternReinterpret`] always succeeds.
  ///
  /// ```
  /// # use soft_tower::{I8, I16, U16, Conversion, Error};
  /// let x = I16::from(-200);
  /// assert_eq!(x.convert::<8, true>(Conversion::Exact), Err(Error::Range));
  /// assert_eq!(x.convert::<8, true>(Conversion::Failable), Ok(None));
  /// assert_eq!(x.convert::<8, true>(Conversion::Clamping), Ok(Some(I8::MIN)));
  /// assert_eq!(x.convert::<8, true>(Conversion::TruncatingReinterpret), Ok(Some(I8::from(56))));
  /// assert_eq!(x.convert::<16, false>(Conversion::BitPatternReinterpret), Ok(Some(U16::from(65336))));
  /// assert_eq!(
  ///   x.convert::<8, false>(Conversion::BitPatternReinterpret),
  ///   Err(Error::InvalidWidthPairing { from: 16, to: 8 }),
  /// );
  /// ```
  pub fn convert<const B: u32, const S: bool>(self, mode: Conversion) -> Result<Option<Integer<B, S>>, Error> {
    let value = self.value();
    let fits = Integer::<B, S>::fits(value);
    match mode {
      Conversion::Exact if fits => Ok(Some(Integer::wrapping_from_value(value))),
      Conversion::Exact => Err(Error::Range),
      Conversion::Failable => Ok(fits.then(|| Integer::wrapping_from_value(value))),
      Conversion::Clamping => {
        let clamped = value.clamp(Integer::<B, S>::MIN_VALUE, Integer::<B, S>::MAX_VALUE);
        Ok(Some(Integer::wrapping_from_value(clamped)))
      },
      // `value` is the infinitely sign- (or zero-) extended pattern of `self`; keeping its low
      // `B` bits is exactly "extend, then truncate".
      Conversion::TruncatingReinterpret => Ok(Some(Integer::wrapping_from_value(value))),
      Conversion::BitPatternReinterpret if BITS == B => {
        Ok(Some(Integer(BitPattern::new(self.0.get()))))
      },
      Conversion::BitPatternReinterpret => Err(Error::InvalidWidthPairing { from: BITS, to: B }),
    }
  }

  /// The value of `source`, if it's representable in `Self`.
  #[inline]
  pub fn exactly<const B: u32, const S: bool>(source: Integer<B, S>) -> Option<Self> {
    let value = source.value();
    Self::fits(value).then(|| Self::wrapping_from_value(value))
  }

  /// The value of `source`, or [`Error::Range`] if it's not representable in `Self`.
  #[inline]
  pub fn try_exactly<const B: u32, const S: bool>(source: Integer<B, S>) -> Result<Self, Error> {
    Self::try_new(source.value())
  }

  /// The value of `source` saturated to `Self::MIN ..= Self::MAX`.
  #[inline]
  pub fn clamping<const B: u32, const S: bool>(source: Integer<B, S>) -> Self {
    Self::wrapping_from_value(source.value().clamp(Self::MIN_VALUE, Self::MAX_VALUE))
  }

  /// The bit pattern of `source` extended or truncated to `BITS`.
  #[inline]
  pub fn truncating<const B: u32, const S: bool>(source: Integer<B, S>) -> Self {
    Self::wrapping_from_value(source.value())
  }

  /// The bit pattern of `source`, which has the same width, read with this type's signedness.
  #[inline]
  pub const fn from_bit_pattern<const S: bool>(source: Integer<BITS, S>) -> Self {
    Self(source.0)
  }

  /// The value of `source`, trapping with [`Overflow::Conversion`] if it isn't representable.
  #[inline]
  #[track_caller]
  pub fn from_int<const B: u32, const S: bool>(source: Integer<B, S>) -> Self {
    match Self::exactly(source) {
      Some(result) => result,
      None => trap(Overflow::Conversion),
    }
  }
}
