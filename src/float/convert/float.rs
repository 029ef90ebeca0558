use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Convert `self` to another float format, under [`Subnormals::NATIVE`]; see
  /// [`Self::convert_in`].
  ///
  /// ```
  /// # use soft_tower::{b16, b32, b64, Float, RoundFrom};
  /// type BFloat = Float<8, 7, u16>;
  /// let third = b64::round_from(1. / 3.);
  /// assert_eq!(third.convert::<5, 10, u16>(), b16::round_from(1. / 3.));
  /// assert_eq!(third.convert::<8, 7, u16>().to_bits(), 0x3eab);
  /// assert!(b32::GREATEST_FINITE_MAGNITUDE.convert::<5, 10, u16>().is_infinite());
  /// ```
  #[inline]
  pub fn convert<
    const EXP2: u32,
    const FRAC2: u32,
    Bits2: crate::Bits,
  >(self) -> Float<EXP2, FRAC2, Bits2> {
    self.convert_in(Subnormals::NATIVE)
  }

  /// Convert `self` to another float format, correctly rounded. Converting to a format with at
  /// least as many exponent and fraction bits is exact.
  ///
  /// A NaN stays NaN, with the same sign and the topmost bits of its payload (padded with 0s if
  /// the target's fraction is wider), and is made quiet.
  pub fn convert_in<
    const EXP2: u32,
    const FRAC2: u32,
    Bits2: crate::Bits,
  >(self, mode: Subnormals) -> Float<EXP2, FRAC2, Bits2> {
    if self.is_nan() {
      let frac = self.frac_field();
      let payload = if FRAC2 >= FRAC { frac << (FRAC2 - FRAC) } else { frac >> (FRAC - FRAC2) };
      let sign = if self.is_sign_minus() { Float::<EXP2, FRAC2, Bits2>::SIGN_MASK } else { 0 };
      return Float::from_u64(sign | Float::<EXP2, FRAC2, Bits2>::INF_BITS | payload).quieted()
    }
    if self.is_infinite() {
      return Float::infinity(self.is_sign_minus())
    }
    Float::round_pack(self.unpack(mode), false, mode)
  }
}

/// The same format as the host's `f32`.
type Native32 = Float<8, 23, u32>;

/// The same format as the host's `f64`.
type Native64 = Float<11, 52, u64>;

impl From<f32> for Native32 {
  /// Bit-exact: the result has the same encoding as `value`, NaN payloads included.
  #[inline]
  fn from(value: f32) -> Self {
    Self::from_bits(value.to_bits())
  }
}

impl From<Native32> for f32 {
  /// Bit-exact: the result has the same encoding as `value`, NaN payloads included.
  #[inline]
  fn from(value: Native32) -> Self {
    f32::from_bits(value.to_bits())
  }
}

impl From<f64> for Native64 {
  /// Bit-exact: the result has the same encoding as `value`, NaN payloads included.
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_bits(value.to_bits())
  }
}

impl From<Native64> for f64 {
  /// Bit-exact: the result has the same encoding as `value`, NaN payloads included.
  #[inline]
  fn from(value: Native64) -> Self {
    f64::from_bits(value.to_bits())
  }
}

macro_rules! make_impl {
  ($native:ty, $format:ty, $exp:literal, $frac:literal, $bits:ty) => {
    impl<
      const EXP: u32,
      const FRAC: u32,
      Bits: crate::Bits,
    > RoundFrom<$native> for Float<EXP, FRAC, Bits> {
      #[doc = concat!("Convert an `", stringify!($native), "` into a `Float`, correctly rounded (see [`Float::convert`]).")]
      #[inline]
      fn round_from(value: $native) -> Self {
        <$format>::from(value).convert()
      }
    }

    impl<
      const EXP: u32,
      const FRAC: u32,
      Bits: crate::Bits,
    > RoundFrom<Float<EXP, FRAC, Bits>> for $native {
      #[doc = concat!("Convert a `Float` into an `", stringify!($native), "`, correctly rounded (see [`Float::convert`]).")]
      #[inline]
      fn round_from(value: Float<EXP, FRAC, Bits>) -> Self {
        value.convert::<$exp, $frac, $bits>().into()
      }
    }
  }
}

make_impl!{f32, Native32, 8, 23, u32}
make_impl!{f64, Native64, 11, 52, u64}
