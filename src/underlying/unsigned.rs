use super::{Bits, Sealed};

macro_rules! impl_bits {
  ($uint:ty) => {
    impl Bits for $uint {}
    impl Sealed for $uint {
      const ZERO: Self = 0;
      const BITS: u32 = <$uint>::BITS;

      #[inline]
      fn to_u64(self) -> u64 { self as u64 }

      #[inline]
      fn of_u64(x: u64) -> Self { x as $uint }
    }
  }
}

impl_bits!{u8}
impl_bits!{u16}
impl_bits!{u32}
impl_bits!{u64}
