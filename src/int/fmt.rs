use super::*;

use core::fmt;

/// The decimal value.
impl<const BITS: u32, const SIGNED: bool> fmt::Display for Integer<BITS, SIGNED> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.value(), f)
  }
}

impl<const BITS: u32, const SIGNED: bool> fmt::Debug for Integer<BITS, SIGNED> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.value(), f)
  }
}

/// Helper macro for the radix traits, which print the bit pattern (so negative numbers come out
/// in two's complement, as for the primitive types).
macro_rules! mk_radix_fmt {
  ($trait:ident) => {
    impl<const BITS: u32, const SIGNED: bool> fmt::$trait for Integer<BITS, SIGNED> {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::$trait::fmt(&self.0, f)
      }
    }
  }
}

mk_radix_fmt!{Binary}
mk_radix_fmt!{Octal}
mk_radix_fmt!{LowerHex}
mk_radix_fmt!{UpperHex}

#[cfg(test)]
mod tests {
  use crate::{I8, I16, U64};

  #[test]
  fn decimal() {
    assert_eq!(format!("{}", I8::MIN), "-128");
    assert_eq!(format!("{:?}", U64::MAX), "18446744073709551615");
    assert_eq!(format!("{:>6}", I16::from(-42)), "   -42");
  }

  #[test]
  fn radix() {
    assert_eq!(format!("{:b}", I8::from(-1)), "11111111");
    assert_eq!(format!("{:#06x}", I16::from(255)), "0x00ff");
    assert_eq!(format!("{:X}", I16::from(-2)), "FFFE");
    assert_eq!(format!("{:o}", I8::from(8)), "10");
  }
}
