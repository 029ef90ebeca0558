//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::codec::{dragon, grisu, Decoded};
use crate::float::{Float, Subnormals};
use alloc::vec::Vec;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Unpack and round back, which is the overhead every operation pays.
  pub fn bench_unpack_round_pack(self) -> Self {
    Self::round_pack(self.unpack(Subnormals::NATIVE), false, Subnormals::NATIVE)
  }

  /// The fast path of shortest formatting alone: the number of digits, or `None` where it gives
  /// up. `self` must be finite and nonzero.
  pub fn bench_grisu(self) -> Option<usize> {
    let mut buf = Vec::with_capacity(20);
    grisu::format_shortest(&Decoded::of(self), &mut buf).map(|_| buf.len())
  }

  /// The exact path of shortest formatting alone: the number of digits. `self` must be finite
  /// and nonzero.
  pub fn bench_dragon(self) -> usize {
    let mut buf = Vec::with_capacity(20);
    dragon::format_shortest(&Decoded::of(self), &mut buf);
    buf.len()
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn add_32(x: crate::b32, y: crate::b32) -> crate::b32 {
  x + y
}

#[unsafe(no_mangle)]
pub fn add_64(x: crate::b64, y: crate::b64) -> crate::b64 {
  x + y
}

#[unsafe(no_mangle)]
pub fn mul_32(x: crate::b32, y: crate::b32) -> crate::b32 {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_64(x: crate::b64, y: crate::b64) -> crate::b64 {
  x * y
}

#[unsafe(no_mangle)]
pub fn div_64(x: crate::b64, y: crate::b64) -> crate::b64 {
  x / y
}

#[unsafe(no_mangle)]
pub fn fma_64(x: crate::b64, y: crate::b64, z: crate::b64) -> crate::b64 {
  x.adding_product(y, z)
}

//

#[unsafe(no_mangle)]
pub fn overflowing_add_i32(x: crate::I32, y: crate::I32) -> (crate::I32, bool) {
  x.overflowing_add(y)
}

#[unsafe(no_mangle)]
pub fn clamping_i64_to_i16(x: crate::I64) -> crate::I16 {
  crate::I16::clamping(x)
}
