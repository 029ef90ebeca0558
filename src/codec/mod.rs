//! Conversion between [`Float`]s and decimal text.
//!
//! **Formatting** ([`Display`](core::fmt::Display), [`Debug`](core::fmt::Debug)) prints the
//! shortest decimal that reads back as the same float. The digits come from Grisu3
//! ([`grisu`]), which is fast but gives up on a small fraction of inputs, in which case Dragon4
//! ([`dragon`]) computes them exactly with bignums.
//!
//! **Parsing** ([`FromStr`](core::str::FromStr)) is correctly rounded. Inputs whose digits and
//! power of ten are both exact in the format take a single correctly rounded multiplication or
//! division; the rest go through an exact bignum quotient that's rounded once.
//!
//! Together, `x.to_string().parse() == Ok(x)` for every finite `x`.

use crate::float::{Float, Unpacked, Subnormals};
use alloc::vec::Vec;

/// Unsigned bignums for the exact paths.
mod bignum;

/// 64-bit "do-it-yourself" floats and cached powers of ten.
mod diy_float;

/// Grisu3 (the fast path of formatting).
pub(crate) mod grisu;

/// Dragon4 (the exact path of formatting).
pub(crate) mod dragon;

/// `Display` and `Debug`.
mod format;

/// `FromStr`.
mod parse;

/// A finite nonzero magnitude `sig × 2^q`, as the digit generators want it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Decoded {
  pub sig: u64,
  pub q: i32,
  /// Whether the float below is closer than the float above, which is the case at powers of two
  /// (except the smallest normal, where the spacing below is the same).
  pub lower_closer: bool,
}

impl Decoded {
  /// The magnitude of a finite nonzero `x`.
  pub fn of<const EXP: u32, const FRAC: u32, Bits: crate::Bits>(x: Float<EXP, FRAC, Bits>) -> Self {
    let Unpacked { sig, exp, .. } = x.unpack(Subnormals::Gradual);
    debug_assert!(x.is_finite() && sig != 0);
    let lower_closer = x.frac_field() == 0 && x.exp_field() > 1;
    Self { sig: sig as u64, q: exp, lower_closer }
  }
}

/// The shortest digits (without trailing zeros) `d₁d₂…dₙ` and the exponent `k`, such that
/// `0.d₁d₂…dₙ × 10^k` reads back as `d`, and among those the closest to `d`.
fn shortest_digits(d: &Decoded) -> (Vec<u8>, i32) {
  let mut buf = Vec::with_capacity(20);
  let k = match grisu::format_shortest(d, &mut buf) {
    Some(k) => k,
    None => {
      log::trace!("shortest digits of {} × 2^{}: fast path inconclusive, using exact path", d.sig, d.q);
      buf.clear();
      dragon::format_shortest(d, &mut buf)
    }
  };
  while buf.len() > 1 && buf.last() == Some(&0) {
    buf.pop();
  }
  (buf, k)
}
