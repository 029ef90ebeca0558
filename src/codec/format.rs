use super::*;

use alloc::string::String;
use core::fmt::{self, Write};

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// The payload of a NaN: the fraction bits below the quiet bit and the bit under it (which
  /// marks [`Self::SIGNALING_NAN`]).
  fn nan_payload(self) -> u64 {
    self.frac_field() & (Self::QUIET_BIT >> 1).saturating_sub(1)
  }

  /// Write a non-NaN `self` in the shortest form that reads back as `self`.
  fn fmt_number(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_sign_minus() {
      f.write_char('-')?;
    }
    if self.is_infinite() {
      return f.write_str("inf")
    }
    if self.is_zero() {
      return f.write_str("0.0")
    }

    let decoded = Decoded::of(self);
    let (digits, k) = shortest_digits(&decoded);
    let digits: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    let n = digits.len() as i32;
    let lead = self.unpack(Subnormals::Gradual).lead_exp();

    // Plain decimal for 1e-4 <= |x| < 2^PRECISION (all integers in that range are exact), in
    // scientific notation otherwise.
    if k >= -3 && lead < Self::PRECISION as i32 {
      if k <= 0 {
        f.write_str("0.")?;
        (0 .. -k).try_for_each(|_| f.write_char('0'))?;
        f.write_str(&digits)
      } else if k < n {
        let (integral, fractional) = digits.split_at(k as usize);
        write!(f, "{integral}.{fractional}")
      } else {
        f.write_str(&digits)?;
        (0 .. k - n).try_for_each(|_| f.write_char('0'))?;
        f.write_str(".0")
      }
    } else {
      let (first, rest) = digits.split_at(1);
      f.write_str(first)?;
      if !rest.is_empty() {
        write!(f, ".{rest}")?;
      }
      let e = k - 1;
      write!(f, "e{}{:02}", if e < 0 { '-' } else { '+' }, e.unsigned_abs())
    }
  }
}

/// The shortest decimal that reads back as the same value: `1.0`, `0.001`, `123456.5`, or for
/// magnitudes below `1e-4` or at least `2^PRECISION`, scientific notation like `1e+16` or
/// `1.5e-05`. Zeros are `0.0` and `-0.0`, infinities `inf` and `-inf`, and every NaN is `nan`.
///
/// ```
/// # use soft_tower::{b16, b32, b64, RoundFrom};
/// assert_eq!(b64::round_from(0.1).to_string(), "0.1");
/// assert_eq!(b32::round_from(0.1).to_string(), "0.1");
/// assert_eq!(b64::round_from(1e16).to_string(), "1e+16");
/// assert_eq!(b64::LEAST_NONZERO_MAGNITUDE.to_string(), "5e-324");
/// assert_eq!(b16::GREATEST_FINITE_MAGNITUDE.to_string(), "6.55e+04");
/// assert_eq!(b16::NEG_INFINITY.to_string(), "-inf");
/// ```
impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> fmt::Display for Float<EXP, FRAC, Bits> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_nan() {
      f.write_str("nan")
    } else {
      self.fmt_number(f)
    }
  }
}

/// The same as [`Display`](fmt::Display), except for NaNs: these print as `nan` or `snan`
/// (signaling), followed by the payload in hex if it's not zero, like `nan(0x2a)`. The sign of
/// a NaN is never shown.
impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> fmt::Debug for Float<EXP, FRAC, Bits> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.is_nan() {
      return self.fmt_number(f)
    }
    f.write_str(if self.is_signaling_nan() { "snan" } else { "nan" })?;
    match self.nan_payload() {
      0 => Ok(()),
      payload => write!(f, "(0x{payload:x})"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{b16, b32, b64};
  use alloc::string::ToString;
  use proptest::prelude::*;

  #[test]
  fn layout() {
    let s = |x: f64| b64::from(x).to_string();
    assert_eq!(s(1.), "1.0");
    assert_eq!(s(-100.), "-100.0");
    assert_eq!(s(0.001), "0.001");
    assert_eq!(s(0.0001), "0.0001");
    assert_eq!(s(0.00015), "0.00015");
    assert_eq!(s(0.00001), "1e-05");
    assert_eq!(s(1.5e-5), "1.5e-05");
    assert_eq!(s(123456.5), "123456.5");
    assert_eq!(s(9007199254740991.), "9007199254740991.0");
    assert_eq!(s(9007199254740992.), "9.007199254740992e+15");
    assert_eq!(s(1e16), "1e+16");
    assert_eq!(s(1e100), "1e+100");
    assert_eq!(s(f64::MAX), "1.7976931348623157e+308");
    assert_eq!(s(5e-324), "5e-324");
    assert_eq!(s(0.), "0.0");
    assert_eq!(s(-0.), "-0.0");
    assert_eq!(s(f64::INFINITY), "inf");
    assert_eq!(s(0.3), "0.3");
  }

  #[test]
  fn small_formats() {
    assert_eq!(b16::ONE.next_up().to_string(), "1.001");
    assert_eq!(b16::LEAST_NONZERO_MAGNITUDE.to_string(), "6e-08");
    assert_eq!(b16::from_bits(0x7800).to_string(), "3.277e+04");
    assert_eq!(Float::<4, 3, u8>::GREATEST_FINITE_MAGNITUDE.to_string(), "2.4e+02");
    assert_eq!(Float::<4, 3, u8>::from_bits(0b0_1010_000).to_string(), "8.0");
  }

  #[test]
  fn nan() {
    assert_eq!(b32::NAN.to_string(), "nan");
    assert_eq!((-b32::NAN).to_string(), "nan");
    assert_eq!(b32::SIGNALING_NAN.to_string(), "nan");
    assert_eq!(format!("{:?}", b32::NAN), "nan");
    assert_eq!(format!("{:?}", -b32::NAN), "nan");
    assert_eq!(format!("{:?}", b32::SIGNALING_NAN), "snan");
    assert_eq!(format!("{:?}", b32::from_bits(0x7fc0_002a)), "nan(0x2a)");
    assert_eq!(format!("{:?}", b32::from_bits(0xff80_0001)), "snan(0x1)");
    assert_eq!(format!("{:?}", b64::from_bits(0x7ff8_0000_0000_0000 | 0xdead_beef)), "nan(0xdeadbeef)");
    assert_eq!(format!("{:?}", b64::from(-0.5)), "-0.5");
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Check against the host: the text must read back as the same value, and have as many
    /// significant digits as the host's own shortest representation.
    #[test]
    fn b64_shortest(x in b64::cases_proptest()) {
      let native = f64::from(x);
      prop_assume!(native.is_finite() && native != 0.);
      let text = x.to_string();
      assert_eq!(text.parse::<f64>().map(f64::to_bits), Ok(native.to_bits()), "{text}");
      let ours = text.split('e').next().unwrap_or("").trim_start_matches('-').trim_end_matches(".0");
      let ours = ours.replace('.', "");
      let ours = ours.trim_start_matches('0').trim_end_matches('0');
      let host = format!("{:e}", native.abs());
      let host = host.split('e').next().unwrap_or("").replace('.', "");
      assert_eq!(ours.len(), host.len(), "{text} {host}");
    }

    #[test]
    fn b32_shortest(x in b32::cases_proptest()) {
      let native = f32::from(x);
      prop_assume!(native.is_finite());
      let text = x.to_string();
      assert_eq!(text.parse::<f32>().map(f32::to_bits), Ok(native.to_bits()), "{text}");
      let host = format!("{:e}", native.abs());
      let host = host.split('e').next().unwrap_or("").replace('.', "");
      let ours = text.split('e').next().unwrap_or("").trim_start_matches('-').replace('.', "");
      let ours = ours.trim_start_matches('0').trim_end_matches('0');
      assert!(ours.len() <= host.len().max(1), "{text} {host}");
    }
  }
}
