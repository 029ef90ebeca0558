use super::*;
use super::bignum::Big;
use crate::{Error, TextError};

use core::str::FromStr;

/// `text` without `prefix`, matched ignoring ASCII case.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
  let head = text.get(.. prefix.len())?;
  head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len() ..])
}

/// A nonzero decimal `digits × 10^exp`, with no leading or trailing zeros in `digits` (which are
/// digit values, not ASCII).
#[derive(Debug)]
struct Decimal {
  digits: Vec<u8>,
  exp: i64,
}

impl Decimal {
  /// Read `digits [. digits] [e [sign] digits]`, with `_` allowed between two digits of the
  /// mantissa. Returns `None` for a zero.
  fn lex(text: &str) -> Result<Option<Self>, TextError> {
    let bytes = text.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut digits = Vec::new();
    let mut exp = 0i64;
    let mut point = false;
    let mut i = 0;
    while let Some(&b) = bytes.get(i) {
      match b {
        b'0' ..= b'9' => {
          digits.push(b - b'0');
          if point {
            exp = exp.saturating_sub(1);
          }
        },
        b'_' => if i == 0 || !is_digit(i - 1) || !is_digit(i + 1) {
          return Err(TextError::MisplacedSeparator)
        },
        b'.' if !point => point = true,
        _ => break,
      }
      i += 1;
    }
    if digits.is_empty() {
      return Err(if i == bytes.len() { TextError::Empty } else { TextError::InvalidDigit })
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
      i += 1;
      let negative = match bytes.get(i) {
        Some(b'-') => { i += 1; true },
        Some(b'+') => { i += 1; false },
        _ => false,
      };
      let start = i;
      let mut e = 0i64;
      while let Some(&b) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        e = e.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        i += 1;
      }
      if i == start {
        return Err(TextError::MissingExponentDigits)
      }
      exp = exp.saturating_add(if negative { -e } else { e });
    }
    if i != bytes.len() {
      return Err(TextError::TrailingCharacters)
    }

    let Some(first) = digits.iter().position(|&d| d != 0) else { return Ok(None) };
    let last = digits.iter().rposition(|&d| d != 0).unwrap_or(first);
    let trailing = digits.len() - 1 - last;
    digits.truncate(last + 1);
    digits.drain(.. first);
    Ok(Some(Self { digits, exp: exp.saturating_add(trailing as i64) }))
  }

  /// The digits as an integer, if they fit a `u64`.
  fn small(&self) -> Option<u64> {
    if self.digits.len() > 19 {
      return None
    }
    Some(self.digits.iter().fold(0, |acc, &d| acc * 10 + u64::from(d)))
  }

  /// The digits as a bignum.
  fn big(&self) -> Big {
    let mut w = Big::from_u64(0);
    for chunk in self.digits.chunks(9) {
      let value = chunk.iter().fold(0, |acc, &d| acc * 10 + u32::from(d));
      w.mul_add_small(10u32.pow(chunk.len() as u32), value);
    }
    w
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// `inf`, `infinity`, `nan`, `snan`, and NaNs with a payload like `nan(0x2a)`, ignoring case.
  fn parse_special(text: &str) -> Result<Option<Self>, Error> {
    if text.eq_ignore_ascii_case("inf") || text.eq_ignore_ascii_case("infinity") {
      return Ok(Some(Self::INFINITY))
    }
    let (base, rest) = if let Some(rest) = strip_prefix_ignore_case(text, "snan") {
      (Self::SIGNALING_NAN, rest)
    } else if let Some(rest) = strip_prefix_ignore_case(text, "nan") {
      (Self::NAN, rest)
    } else {
      return Ok(None)
    };
    if rest.is_empty() {
      return Ok(Some(base))
    }

    let hex = strip_prefix_ignore_case(rest, "(0x")
      .and_then(|hex| hex.strip_suffix(')'))
      .ok_or(TextError::TrailingCharacters)?;
    if hex.is_empty() {
      return Err(TextError::Empty.into())
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(TextError::InvalidDigit.into())
    }
    let payload = u64::from_str_radix(hex, 16).map_err(|_| Error::Range)?;
    if payload > (Self::QUIET_BIT >> 1).saturating_sub(1) {
      return Err(Error::Range)
    }
    Ok(Some(Self::from_u64(base.bits() | payload)))
  }

  /// The float nearest to `±decimal`.
  fn from_decimal(negative: bool, decimal: &Decimal) -> Self {
    let mode = Subnormals::Gradual;
    let n = decimal.digits.len() as i64;
    let e = decimal.exp;
    let magnitude = n.saturating_add(e);

    // Beyond these, the result is an infinity or a zero whatever the digits (`1233 / 4096` is a
    // little over `log10(2)`).
    let max10 = ((i64::from(Self::EMAX) + 1) * 1233 >> 12) + 2;
    let min10 = ((i64::from(Self::QMIN) - 1) * 1233 >> 12) - 2;
    if magnitude - 1 > max10 {
      return Self::infinity(negative)
    }
    if magnitude < min10 {
      return Self::zero(negative)
    }
    let pow = e.unsigned_abs() as u32;

    // Both the digits and the power of ten are exact, so a single operation rounds correctly.
    let exact = |sign: bool, sig: u128| Self::round_pack(Unpacked { sign, exp: 0, sig }, false, mode);
    if let Some(w) = decimal.small() {
      if w < 1 << Self::PRECISION && pow <= 27 && 5u64.pow(pow) < 1 << Self::PRECISION {
        let w = exact(negative, w.into());
        let scale = exact(false, 10u128.pow(pow));
        if w.is_finite() && scale.is_finite() {
          return if e >= 0 { w.mul_in(scale, mode) } else { w.div_in(scale, mode) }
        }
      }
    }

    log::trace!("parsing {} digits × 10^{e}: using exact path", n);
    let mut w = decimal.big();
    if e >= 0 {
      w.mul_pow10(pow);
      let shift = w.bit_len().saturating_sub(126);
      let (sig, sticky) = w.split_at_bit(shift);
      return Self::round_pack(Unpacked { sign: negative, exp: shift as i32, sig }, sticky, mode)
    }

    // Scale `w / 10^pow` by `2^k` so the quotient has `PRECISION + 3` or `PRECISION + 4` bits,
    // then divide bit by bit; the remainder is the sticky bit.
    let mut den = Big::from_u64(1);
    den.mul_pow10(pow);
    let k = den.bit_len() as i32 - w.bit_len() as i32 + Self::PRECISION as i32 + 3;
    if k >= 0 {
      w.mul_pow2(k as u32);
    } else {
      den.mul_pow2(k.unsigned_abs());
    }
    let top = Self::PRECISION + 5;
    den.mul_pow2(top);
    let mut q = 0u128;
    for _ in 0 ..= top {
      q <<= 1;
      if w >= den {
        w.sub_assign(&den);
        q |= 1;
      }
      w.mul_pow2(1);
    }
    Self::round_pack(Unpacked { sign: negative, exp: -k, sig: q }, !w.is_zero(), mode)
  }
}

/// Read a decimal number, correctly rounded (ties to even) and with gradual underflow.
///
/// The accepted forms are an optional sign, then either
///
///   - digits with an optional fraction and exponent, like `12`, `-0.5`, `.5`, `1_000.25`, or
///     `6.02e23` (`_` may only separate two digits of the mantissa), or
///   - `inf`, `infinity`, `nan`, `snan`, or a NaN with a hex payload like `nan(0x2a)`, in any
///     case.
///
/// Magnitudes too large for the format read as infinities, and magnitudes too small as zeros;
/// these are not errors. A NaN payload that doesn't fit is [`Error::Range`], and malformed text
/// is [`Error::MalformedText`].
///
/// Only decimal text is read: there are no hexadecimal floats, so `"0x10"` is malformed.
///
/// ```
/// # use soft_tower::{b16, b64, Error, TextError};
/// assert_eq!("0.1".parse::<b64>().map(f64::from), Ok(0.1));
/// assert_eq!("1e-400".parse::<b64>().map(f64::from), Ok(0.));
/// assert_eq!("65520".parse::<b16>(), Ok(b16::INFINITY));
/// assert_eq!("1..2".parse::<b64>(), Err(Error::MalformedText(TextError::TrailingCharacters)));
/// assert_eq!("0x10".parse::<b64>(), Err(Error::MalformedText(TextError::TrailingCharacters)));
/// ```
impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> FromStr for Float<EXP, FRAC, Bits> {
  type Err = Error;

  fn from_str(text: &str) -> Result<Self, Error> {
    let (negative, body) = match text.as_bytes().first() {
      Some(b'-') => (true, &text[1 ..]),
      Some(b'+') => (false, &text[1 ..]),
      _ => (false, text),
    };
    if let Some(special) = Self::parse_special(body)? {
      return Ok(if negative { special.negated() } else { special })
    }
    Ok(match Decimal::lex(body)? {
      Some(decimal) => Self::from_decimal(negative, &decimal),
      None => Self::zero(negative),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{b16, b32, b64};
  use crate::float::rational::is_correct_rounded;
  use alloc::string::ToString;
  use malachite::Natural;
  use malachite::base::num::arithmetic::traits::Pow;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  fn parse(text: &str) -> Result<f64, Error> {
    text.parse::<b64>().map(f64::from)
  }

  #[test]
  fn lex() {
    let lex = |text: &str| Decimal::lex(text).map(|d| d.map(|d| (d.digits, d.exp)));
    assert_eq!(lex("00120.0500"), Ok(Some((vec![1, 2, 0, 0, 5], -2))));
    assert_eq!(lex("1_000"), Ok(Some((vec![1], 3))));
    assert_eq!(lex("0.000"), Ok(None));
    assert_eq!(lex("5e-3"), Ok(Some((vec![5], -3))));
    assert_eq!(lex("1e99999999999999999999999"), Ok(Some((vec![1], i64::MAX))));
  }

  #[test]
  fn examples() {
    assert_eq!(parse("1"), Ok(1.));
    assert_eq!(parse("+1.0"), Ok(1.));
    assert_eq!(parse("-0.5"), Ok(-0.5));
    assert_eq!(parse(".5"), Ok(0.5));
    assert_eq!(parse("5."), Ok(5.));
    assert_eq!(parse("1_000.25"), Ok(1000.25));
    assert_eq!(parse("6.02E23"), Ok(6.02e23));
    assert_eq!(parse("1e+3"), Ok(1e3));
    assert_eq!(parse("0.1"), Ok(0.1));
    assert_eq!(parse("9007199254740993"), Ok(9007199254740992.));
    assert_eq!(parse("1e23"), Ok(1e23));
    assert_eq!(parse("1.7976931348623157e308"), Ok(f64::MAX));
    assert_eq!(parse("1.7976931348623159e308"), Ok(f64::INFINITY));
    assert_eq!(parse("4.9e-324"), Ok(5e-324));
    assert_eq!(parse("2.4703282292062328e-324"), Ok(5e-324));
    assert_eq!(parse("2.4703282292062327e-324"), Ok(0.));
    assert_eq!(parse("2.2250738585072011e-308"), Ok(2.225073858507201e-308));
    assert_eq!(parse("1e400"), Ok(f64::INFINITY));
    assert_eq!(parse("-1e-400").map(f64::to_bits), Ok((-0f64).to_bits()));
    assert_eq!(parse("-0").map(f64::to_bits), Ok((-0f64).to_bits()));
    assert_eq!(parse("0e999999999999999999999"), Ok(0.));
    assert_eq!(parse(&("1".to_string() + &"0".repeat(400) + "e-400")), Ok(1.));
  }

  #[test]
  fn special() {
    assert_eq!(parse("inf"), Ok(f64::INFINITY));
    assert_eq!(parse("-Infinity"), Ok(f64::NEG_INFINITY));
    assert_eq!(parse("+INF"), Ok(f64::INFINITY));
    assert_eq!("NaN".parse::<b32>().map(b32::to_bits), Ok(b32::NAN.to_bits()));
    assert_eq!("-nan".parse::<b32>().map(b32::to_bits), Ok(0xffc0_0000));
    assert_eq!("snan".parse::<b32>().map(b32::to_bits), Ok(b32::SIGNALING_NAN.to_bits()));
    assert_eq!("nan(0x2A)".parse::<b32>().map(b32::to_bits), Ok(0x7fc0_002a));
    assert_eq!("snan(0x1)".parse::<b32>().map(b32::to_bits), Ok(0x7fa0_0001));
    assert_eq!("nan(0x1fffff)".parse::<b32>().map(b32::to_bits), Ok(0x7fdf_ffff));
    assert_eq!("nan(0x200000)".parse::<b32>(), Err(Error::Range));
    assert_eq!("nan(0x00000000000000000001)".parse::<b32>().map(b32::to_bits), Ok(0x7fc0_0001));
    assert_eq!("nan(0x)".parse::<b32>(), Err(Error::MalformedText(TextError::Empty)));
    assert_eq!("nan(0xg)".parse::<b32>(), Err(Error::MalformedText(TextError::InvalidDigit)));
    assert_eq!("nan(1)".parse::<b32>(), Err(Error::MalformedText(TextError::TrailingCharacters)));
    assert_eq!("nanny".parse::<b32>(), Err(Error::MalformedText(TextError::TrailingCharacters)));
    for x in [b32::NAN, b32::SIGNALING_NAN, b32::from_bits(0x7fc0_1234), b32::from_bits(0x7fa0_0001)] {
      assert_eq!(format!("{x:?}").parse::<b32>().map(b32::to_bits), Ok(x.to_bits()));
    }
  }

  #[test]
  fn malformed() {
    let error = |text: &str| match parse(text) {
      Err(Error::MalformedText(e)) => Some(e),
      _ => None,
    };
    assert_eq!(error(""), Some(TextError::Empty));
    assert_eq!(error("-"), Some(TextError::Empty));
    assert_eq!(error("."), Some(TextError::Empty));
    assert_eq!(error("x"), Some(TextError::InvalidDigit));
    assert_eq!(error("e5"), Some(TextError::InvalidDigit));
    assert_eq!(error("--1"), Some(TextError::InvalidDigit));
    assert_eq!(error("in"), Some(TextError::InvalidDigit));
    assert_eq!(error("_1"), Some(TextError::MisplacedSeparator));
    assert_eq!(error("1_"), Some(TextError::MisplacedSeparator));
    assert_eq!(error("1__0"), Some(TextError::MisplacedSeparator));
    assert_eq!(error("1_.5"), Some(TextError::MisplacedSeparator));
    assert_eq!(error("1e"), Some(TextError::MissingExponentDigits));
    assert_eq!(error("1e+"), Some(TextError::MissingExponentDigits));
    assert_eq!(error("1e1_0"), Some(TextError::TrailingCharacters));
    assert_eq!(error("1.2.3"), Some(TextError::TrailingCharacters));
    assert_eq!(error("1 "), Some(TextError::TrailingCharacters));
    assert_eq!(error("0x10"), Some(TextError::TrailingCharacters));
  }

  #[test]
  fn small_formats() {
    type Mini = Float<4, 3, u8>;
    assert_eq!("240".parse::<Mini>(), Ok(Mini::GREATEST_FINITE_MAGNITUDE));
    assert_eq!("247.9".parse::<Mini>(), Ok(Mini::GREATEST_FINITE_MAGNITUDE));
    assert_eq!("248".parse::<Mini>(), Ok(Mini::INFINITY));
    assert_eq!("1e-3".parse::<Mini>(), Ok(Mini::LEAST_NONZERO_MAGNITUDE));
    assert_eq!("65504".parse::<b16>(), Ok(b16::GREATEST_FINITE_MAGNITUDE));
    assert_eq!("65519.99".parse::<b16>(), Ok(b16::GREATEST_FINITE_MAGNITUDE));
    assert_eq!("6e-8".parse::<b16>(), Ok(b16::LEAST_NONZERO_MAGNITUDE));
    assert_eq!("2.98e-8".parse::<b16>(), Ok(b16::ZERO));
  }

  /// Every finite value of a small format reads back from its text.
  macro_rules! test_round_trip {
    ($name:ident, $float:ty) => {
      #[test]
      fn $name() {
        for x in <$float>::cases_exhaustive() {
          if x.is_nan() {
            continue
          }
          let text = x.to_string();
          assert_eq!(text.parse::<$float>().map(<$float>::to_bits), Ok(x.to_bits()), "{text}");
        }
      }
    };
  }

  test_round_trip!{float_4_3_round_trip, Float::<4, 3, u8>}
  test_round_trip!{float_5_2_round_trip, Float::<5, 2, u8>}
  test_round_trip!{b16_round_trip, b16}
  test_round_trip!{bfloat16_round_trip, Float::<8, 7, u16>}

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn b64_native(text in "-?[0-9]{1,30}(\\.[0-9]{0,30})?([eE][+-]?[0-9]{1,3})?") {
      assert_eq!(parse(&text).map(f64::to_bits), Ok(text.parse::<f64>().unwrap().to_bits()), "{text}");
    }

    #[test]
    fn b32_native(text in "[0-9]{1,12}(\\.[0-9]{0,12})?(e-?[0-9]{1,2})?") {
      let expected = text.parse::<f32>().unwrap();
      assert_eq!(text.parse::<b32>().map(b32::to_bits), Ok(expected.to_bits()), "{text}");
    }

    #[test]
    fn b64_round_trip(x in b64::cases_proptest()) {
      prop_assume!(!x.is_nan());
      assert_eq!(x.to_string().parse::<b64>().map(b64::to_bits), Ok(x.to_bits()));
    }

    #[test]
    fn b32_round_trip(x in b32::cases_proptest()) {
      prop_assume!(!x.is_nan());
      assert_eq!(x.to_string().parse::<b32>().map(b32::to_bits), Ok(x.to_bits()));
    }

    /// Correct rounding in a format the host doesn't have, against the rational oracle.
    #[test]
    fn b16_oracle(mantissa in "[1-9][0-9]{0,24}", e in -40i64 .. 10) {
      let got = format!("{mantissa}e{e}").parse::<b16>().unwrap();
      let exact = Rational::from(mantissa.parse::<Natural>().unwrap()) * Rational::from(10).pow(e);
      assert!(is_correct_rounded(exact, got), "{mantissa}e{e} {got:?}");
    }
  }
}
