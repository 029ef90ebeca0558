use super::*;
use crate::error::{Error, TextError};

/// The value of an ASCII digit in `radix`, if it is one.
#[inline]
fn digit_value(c: u8, radix: u32) -> Option<u32> {
  let d = match c {
    b'0' ..= b'9' => c - b'0',
    b'a' ..= b'f' => c - b'a' + 10,
    b'A' ..= b'F' => c - b'A' + 10,
    _ => return None,
  };
  (u32::from(d) < radix).then_some(u32::from(d))
}

/// Accumulate the magnitude of a run of digits with optional `_` separators between them.
///
/// Saturates past the `u128` range, which is out of range for every width anyway.
fn magnitude(digits: &[u8], radix: u32) -> Result<Option<u128>, TextError> {
  if digits.is_empty() { return Err(TextError::Empty) }
  let mut acc = Some(0u128);
  let mut prev_digit = false;
  for (i, &c) in digits.iter().enumerate() {
    if c == b'_' {
      // A separator needs a digit on both sides.
      let next_digit = digits.get(i + 1).is_some_and(|&n| digit_value(n, radix).is_some());
      if !prev_digit || !next_digit { return Err(TextError::MisplacedSeparator) }
      prev_digit = false;
      continue
    }
    let d = digit_value(c, radix).ok_or(TextError::InvalidDigit)?;
    acc = acc.and_then(|acc| acc.checked_mul(u128::from(radix))?.checked_add(u128::from(d)));
    prev_digit = true;
  }
  Ok(acc)
}

/// Split an optional leading sign off `text`.
fn split_sign(text: &[u8]) -> (bool, &[u8]) {
  match text.split_first() {
    Some((b'-', rest)) => (true, rest),
    Some((b'+', rest)) => (false, rest),
    _ => (false, text),
  }
}

impl<const BITS: u32, const SIGNED: bool> Integer<BITS, SIGNED> {
  /// Parse an integer written in `radix` (2, 8, 10 or 16), with an optional leading sign and `_`
  /// separators between digits.
  ///
  /// Text that doesn't follow this grammar is [`Error::MalformedText`]; a well-formed value that
  /// doesn't fit in `Self` is [`Error::Range`].
  ///
  /// ```
  /// # use soft_tower::{I16, U8, Error};
  /// assert_eq!(I16::from_str_radix("-7fff", 16), Ok(I16::from(-0x7fff)));
  /// assert_eq!(U8::from_str_radix("1111_0000", 2), Ok(U8::from(0xf0)));
  /// assert_eq!(U8::from_str_radix("256", 10), Err(Error::Range));
  /// ```
  pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
    if !matches!(radix, 2 | 8 | 10 | 16) { return Err(TextError::UnsupportedRadix.into()) }
    let (negative, digits) = split_sign(text.as_bytes());
    Self::from_digits(negative, digits, radix)
  }

  fn from_digits(negative: bool, digits: &[u8], radix: u32) -> Result<Self, Error> {
    let magnitude = magnitude(digits, radix)?.ok_or(Error::Range)?;
    let value = i128::try_from(magnitude).map_err(|_| Error::Range)?;
    Self::try_new(if negative { -value } else { value })
  }
}

/// Decimal by default; `0b`, `0o` and `0x` after the sign select binary, octal, and
/// hexadecimal. A leading `0` alone never means octal.
impl<const BITS: u32, const SIGNED: bool> core::str::FromStr for Integer<BITS, SIGNED> {
  type Err = Error;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    let (negative, rest) = split_sign(text.as_bytes());
    let (radix, digits) = match rest {
      [b'0', b'b' | b'B', digits @ ..] => (2, digits),
      [b'0', b'o' | b'O', digits @ ..] => (8, digits),
      [b'0', b'x' | b'X', digits @ ..] => (16, digits),
      digits => (10, digits),
    };
    Self::from_digits(negative, digits, radix)
  }
}
