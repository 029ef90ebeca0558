//! The error taxonomy shared by every fallible operation in the crate.
//!
//! Only [`Error::FatalOverflow`] is meant to be non-recoverable: the trapping operators panic
//! with its message (see [`trap`]), while the `try_*` forms hand it back as a value.

use thiserror::Error;

/// Everything that can go wrong in a numeric operation or conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
  /// A trapping operation could not produce a representable result.
  #[error("fatal overflow: {0}")]
  FatalOverflow(#[from] Overflow),

  /// The value is well-formed but not representable in the target type.
  #[error("value not representable in the target type")]
  Range,

  /// A bit pattern reinterpretation between types of different widths was requested.
  #[error("cannot reinterpret a {from}-bit pattern as {to} bits")]
  InvalidWidthPairing { from: u32, to: u32 },

  /// Numeric text that does not follow the accepted grammar.
  #[error("malformed numeric text: {0}")]
  MalformedText(#[from] TextError),
}

/// The reason a trapping operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Overflow {
  #[error("arithmetic result out of range")]
  Arithmetic,
  #[error("negation of the minimum signed value")]
  NegateMin,
  #[error("division by zero")]
  DivisionByZero,
  #[error("remainder by zero")]
  RemainderByZero,
  #[error("value out of range of the target integer type")]
  Conversion,
  #[error("NaN or infinity cannot be converted to an integer")]
  NonFinite,
}

/// What is wrong with a piece of numeric text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TextError {
  #[error("no digits")]
  Empty,
  #[error("invalid digit")]
  InvalidDigit,
  #[error("digit separator not between two digits")]
  MisplacedSeparator,
  #[error("exponent has no digits")]
  MissingExponentDigits,
  #[error("unexpected trailing characters")]
  TrailingCharacters,
  #[error("radix must be 2, 8, 10, or 16")]
  UnsupportedRadix,
}

/// Abort the current operation with `error`.
///
/// This is the single place where trapping arithmetic turns into a panic; the message is the
/// `Display` of the error, and the location reported is the caller's.
#[cold]
#[track_caller]
pub(crate) fn trap(error: impl Into<Error>) -> ! {
  panic!("{}", error.into())
}
