use super::*;

/// A finite float taken apart into `(-1)^sign × sig × 2^exp`, with `sig` a plain unsigned
/// integer. This is the form all the arithmetic kernels work in.
///
/// For a number that comes out of [`Float::unpack`], `sig` has at most `FRAC + 1` bits and `exp`
/// is at least [`Float::QMIN`]; but a kernel's result is an arbitrary `u128` with an arbitrary
/// `exp`, which is then taken back to a float by [`Float::round_pack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unpacked {
  pub sign: bool,
  pub exp: i32,
  pub sig: u128,
}

impl Unpacked {
  /// The bit at which the kernels place the leading 1 of an operand before adding or dividing.
  /// This leaves two guard bits at the top of a `u128`: one for a carry out of an addition,
  /// and one spare.
  pub const LEAD: u32 = 125;

  /// Shift `sig` left so that its leading 1 sits at bit [`Self::LEAD`], adjusting `exp` to
  /// keep the value. `sig` must be nonzero.
  #[inline]
  pub fn normalised(self) -> Self {
    debug_assert!(self.sig != 0);
    let shift = self.sig.leading_zeros() - (127 - Self::LEAD);
    Self { sign: self.sign, exp: self.exp - shift as i32, sig: self.sig << shift }
  }

  /// The exponent of the leading 1 of `sig`, that is, `floor(log2(|value|))`. `sig` must be
  /// nonzero.
  #[inline]
  pub fn lead_exp(self) -> i32 {
    debug_assert!(self.sig != 0);
    self.exp + (127 - self.sig.leading_zeros()) as i32
  }
}

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// Take a finite float apart. Under [`Subnormals::FlushToZero`], subnormals read as (signed)
  /// zero.
  ///
  /// Calling this on ∞ or NaN yields garbage (a huge finite number), but is not unsafe.
  #[inline]
  pub(crate) fn unpack(self, mode: Subnormals) -> Unpacked {
    let sign = self.bits() & Self::SIGN_MASK != 0;
    let biased = self.exp_field();
    let frac = self.frac_field();
    if biased == 0 {
      // Subnormals have no hidden bit, and the same exponent as the smallest normals.
      let sig = if mode == Subnormals::FlushToZero { 0 } else { frac };
      Unpacked { sign, exp: Self::QMIN, sig: sig.into() }
    } else {
      Unpacked { sign, exp: Self::QMIN + biased as i32 - 1, sig: (frac | Self::HIDDEN_BIT).into() }
    }
  }

  /// Whether `self` takes part in arithmetic as a zero: it is ±0, or it is subnormal and `mode`
  /// flushes subnormals.
  #[inline]
  pub(crate) fn reads_as_zero(self, mode: Subnormals) -> bool {
    self.is_zero() || (mode == Subnormals::FlushToZero && self.is_subnormal())
  }

  /// Round `sig × 2^exp` to the nearest float, ties to even, and encode it.
  ///
  /// `sticky` says whether there are nonzero bits beyond the end of `sig`, that is, whether the
  /// true value is a little bit more than `sig × 2^exp` (but less than `(sig + 1) × 2^exp`). The
  /// caller must keep enough bits in `sig` that, when `sticky` is set, some of them are
  /// discarded by the rounding. It must be `false` if `sig` is 0.
  ///
  /// Overflow goes to ±∞. Underflow is gradual, or goes to ±0 under
  /// [`Subnormals::FlushToZero`] for any result whose exponent before rounding is below that of
  /// the smallest normal.
  pub(crate) fn round_pack(x: Unpacked, sticky: bool, mode: Subnormals) -> Self {
    let Unpacked { sign, exp, sig } = x;
    if sig == 0 {
      debug_assert!(!sticky);
      return Self::zero(sign)
    }
    let lead = x.lead_exp();
    if mode == Subnormals::FlushToZero && lead < Self::EMIN {
      return Self::zero(sign)
    }

    // `q` is the exponent that the last bit of the rounded significand will have. Normally it's
    // such that the result has exactly `PRECISION` bits, but subnormals have a fixed `q` and
    // fewer bits.
    let mut q = (lead - FRAC as i32).max(Self::QMIN);
    let shift = q - exp;
    let mut kept = if shift <= 0 {
      // No bits are lost, we only have to move them into place (this can't overflow the `u128`,
      // as the result has at most `PRECISION` bits).
      sig << -shift
    } else {
      // Bits are lost. Split `sig` into the `kept` part and the `rest`, and round up if `rest` is
      // more than half an ulp, or exactly half with the tie broken towards an even `kept`. A
      // nonzero `sticky` means `rest` is a hair more than its value.
      let shift = shift as u32;
      let (kept, round_up) = if shift > 128 {
        // Even `sig` is less than half an ulp.
        (0, false)
      } else if shift == 128 {
        let half = 1 << 127;
        (0, sig > half || (sig == half && sticky))
      } else {
        let kept = sig >> shift;
        let rest = sig & ((1 << shift) - 1);
        let half = 1 << (shift - 1);
        (kept, rest > half || (rest == half && (sticky || kept & 1 == 1)))
      };
      kept + u128::from(round_up)
    };

    // Rounding up may carry into a new bit.
    if kept == 1 << (FRAC + 1) {
      kept >>= 1;
      q += 1;
    }
    let kept = kept as u64;
    let sign_bit = if sign { Self::SIGN_MASK } else { 0 };

    if kept < Self::HIDDEN_BIT {
      // Subnormal (or a subnormal that rounded up to the smallest normal, which has the same
      // encoding anyway).
      Self::from_u64(sign_bit | kept)
    } else {
      let biased = (q - Self::QMIN + 1) as u64;
      if biased >= Self::EXP_MASK {
        Self::from_u64(sign_bit | Self::INF_BITS)
      } else {
        Self::from_u64(sign_bit | (biased << FRAC) | (kept & Self::FRAC_MASK))
      }
    }
  }
}
