use super::*;

impl<
  const EXP: u32,
  const FRAC: u32,
  Bits: crate::Bits,
> Float<EXP, FRAC, Bits> {
  /// An iterator through all the bit patterns of the format, NaNs and infinities included.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    let mask = u64::MAX >> (64 - Self::BITS);
    (0 ..= mask).map(Self::from_u64)
  }

  /// An iterator through all the finite values of the format.
  pub(crate) fn cases_exhaustive_finite() -> impl Iterator<Item = Self> {
    Self::cases_exhaustive().filter(|x| x.is_finite())
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields any bit pattern.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    let mask = u64::MAX >> (64 - Self::BITS);
    any::<u64>().prop_map(move |bits| Self::from_u64(bits & mask))
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields finite values, with their
  /// exponents concentrated around zero so that operands often interact.
  pub(crate) fn cases_proptest_finite() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    let max_biased = Self::EXP_MASK - 1;
    let near_one = (Self::BIAS as u64).saturating_sub(Self::PRECISION as u64 + 4)
      ..= (Self::BIAS as u64 + Self::PRECISION as u64 + 4).min(max_biased);
    (
      any::<bool>(),
      prop_oneof![3 => near_one, 1 => 0 ..= max_biased],
      0 ..= Self::FRAC_MASK,
    ).prop_map(|(sign, biased, frac)| {
      let sign = if sign { Self::SIGN_MASK } else { 0 };
      Self::from_u64(sign | (biased << FRAC) | frac)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_exhaustive() {
    type F = Float<2, 5, u8>;
    assert_eq!(F::cases_exhaustive().count(), 256);
    // Exponent field 0b11 is taken by ∞ and NaN, in both signs.
    assert_eq!(F::cases_exhaustive_finite().count(), 256 - 2 * 32);
    assert_eq!(F::cases_exhaustive().last().map(|x| x.to_bits()), Some(0xff));
  }
}
