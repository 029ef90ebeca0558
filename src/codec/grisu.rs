//! Shortest digits with Grisu3: fast, using only 64-bit integers, but it gives up on about 0.5%
//! of inputs, where it can't prove its digits are both shortest and correctly rounded.

use super::Decoded;
use super::diy_float::{cached_power, DiyFp};
use alloc::vec::Vec;

/// The largest power of ten not above `n`, and its exponent plus one (i.e. the number of decimal
/// digits of `n`). For 0, that's `(1, 0)`.
fn biggest_pow10(n: u32) -> (u32, i32) {
  match n.checked_ilog10() {
    Some(digits) => (10u32.pow(digits), digits as i32 + 1),
    None => (1, 0),
  }
}

/// Adjust the last digit of `buf` downwards, which moves the represented value closer to `w`,
/// while that's possible; then check whether the result is provably the closest to `w`.
///
/// All quantities are in units of `2^-(w.e)` scaled by the cached power, as in
/// [`digit_gen`]: `distance_high_w` is from `too_high` down to `w`, `rest` is from `too_high`
/// down to the digits, and `unit` is the uncertainty in each of them.
fn round_weed(
  buf: &mut [u8],
  distance_high_w: u64,
  unsafe_interval: u64,
  mut rest: u64,
  ten_kappa: u64,
  unit: u64,
) -> bool {
  let small = distance_high_w - unit;
  let big = distance_high_w + unit;
  let Some(last) = buf.last_mut() else { return false };

  // Walk down towards `small` (the closest that `w` could be), while staying inside the unsafe
  // interval and getting closer.
  while rest < small
    && unsafe_interval - rest >= ten_kappa
    && (rest + ten_kappa < small || small - rest >= rest + ten_kappa - small)
  {
    *last -= 1;
    rest += ten_kappa;
  }

  // If another step would get us closer to `big` (the furthest `w` could be), we can't tell
  // which of the two is closer to the real `w`.
  if rest < big
    && unsafe_interval - rest >= ten_kappa
    && (rest + ten_kappa < big || big - rest > rest + ten_kappa - big)
  {
    return false
  }

  // And we need to be safely inside the (uncertain) interval of values that read back as `w`.
  unsafe_interval.checked_sub(4 * unit).is_some_and(|limit| 2 * unit <= rest && rest <= limit)
}

/// Generate the digits of a number in the interval `]low, high[` that is as close as possible to
/// `w`; these three must have the same exponent in `ALPHA ..= GAMMA`. Returns `kappa`, such that
/// the digits times `10^kappa` are the result, or `None` if the result can't be guaranteed.
fn digit_gen(low: DiyFp, w: DiyFp, high: DiyFp, buf: &mut Vec<u8>) -> Option<i32> {
  debug_assert!(low.e == w.e && w.e == high.e);
  // `low`, `w`, and `high` are each off by up to one unit; so widen the interval to what
  // *might* read back as `w` (`unsafe_interval`) and generate digits of `too_high` until what's
  // left of it is inside.
  let mut unit = 1u64;
  let too_low = low.f.checked_sub(unit)?;
  let too_high = high.f.checked_add(unit)?;
  let mut unsafe_interval = too_high - too_low;

  let shift = w.e.unsigned_abs();
  let one = 1u64 << shift;
  let mut integrals = (too_high >> shift) as u32;
  let mut fractionals = too_high & (one - 1);
  let (mut divisor, mut kappa) = biggest_pow10(integrals);

  // The integral digits.
  while kappa > 0 {
    buf.push((integrals / divisor) as u8);
    integrals %= divisor;
    kappa -= 1;
    let rest = (u64::from(integrals) << shift) + fractionals;
    if rest < unsafe_interval {
      let ten_kappa = u64::from(divisor) << shift;
      return round_weed(buf, too_high - w.f, unsafe_interval, rest, ten_kappa, unit).then_some(kappa)
    }
    divisor /= 10;
  }

  // The fractional digits. The interval is never empty, so this stops.
  loop {
    fractionals *= 10;
    unit *= 10;
    unsafe_interval *= 10;
    buf.push((fractionals >> shift) as u8);
    fractionals &= one - 1;
    kappa -= 1;
    if fractionals < unsafe_interval {
      return round_weed(buf, (too_high - w.f) * unit, unsafe_interval, fractionals, one, unit).then_some(kappa)
    }
  }
}

/// Write the shortest digits of `d` to `buf` and return `k`, such that `d = 0.d₁d₂… × 10^k`; or
/// `None` if the fast path can't guarantee the result (`buf` then holds junk).
pub(crate) fn format_shortest(d: &Decoded, buf: &mut Vec<u8>) -> Option<i32> {
  let w = DiyFp { f: d.sig, e: d.q }.normalize();

  // The boundaries: halfway to the neighbouring floats. `plus` has one bit more than `sig`, so
  // its exponent comes out as `w`'s once normalised; `minus` is shifted to match.
  let plus = DiyFp { f: (d.sig << 1) + 1, e: d.q - 1 }.normalize();
  let minus = if d.lower_closer {
    DiyFp { f: (d.sig << 2) - 1, e: d.q - 2 }
  } else {
    DiyFp { f: (d.sig << 1) - 1, e: d.q - 1 }
  };
  let minus = DiyFp { f: minus.f << (minus.e - plus.e), e: plus.e };
  debug_assert!(plus.e == w.e);

  let (c, mk) = cached_power(w.e)?;
  let kappa = digit_gen(minus.mul(c), w.mul(c), plus.mul(c), buf)?;
  Some(buf.len() as i32 - mk + kappa)
}
