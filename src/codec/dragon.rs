//! Shortest digits with Dragon4 (Steele & White, with the improvements by Burger & Dybvig):
//! slow, using bignums, but always right.

use super::Decoded;
use super::bignum::Big;
use alloc::vec::Vec;

/// Increase the last digit of `buf` and propagate the carry. If all digits are 9s, they become
/// `1000…` and `true` is returned: the exponent has to go up by one.
fn round_up(buf: &mut [u8]) -> bool {
  match buf.iter().rposition(|&d| d != 9) {
    Some(i) => {
      buf[i] += 1;
      buf[i + 1 ..].fill(0);
      false
    }
    None => {
      if let Some((first, rest)) = buf.split_first_mut() {
        *first = 1;
        rest.fill(0);
      }
      true
    }
  }
}

/// Write the shortest digits of `d` to `buf` and return `k`, such that `d = 0.d₁d₂… × 10^k`.
pub(crate) fn format_shortest(d: &Decoded, buf: &mut Vec<u8>) -> i32 {
  // The value and the distances to the boundaries (halfway to the neighbouring floats) as
  // integers times `2^exp`. The lower boundary is closer at a power of two.
  let (mant, minus, plus, exp) = if d.lower_closer {
    (d.sig << 2, 1, 2, d.q - 2)
  } else {
    (d.sig << 1, 1, 1, d.q - 1)
  };
  // Round-to-even reads the boundaries themselves back as `d` iff `sig` is even.
  let inclusive = d.sig & 1 == 0;

  // The digits are generated from `r / s`, with the boundaries at `r - mm` and `r + mp`.
  let mut r = Big::from_u64(mant);
  let mut mm = Big::from_u64(minus);
  let mut mp = Big::from_u64(plus);
  let mut s = Big::from_u64(1);
  if exp >= 0 {
    r.mul_pow2(exp.unsigned_abs());
    mm.mul_pow2(exp.unsigned_abs());
    mp.mul_pow2(exp.unsigned_abs());
  } else {
    s.mul_pow2(exp.unsigned_abs());
  }

  // Estimate `k` from the bit length of the upper boundary, then scale so that `r / s` is about
  // `0.d₁d₂…`. The estimate is at most one too small, which the fixups below correct.
  let nbits = 64 - (mant + plus).leading_zeros() as i32;
  let mut k = ((nbits - 1 + exp) * 1233 >> 12) + 1;
  if k >= 0 {
    s.mul_pow10(k.unsigned_abs());
  } else {
    r.mul_pow10(k.unsigned_abs());
    mm.mul_pow10(k.unsigned_abs());
    mp.mul_pow10(k.unsigned_abs());
  }

  // Whether the upper boundary `r + mp` reaches `s` (i.e. the next digit up would be a 10).
  let reaches = |sum: Big, s: &Big| if inclusive { sum >= *s } else { sum > *s };
  while reaches(r.add(&mp), &s) {
    s.mul_10();
    k += 1;
  }
  loop {
    let mut sum = r.add(&mp);
    sum.mul_10();
    if reaches(sum, &s) {
      break
    }
    r.mul_10();
    mm.mul_10();
    mp.mul_10();
    k -= 1;
  }

  // Generate digits until either boundary is within reach.
  loop {
    r.mul_10();
    mm.mul_10();
    mp.mul_10();
    let digit = r.div_rem_small(&s);
    let low = if inclusive { r <= mm } else { r < mm };
    let high = reaches(r.add(&mp), &s);
    buf.push(digit as u8);
    let round = match (low, high) {
      (false, false) => continue,
      (true, false) => false,
      (false, true) => true,
      // Both the digit and the next one up read back as `d`; pick the closer (up on ties).
      (true, true) => {
        let mut twice = r.clone();
        twice.mul_pow2(1);
        twice >= s
      }
    };
    if round && round_up(buf) {
      k += 1;
    }
    return k
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dragon64(x: f64) -> (Vec<u8>, i32) {
    let mut buf = Vec::new();
    let k = format_shortest(&Decoded::of(crate::b64::from(x)), &mut buf);
    (buf, k)
  }

  #[test]
  fn round_up_carries() {
    let mut a = [1, 2, 9];
    assert!(!round_up(&mut a));
    assert_eq!(a, [1, 3, 0]);
    let mut b = [9, 9];
    assert!(round_up(&mut b));
    assert_eq!(b, [1, 0]);
  }

  #[test]
  fn simple() {
    assert_eq!(dragon64(1.0), (vec![1], 1));
    assert_eq!(dragon64(0.3), (vec![3], 0));
    assert_eq!(dragon64(1e23), (vec![1], 24));
    assert_eq!(dragon64(5e-324), (vec![5], -323));
    assert_eq!(dragon64(f64::MAX), (vec![1, 7, 9, 7, 6, 9, 3, 1, 3, 4, 8, 6, 2, 3, 1, 5, 7], 309));
    assert_eq!(dragon64(2f64.powi(-1022)), (vec![2, 2, 2, 5, 0, 7, 3, 8, 5, 8, 5, 0, 7, 2, 0, 1, 4], -307));
  }

  #[test]
  fn matches_grisu() {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    for _ in 0 .. 10_000 {
      // xorshift
      state ^= state << 13;
      state ^= state >> 7;
      state ^= state << 17;
      let x = crate::b64::from_bits(state >> 1);
      if !x.is_finite() || x.is_zero() {
        continue
      }
      let d = Decoded::of(x);
      let mut fast = Vec::new();
      if let Some(k) = super::super::grisu::format_shortest(&d, &mut fast) {
        let mut slow = Vec::new();
        assert_eq!(format_shortest(&d, &mut slow), k, "{state:#x}");
        assert_eq!(slow, fast, "{state:#x}");
      }
    }
  }
}
