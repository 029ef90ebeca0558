//! Just enough unsigned bignum arithmetic for the exact paths of the decimal codec.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// An unsigned integer of arbitrary size, as little-endian 32-bit limbs without high zero limbs
/// (so zero has no limbs at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Big(Vec<u32>);

impl Big {
  pub fn from_u64(value: u64) -> Self {
    let mut big = Self(Vec::from([value as u32, (value >> 32) as u32]));
    big.trim();
    big
  }

  fn trim(&mut self) {
    while self.0.last() == Some(&0) {
      self.0.pop();
    }
  }

  pub fn is_zero(&self) -> bool {
    self.0.is_empty()
  }

  /// The number of significant bits.
  pub fn bit_len(&self) -> u32 {
    match self.0.last() {
      Some(top) => 32 * self.0.len() as u32 - top.leading_zeros(),
      None => 0,
    }
  }

  /// `self × factor + addend`.
  pub fn mul_add_small(&mut self, factor: u32, addend: u32) {
    let mut carry = u64::from(addend);
    for limb in &mut self.0 {
      let wide = u64::from(*limb) * u64::from(factor) + carry;
      *limb = wide as u32;
      carry = wide >> 32;
    }
    if carry != 0 {
      self.0.push(carry as u32);
    }
    self.trim();
  }

  /// `self × 10`.
  pub fn mul_10(&mut self) {
    self.mul_add_small(10, 0)
  }

  /// `self × 10^n`.
  pub fn mul_pow10(&mut self, mut n: u32) {
    // 10^9 is the largest power of ten in a limb.
    while n >= 9 {
      self.mul_add_small(1_000_000_000, 0);
      n -= 9;
    }
    if n > 0 {
      self.mul_add_small(10u32.pow(n), 0);
    }
  }

  /// `self × 2^n`.
  pub fn mul_pow2(&mut self, n: u32) {
    if self.is_zero() {
      return
    }
    let (limbs, bits) = ((n / 32) as usize, n % 32);
    if bits != 0 {
      let mut carry = 0;
      for limb in &mut self.0 {
        let wide = (u64::from(*limb) << bits) | carry;
        *limb = wide as u32;
        carry = wide >> 32;
      }
      if carry != 0 {
        self.0.push(carry as u32);
      }
    }
    if limbs > 0 {
      let mut shifted = Vec::with_capacity(limbs + self.0.len());
      shifted.resize(limbs, 0);
      shifted.extend_from_slice(&self.0);
      self.0 = shifted;
    }
  }

  /// `self + other`.
  pub fn add(&self, other: &Self) -> Self {
    let (long, short) = if self.0.len() >= other.0.len() { (self, other) } else { (other, self) };
    let mut sum = Vec::with_capacity(long.0.len() + 1);
    let mut carry = false;
    for (i, &a) in long.0.iter().enumerate() {
      let b = short.0.get(i).copied().unwrap_or(0);
      let (s, c1) = a.overflowing_add(b);
      let (s, c2) = s.overflowing_add(u32::from(carry));
      sum.push(s);
      carry = c1 || c2;
    }
    if carry {
      sum.push(1);
    }
    Self(sum)
  }

  /// `self -= other`; `other` must not be greater than `self`.
  pub fn sub_assign(&mut self, other: &Self) {
    debug_assert!(*self >= *other);
    let mut borrow = false;
    for (i, limb) in self.0.iter_mut().enumerate() {
      let b = other.0.get(i).copied().unwrap_or(0);
      let (d, b1) = limb.overflowing_sub(b);
      let (d, b2) = d.overflowing_sub(u32::from(borrow));
      *limb = d;
      borrow = b1 || b2;
    }
    self.trim();
  }

  /// Subtract `divisor` from `self` as many times as it fits, which must be a small number of
  /// times, and return that number.
  pub fn div_rem_small(&mut self, divisor: &Self) -> u32 {
    let mut quotient = 0;
    while *self >= *divisor {
      self.sub_assign(divisor);
      quotient += 1;
    }
    quotient
  }

  /// Bits `shift ..` of `self`, which must fit a `u128`, and whether any of the bits below
  /// `shift` is nonzero.
  pub fn split_at_bit(&self, shift: u32) -> (u128, bool) {
    debug_assert!(self.bit_len() <= shift + 128);
    let (limbs, bits) = ((shift / 32) as usize, shift % 32);
    let sticky = self.0.iter().take(limbs).any(|&limb| limb != 0)
      || (bits != 0 && self.0.get(limbs).is_some_and(|&limb| limb & ((1 << bits) - 1) != 0));
    let mut value = 0u128;
    for (i, &limb) in self.0.iter().enumerate().skip(limbs) {
      value |= if i == limbs {
        u128::from(limb >> bits)
      } else {
        u128::from(limb).checked_shl(32 * (i - limbs) as u32 - bits).unwrap_or(0)
      };
    }
    (value, sticky)
  }
}

impl PartialOrd for Big {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Big {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.len().cmp(&other.0.len()).then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
  }
}
