//! Finite field arithmetic.
//!
//! The protocol works modulo a prime chosen at runtime, so the field is a
//! small value type carrying its modulus rather than a compile-time type.
//! Elements are plain `u64` words; every operation reduces its operands
//! before combining them, so callers may pass unreduced values.

use crate::is_prime;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A finite field defined by an odd prime modulus.
///
/// The `Field` type stores the modulus `p` and provides elementary
/// arithmetic over the integers modulo `p`.  It does not perform primality
/// testing; moduli are expected to come from [`next_prime`](crate::next_prime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    p: u64,
}

impl Field {
    /// Creates a new finite field with the given modulus.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is less than 3 or even.  Only odd primes are
    /// supported.
    pub fn new(p: u64) -> Self {
        assert!(p >= 3 && p % 2 == 1, "p must be an odd prime >= 3");
        Field { p }
    }

    /// Creates the field modulo `p`, or `None` unless `p` is an odd prime.
    pub fn try_new(p: u64) -> Option<Self> {
        (p >= 3 && is_prime(p)).then_some(Field { p })
    }

    /// Returns the modulus of the field.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Reduces an arbitrary word into `[0, p)`.
    #[inline]
    pub fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    /// Reduces a signed big integer into `[0, p)`.
    ///
    /// Negative integers map to their non-negative representative, so
    /// `-1` becomes `p - 1`.
    pub fn reduce_bigint(&self, value: &BigInt) -> u64 {
        let modulus = BigInt::from(self.p);
        let mut r = value % &modulus;
        if r.sign() == Sign::Minus {
            r += &modulus;
        }
        // `r` lies in [0, p) and p fits in a u64.
        r.to_u64().unwrap_or_default()
    }

    /// Adds two field elements.
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let (s, carry) = (a % self.p).overflowing_add(b % self.p);
        if carry || s >= self.p {
            s.wrapping_sub(self.p)
        } else {
            s
        }
    }

    /// Subtracts `b` from `a`.
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let a = a % self.p;
        let b = b % self.p;
        if a >= b {
            a - b
        } else {
            self.p - (b - a)
        }
    }

    /// Negates a field element.
    #[inline]
    pub fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    /// Multiplies two field elements.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        let a = a % self.p;
        let b = b % self.p;
        ((a as u128 * b as u128) % self.p as u128) as u64
    }

    /// Exponentiates `a` by `e` modulo `p`.
    #[inline]
    pub fn pow(&self, mut a: u64, mut e: u64) -> u64 {
        a %= self.p;
        let mut result = 1u64 % self.p;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, a);
            }
            a = self.mul(a, a);
            e >>= 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let field = Field::new(101);
        assert_eq!(field.add(100, 5), 4);
        assert_eq!(field.sub(3, 5), 99);
        assert_eq!(field.neg(1), 100);
        assert_eq!(field.neg(0), 0);
        assert_eq!(field.mul(50, 4), 99);
        assert_eq!(field.pow(2, 10), 1024 % 101);
    }

    #[test]
    fn test_reduce_bigint_handles_sign() {
        let field = Field::new(37);
        assert_eq!(field.reduce_bigint(&BigInt::from(-1)), 36);
        assert_eq!(field.reduce_bigint(&BigInt::from(74)), 0);
        assert_eq!(field.reduce_bigint(&BigInt::from(-75)), 36);
        let big = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
        let expected = field.mul(u64::MAX, u64::MAX);
        assert_eq!(field.reduce_bigint(&big), expected);
    }

    #[test]
    fn test_add_near_word_boundary() {
        // Largest prime below 2^64.
        let p = u64::MAX - 58;
        let field = Field::new(p);
        assert_eq!(field.add(p - 1, p - 1), p - 2);
        assert_eq!(field.add(p - 1, 1), 0);
        assert_eq!(field.sub(0, p - 1), 1);
        assert_eq!(field.add(u64::MAX, u64::MAX), 116);
        assert_eq!(field.mul(p - 1, p - 1), 1);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Field::try_new(101), Some(Field::new(101)));
        assert_eq!(Field::try_new(2), None);
        assert_eq!(Field::try_new(9), None);
        assert_eq!(Field::try_new(0), None);
    }

    #[test]
    #[should_panic(expected = "odd prime")]
    fn test_rejects_even_modulus() {
        let _ = Field::new(4);
    }
}
