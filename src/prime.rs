//! Prime search for choosing the protocol field.
//!
//! Primality is decided with a deterministic Miller–Rabin test whose witness
//! set is known to be exact for every 64-bit integer.

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut a: u64, mut e: u64, m: u64) -> u64 {
    let mut result = 1u64 % m;
    a %= m;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_mod(result, a, m);
        }
        a = mul_mod(a, a, m);
        e >>= 1;
    }
    result
}

/// Returns `true` if `n` is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &w in &WITNESSES {
        if n == w {
            return true;
        }
        if n % w == 0 {
            return false;
        }
    }
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }
    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Returns the least prime `>= lower_bound`, or `None` if no such prime
/// fits in a `u64`.
pub fn next_prime(lower_bound: u64) -> Option<u64> {
    if lower_bound <= 2 {
        return Some(2);
    }
    let mut candidate = lower_bound | 1;
    loop {
        if is_prime(candidate) {
            return Some(candidate);
        }
        candidate = candidate.checked_add(2)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0), Some(2));
        assert_eq!(next_prime(3), Some(3));
        assert_eq!(next_prime(32), Some(37));
        assert_eq!(next_prime(38), Some(41));
        assert_eq!(next_prime(1 << 32), Some(4_294_967_311));
    }

    #[test]
    fn test_large_composites() {
        // Strong pseudoprime to several small bases.
        assert!(!is_prime(3_215_031_751));
        assert!(!is_prime(u64::MAX));
        assert!(is_prime(18_446_744_073_709_551_557));
        assert_eq!(next_prime(18_446_744_073_709_551_558), None);
    }
}
