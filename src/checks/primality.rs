//! Deterministic primality by 6k±1 trial division.

/// Whether `n` is prime.
///
/// Exact for every `u64`; no probabilistic shortcuts. Folded key segments
/// are below 2^24, so at most ~700 candidate divisor pairs are tried.
pub fn is_prime(n: u64) -> bool {
    if n <= 3 {
        return n > 1;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    // i <= n / i avoids overflowing i * i near u64::MAX.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_prime_naive(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_boundaries() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
    }

    #[test]
    fn test_squares_of_primes() {
        for p in [5u64, 7, 11, 13, 4093, 4091] {
            assert!(!is_prime(p * p), "{} squared is composite", p);
        }
    }

    #[test]
    fn test_known_values() {
        assert!(is_prime(97));
        assert!(is_prime(262147));
        assert!(is_prime(16777213));
        assert!(!is_prime(16777215));
        assert!(!is_prime(266305));
    }

    #[test]
    fn test_matches_sieve_below_2_pow_16() {
        const LIMIT: usize = 1 << 16;
        let mut sieve = vec![true; LIMIT];
        sieve[0] = false;
        sieve[1] = false;
        let mut i = 2;
        while i * i < LIMIT {
            if sieve[i] {
                let mut j = i * i;
                while j < LIMIT {
                    sieve[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        for (n, expected) in sieve.iter().enumerate() {
            assert_eq!(is_prime(n as u64), *expected, "mismatch at {}", n);
        }
    }

    #[test]
    fn test_large_prime_does_not_overflow() {
        // Largest prime below 2^32.
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_291 * 5));
        assert!(!is_prime(u64::MAX));
    }

    proptest! {
        #[test]
        fn prop_matches_trial_division_below_2_pow_24(n in 0u64..(1 << 24)) {
            prop_assert_eq!(is_prime(n), is_prime_naive(n));
        }
    }
}
