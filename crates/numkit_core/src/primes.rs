//! Prime numbers

use crate::error::{MathError, Result};

/// Trial division up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// All primes less than or equal to `n`, ascending.
///
/// Fails with [`MathError::Overflow`] when the sieve for `n` cannot be
/// allocated.
pub fn primes_to(n: u64) -> Result<Vec<u64>> {
    if n < 2 {
        return Ok(Vec::new());
    }

    let too_large = || MathError::Overflow(format!("cannot sieve up to {n}"));
    let limit = usize::try_from(n).map_err(|_| too_large())?;
    let len = limit.checked_add(1).ok_or_else(too_large)?;

    let mut composite = Vec::new();
    composite.try_reserve_exact(len).map_err(|_| too_large())?;
    composite.resize(len, false);

    let mut i = 2;
    while i <= limit / i {
        if !composite[i] {
            for multiple in (i * i..=limit).step_by(i) {
                composite[multiple] = true;
            }
        }
        i += 1;
    }

    Ok((2..=limit)
        .filter(|&k| !composite[k])
        .map(|k| k as u64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(11));
        assert!(is_prime(7919));
        assert!(!is_prime(10));
        assert!(!is_prime(49));
    }

    #[test]
    fn test_nothing_below_two_is_prime() {
        for n in [-7, -1, 0, 1] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_primes_to() {
        assert_eq!(primes_to(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(primes_to(13).unwrap(), vec![2, 3, 5, 7, 11, 13]);
        assert!(primes_to(1).unwrap().is_empty());
        assert_eq!(primes_to(2).unwrap(), vec![2]);
    }

    #[test]
    fn test_primes_to_rejects_unsieveable_limit() {
        for n in [u64::MAX, u64::MAX - 1] {
            assert!(
                matches!(primes_to(n), Err(MathError::Overflow(_))),
                "{n} should not be sieved"
            );
        }
    }

    #[test]
    fn test_sieve_agrees_with_trial_division() {
        let sieved = primes_to(500).unwrap();
        let trial: Vec<u64> = (0..=500).filter(|&n| is_prime(n as i64)).collect();
        assert_eq!(sieved, trial);
    }
}
