//! Integer arithmetic helpers

use crate::error::{MathError, Result};
use std::ops::RangeInclusive;

/// Largest `n` whose factorial fits in a `u128`
const MAX_FACTORIAL: i64 = 34;

/// Greatest common divisor of every number in `values`.
///
/// Signs are ignored and zeros are neutral (`gcd(&[0, 6]) == 6`), so the
/// result is only zero when every input is zero.
///
/// ```rust
/// use numkit_core::gcd;
///
/// assert_eq!(gcd(&[12, 4, 8]), Ok(4));
/// assert_eq!(gcd(&[-9, 6]), Ok(3));
/// ```
pub fn gcd(values: &[i64]) -> Result<u64> {
    let (first, rest) = values
        .split_first()
        .ok_or(MathError::MissingArgument("gcd needs at least one number"))?;

    Ok(rest
        .iter()
        .fold(first.unsigned_abs(), |acc, v| gcd_pair(acc, v.unsigned_abs())))
}

fn gcd_pair(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Round to the nearest integer, halves going toward positive infinity.
///
/// `round(2.5) == 3.0` and `round(-2.5) == -2.0`.
pub fn round(number: f64) -> f64 {
    let floor = number.floor();
    if number - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round `number` to the nearest multiple of `multiple`.
///
/// ```rust
/// use numkit_core::round_to;
///
/// assert_eq!(round_to(14.0, 10.0), Ok(10.0));
/// assert_eq!(round_to(15.0, 10.0), Ok(20.0));
/// ```
pub fn round_to(number: f64, multiple: f64) -> Result<f64> {
    if multiple == 0.0 || !multiple.is_finite() {
        return Err(MathError::InvalidArgument(format!(
            "cannot round to a multiple of {multiple}"
        )));
    }
    Ok(round(number / multiple) * multiple)
}

/// `n!` for non-negative `n`.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(MathError::InvalidArgument(
            "negative numbers have no factorial".to_string(),
        ));
    }
    if n > MAX_FACTORIAL {
        return Err(MathError::Overflow(format!("{n}! does not fit in 128 bits")));
    }

    Ok((2..=n as u128).product())
}

/// Every integer between `start` and `end`, both inclusive.
///
/// The bounds are swapped when `start > end`, so `range(5, 2)` and
/// `range(2, 5)` yield the same sequence.
pub fn range(start: i64, end: i64) -> RangeInclusive<i64> {
    if start > end {
        end..=start
    } else {
        start..=end
    }
}
