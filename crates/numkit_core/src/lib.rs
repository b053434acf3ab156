//! numkit Core
//!
//! Small, independent numeric utilities:
//!
//! - **Integer math**: GCD, rounding to a multiple, factorial, inclusive ranges
//! - **Primes**: trial-division test and sieve
//! - **Checksums**: Luhn check for card-like numbers
//! - **Equality**: structural deep equality over a closed [`Value`] model
//! - **Randomness**: deterministic seeded generator behind [`RandomSource`]
//! - **Formatting**: thousands-separated numbers
//!
//! # Example
//!
//! ```rust
//! use numkit_core::{format_number, gcd, range, seed_random};
//!
//! assert_eq!(gcd(&[12, 4, 8]), Ok(4));
//! assert_eq!(range(5, 2).collect::<Vec<_>>(), vec![2, 3, 4, 5]);
//! assert_eq!(format_number(100_000_000.0), "100,000,000");
//! assert_eq!(seed_random(13), seed_random(13));
//! ```

pub mod arith;
pub mod error;
pub mod format;
pub mod luhn;
pub mod primes;
pub mod random;
pub mod value;

pub use arith::{factorial, gcd, range, round, round_to};
pub use error::{MathError, Result};
pub use format::format_number;
pub use luhn::luhn_check;
pub use primes::{is_prime, primes_to};
pub use random::{
    random, random_with, seed_random, uuid, uuid_with, RandomSource, Seed, SeededRandom,
};
pub use value::{equals, Value};
