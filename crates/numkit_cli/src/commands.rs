//! Subcommand definitions and their evaluation

use anyhow::{Context, Result};
use clap::Subcommand;
use numkit_animation::{Animation, AnimationOutcome, Easing};
use numkit_core::{RandomSource, Seed, SeededRandom, Value};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::NumkitConfig;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greatest common divisor of the numbers
    Gcd {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Round to the nearest multiple (default 1)
    Round {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(default_value_t = 1.0)]
        multiple: f64,
    },
    /// Deep equality of two JSON values
    Equals { a: String, b: String },
    /// Test a number for primality
    IsPrime {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// List the primes up to a number
    PrimesTo { number: u64 },
    /// Factorial of a number
    Factorial {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Luhn checksum of a card-like number
    Luhn { number: String },
    /// Inclusive integer range (bounds may come in either order)
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(default_value_t = 0, allow_negative_numbers = true)]
        end: i64,
    },
    /// UUID-shaped id derived from a seed (number or text)
    Uuid {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Random number between min and max, inclusive
    Random {
        #[arg(allow_negative_numbers = true)]
        max: f64,
        #[arg(allow_negative_numbers = true)]
        min: f64,
        /// Keep the fractional part
        #[arg(long)]
        no_round: bool,
        /// Seed in [0, 1)
        #[arg(long)]
        seed: Option<f64>,
    },
    /// One deterministic step of the seeded generator
    SeedRandom {
        #[arg(allow_negative_numbers = true)]
        seed: i64,
    },
    /// Format a number with thousands separators
    Format {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },
    /// Evaluate an easing curve at t
    Ease {
        curve: String,
        #[arg(allow_negative_numbers = true)]
        t: f64,
    },
    /// List the easing curves
    Curves,
    /// Print the effective configuration
    Config,
    /// Animate a value and print every sample
    Animate {
        #[arg(allow_negative_numbers = true)]
        start: f64,
        #[arg(allow_negative_numbers = true)]
        end: f64,
        /// Duration in milliseconds
        duration_ms: u64,
        /// Sampling interval in milliseconds
        #[arg(long)]
        interval: Option<u64>,
        /// Easing curve name
        #[arg(long)]
        easing: Option<String>,
    },
}

/// Random source for commands that need one.
///
/// This is the only place ambient entropy enters: without a configured seed
/// the clock provides one.
pub fn random_source(config: &NumkitConfig) -> SeededRandom {
    let seed = config.random.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as i64)
            .unwrap_or_default()
    });
    tracing::debug!(seed, "seeded random source");
    SeededRandom::new(seed)
}

/// Run one command, printing its result
pub fn run(command: Command, config: &NumkitConfig) -> Result<()> {
    match command {
        Command::Animate {
            start,
            end,
            duration_ms,
            interval,
            easing,
        } => {
            let interval = interval
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.animate.interval());
            let easing = match easing {
                Some(name) => name.parse()?,
                None => config.animate.easing()?,
            };
            let animation = Animation::new(start, end, Duration::from_millis(duration_ms))
                .interval(interval)
                .easing(easing);
            animate(animation)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        other => {
            let mut rng = random_source(config);
            println!("{}", evaluate(&other, &mut rng)?);
            Ok(())
        }
    }
}

fn animate(animation: Animation) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start the timer runtime")?;

    let outcome = runtime.block_on(async move {
        let handle = animation.start(|value, progress| {
            println!("{value}\t{progress}");
        })?;
        anyhow::Ok(handle.join().await)
    })?;

    tracing::debug!(?outcome, "animation finished");
    if outcome == AnimationOutcome::Cancelled {
        anyhow::bail!("animation was cancelled");
    }
    Ok(())
}

/// Evaluate every command except `animate` to its printed form
pub fn evaluate(command: &Command, rng: &mut impl RandomSource) -> Result<String> {
    let out = match command {
        Command::Gcd { numbers } => numkit_core::gcd(numbers)?.to_string(),
        Command::Round { number, multiple } => {
            numkit_core::round_to(*number, *multiple)?.to_string()
        }
        Command::Equals { a, b } => {
            let a = parse_json(a)?;
            let b = parse_json(b)?;
            numkit_core::equals(&a, &b).to_string()
        }
        Command::IsPrime { number } => numkit_core::is_prime(*number).to_string(),
        Command::PrimesTo { number } => join(numkit_core::primes_to(*number)?),
        Command::Factorial { number } => numkit_core::factorial(*number)?.to_string(),
        Command::Luhn { number } => numkit_core::luhn_check(number).to_string(),
        Command::Range { start, end } => join(numkit_core::range(*start, *end)),
        Command::Uuid { seed } => match seed {
            Some(seed) => numkit_core::uuid(parse_seed(seed)),
            None => numkit_core::uuid_with(rng),
        },
        Command::Random {
            max,
            min,
            no_round,
            seed,
        } => {
            let whole = !no_round;
            let n = match seed {
                Some(seed) => numkit_core::random(*max, *min, whole, *seed),
                None => numkit_core::random_with(*max, *min, whole, rng),
            };
            n.to_string()
        }
        Command::SeedRandom { seed } => numkit_core::seed_random(*seed).to_string(),
        Command::Format { number } => numkit_core::format_number(*number),
        Command::Ease { curve, t } => curve.parse::<Easing>()?.apply(*t).to_string(),
        Command::Curves => Easing::ALL
            .iter()
            .map(Easing::name)
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Animate { .. } | Command::Config => {
            anyhow::bail!("this command is handled by run()")
        }
    };
    Ok(out)
}

fn parse_json(text: &str) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("Not valid JSON: {text}"))?;
    Ok(Value::from(json))
}

fn parse_seed(text: &str) -> Seed {
    match text.parse::<f64>() {
        Ok(n) => Seed::Number(n),
        Err(_) => Seed::Text(text.to_string()),
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
