//! numkit Animation
//!
//! Easing curves and a timer-driven value animator.
//!
//! # Features
//!
//! - **Easing catalog**: 31 named curves (sine, power, expo, circ, back,
//!   elastic, bounce) as free functions and as the [`Easing`] enum
//! - **Sessions**: drive a value from `start` to `end`, sampled on an
//!   interval, finishing with one exact `(end, 1.0)` sample
//! - **Cancellation**: one call stops both timers of a session
//!
//! # Example
//!
//! ```rust
//! use numkit_animation::Easing;
//!
//! let eased = Easing::EaseInOutQuad.apply(0.3);
//! assert!((eased - 0.18).abs() < 1e-12);
//! assert_eq!("easeOutBounce".parse::<Easing>().unwrap().apply(1.0), 1.0);
//! ```

pub mod animator;
pub mod easing;
pub mod error;
pub mod scheduler;

pub use animator::{
    Animation, AnimationHandle, AnimationOutcome, Sample, Tween, DEFAULT_INTERVAL,
};
pub use easing::{Easing, UnknownEasing};
pub use error::{AnimationError, Result};
pub use scheduler::{AnimationId, AnimationScheduler};
