//! Time-driven value animation
//!
//! An [`Animation`] moves a number from `start` to `end` over a fixed
//! duration. Each session runs as one tokio task that owns both of its timers:
//! a recurring tick that samples the eased value, and a deadline that delivers
//! the exact final value once and stops the session.

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};

/// Sampling period used when none is given
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(20);

/// One sampled point of an animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    /// Eased progress; 1.0 on the final sample
    pub progress: f64,
}

/// Pure description of an animated value, sampled by elapsed time
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            easing: Easing::Linear,
        }
    }

    /// Sample the tween `elapsed` after it started.
    ///
    /// Raw progress is not clamped, so a sample taken past the duration
    /// extrapolates through the easing curve. A zero-length tween is
    /// always at its final sample.
    pub fn sample(&self, elapsed: Duration) -> Sample {
        if self.duration.is_zero() {
            return self.final_sample();
        }
        let raw = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let progress = self.easing.apply(raw);
        Sample {
            value: progress * (self.end - self.start) + self.start,
            progress,
        }
    }

    /// The authoritative last sample
    pub fn final_sample(&self) -> Sample {
        Sample {
            value: self.end,
            progress: 1.0,
        }
    }
}

/// Builder for an animation session
#[derive(Clone, Copy, Debug)]
pub struct Animation {
    tween: Tween,
    interval: Duration,
}

impl Animation {
    /// Animate from `start` to `end` over `duration`, sampled every 20ms with
    /// linear easing
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            tween: Tween::new(start, end, duration),
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Set the sampling period
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.tween.easing = easing;
        self
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn sampling_interval(&self) -> Duration {
        self.interval
    }

    /// Start the session on the current tokio runtime.
    ///
    /// `callback` receives `(value, progress)` on every tick and exactly once
    /// more with `(end, 1.0)` when the duration has elapsed. The start time is
    /// taken when this is called.
    pub fn start<F>(self, callback: F) -> Result<AnimationHandle>
    where
        F: FnMut(f64, f64) + Send + 'static,
    {
        if self.interval.is_zero() {
            return Err(AnimationError::ZeroInterval);
        }
        let runtime = Handle::try_current().map_err(|_| AnimationError::NoRuntime)?;

        let started = Instant::now();
        tracing::debug!(
            start = self.tween.start,
            end = self.tween.end,
            duration_ms = self.tween.duration.as_millis() as u64,
            interval_ms = self.interval.as_millis() as u64,
            easing = self.tween.easing.name(),
            "animation started"
        );

        let task = runtime.spawn(run(self.tween, self.interval, started, callback));
        Ok(AnimationHandle { task })
    }
}

async fn run<F>(tween: Tween, interval: Duration, started: Instant, mut callback: F)
where
    F: FnMut(f64, f64) + Send + 'static,
{
    let deadline = sleep_until(started + tween.duration);
    tokio::pin!(deadline);

    let mut ticker = interval_at(started + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // The deadline wins over a tick that is due at the same instant
            biased;
            _ = &mut deadline => break,
            _ = ticker.tick() => {
                let sample = tween.sample(started.elapsed());
                tracing::trace!(value = sample.value, progress = sample.progress, "animation tick");
                callback(sample.value, sample.progress);
            }
        }
    }
    drop(ticker);

    let last = tween.final_sample();
    callback(last.value, last.progress);
    tracing::debug!(end = tween.end, "animation completed");
}

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// The final `(end, 1.0)` sample was delivered
    Completed,
    /// Cancelled before the final sample
    Cancelled,
}

/// Owner of a running animation session.
///
/// Dropping the handle detaches the session; it keeps running to its
/// deadline. Use [`AnimationHandle::cancel`] to stop it early.
#[derive(Debug)]
pub struct AnimationHandle {
    task: JoinHandle<()>,
}

impl AnimationHandle {
    /// Stop both timers and suppress the final callback.
    ///
    /// Safe to call any number of times, and after the session has ended.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            tracing::debug!("animation cancelled");
        }
        self.task.abort();
    }

    /// Whether the session has ended, by completion, cancellation or a
    /// panicking callback
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the session to end.
    ///
    /// A panic raised by the callback ends the session and is resumed here.
    pub async fn join(self) -> AnimationOutcome {
        match self.task.await {
            Ok(()) => AnimationOutcome::Completed,
            Err(err) if err.is_cancelled() => AnimationOutcome::Cancelled,
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}
