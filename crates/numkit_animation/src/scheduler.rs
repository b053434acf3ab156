//! Animation scheduler
//!
//! Keeps track of many independent animation sessions so they can be
//! cancelled individually or all at once. Sessions that ended on their own
//! are forgotten the next time a session starts, so a long-lived scheduler
//! only holds what is still running plus whatever ended since.

use crate::animator::{Animation, AnimationHandle};
use crate::error::Result;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct AnimationId;
}

/// Registry of running animation sessions.
///
/// Dropping the scheduler cancels every session it still holds.
pub struct AnimationScheduler {
    sessions: SlotMap<AnimationId, AnimationHandle>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            sessions: SlotMap::with_key(),
        }
    }

    /// Start `animation` and track it
    pub fn animate<F>(&mut self, animation: Animation, callback: F) -> Result<AnimationId>
    where
        F: FnMut(f64, f64) + Send + 'static,
    {
        let handle = animation.start(callback)?;
        self.prune();
        Ok(self.sessions.insert(handle))
    }

    /// Cancel one session. Returns `false` if the id is unknown or the
    /// session had already ended.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        match self.sessions.remove(id) {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.cancel();
                was_running
            }
            None => false,
        }
    }

    /// Cancel every tracked session
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.sessions.drain() {
            handle.cancel();
        }
    }

    pub fn is_active(&self, id: AnimationId) -> bool {
        self.sessions.get(id).is_some_and(|h| !h.is_finished())
    }

    /// Number of sessions still running; forgets the ones that ended
    pub fn active_count(&mut self) -> usize {
        self.prune();
        self.sessions.len()
    }

    /// Number of sessions held, including ended ones not yet forgotten
    pub fn tracked(&self) -> usize {
        self.sessions.len()
    }

    /// Stop tracking a session and hand back its handle, e.g. to `join` it
    pub fn take(&mut self, id: AnimationId) -> Option<AnimationHandle> {
        self.sessions.remove(id)
    }

    fn prune(&mut self) {
        self.sessions.retain(|_, h| !h.is_finished());
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        if !self.sessions.is_empty() {
            tracing::debug!(
                sessions = self.sessions.len(),
                "scheduler dropped, cancelling sessions"
            );
        }
        self.cancel_all();
    }
}
