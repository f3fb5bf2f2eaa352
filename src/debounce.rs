//! Tick-driven debouncing for scroll requests.
//!
//! The renderer runs on a synchronous, single-threaded hook pipeline, so the
//! debouncer keeps no timer thread: it holds one cancellable pending slot and
//! the host advances it with its own monotonic tick counter.

struct Pending<T> {
    deadline: u64,
    value: T,
}

/// Coalesces rapid repeated triggers into a single delayed value.
///
/// Each `trigger` cancels any pending value and reschedules the new one at
/// `now + delay`; `poll` fires the pending value once its deadline has passed.
/// Only the last value triggered within a window ever fires.
pub struct Debouncer<T> {
    delay: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: u64) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Cancel-and-reschedule: replaces any pending value with `value`,
    /// due at `now + delay`.
    pub fn trigger(&mut self, now: u64, value: T) {
        self.pending = Some(Pending {
            deadline: now + self.delay,
            value,
        });
    }

    /// Fires the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
