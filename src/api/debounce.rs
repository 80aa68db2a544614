use std::time::{Duration, Instant};

use tracing::trace;

/// Default quiet window for keystroke-driven recomputes.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(150);

/// Trailing-edge debounce policy for recompute requests.
///
/// Requests inside one window collapse into a single pending pass whose
/// deadline moves with every new request. The scheduler only tracks timing;
/// the pass itself always reads the latest engine state when it runs.
/// Callers pass `now` explicitly so the policy stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeScheduler {
    window: Duration,
    deadline: Option<Instant>,
    coalesced: usize,
}

impl Default for RecomputeScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

impl RecomputeScheduler {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            coalesced: 0,
        }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Registers a request at `now`, pushing the deadline to `now + window`.
    pub fn request(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.coalesced += 1;
        }
        self.deadline = Some(now + self.window);
        trace!(coalesced = self.coalesced, "recompute requested");
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of requests folded into the pending one.
    #[must_use]
    pub const fn coalesced_count(&self) -> usize {
        self.coalesced
    }

    /// Consumes the pending request if its deadline has passed at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Consumes the pending request regardless of its deadline.
    pub fn take_pending(&mut self) -> bool {
        let pending = self.is_pending();
        self.cancel();
        pending
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
        self.coalesced = 0;
    }
}
