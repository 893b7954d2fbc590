//! Collapse bursts of environment-change events into one re-classification

use std::time::Duration;

/// Quiescence timer for resize-like events
///
/// Every [`note_change`](Self::note_change) restarts the window. [`tick`]
/// reports `true` once, when a full window has passed with no new change.
///
/// [`tick`]: Self::tick
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDebounce {
    delay: Duration,
    remaining: Option<Duration>,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm or re-arm the quiescence window
    pub fn note_change(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `delta`; `true` when the pending window has just elapsed
    pub fn tick(&mut self, delta: Duration) -> bool {
        match self.remaining {
            Some(remaining) if delta >= remaining => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - delta);
                false
            }
            None => false,
        }
    }
}
