//! Clock abstraction for the debounce window.
//!
//! The tracker measures the debounce interval against an injected clock so
//! tests can simulate time passage deterministically and so system clock
//! adjustments cannot widen or collapse the window. `Instant` keeps the
//! measurement monotonic.

use std::time::Instant;

/// Source of monotonic time for the tracker.
pub trait Clock: Send {
    fn now(&self) -> Instant;
}

/// Default clock backed by `Instant::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
