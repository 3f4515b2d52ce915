// SPDX-License-Identifier: MPL-2.0
//! Clock-free countdown value.
//!
//! Every query takes the current instant from the caller, so the update loop
//! feeds it the subscription tick and tests feed it fabricated instants.
//! Nothing here ever reads the wall clock.

use std::time::{Duration, Instant};

/// A fixed deadline measured from a start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started: Instant,
    duration: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    /// Time left before expiry; zero once the deadline has passed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    /// Remaining time as a fraction of the full duration, from `1.0` down
    /// to `0.0`.
    ///
    /// A zero-duration countdown reports `0.0` rather than dividing by zero.
    #[must_use]
    pub fn fraction_remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}
