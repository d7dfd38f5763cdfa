//! Judge-server reachability state and retry schedule.
//!
//! DESIGN
//! ======
//! One check at startup. A failed check moves to `Offline` and schedules the
//! next attempt with exponential backoff; the first success settles on
//! `Online` and stops checking. The banner's retry button and the browser's
//! `online` event trigger an immediate extra check.

#[cfg(test)]
#[path = "connectivity_test.rs"]
mod connectivity_test;

use std::time::Duration;

pub const BACKOFF_BASE: Duration = Duration::from_secs(1);
pub const BACKOFF_CAP: Duration = Duration::from_secs(30);

/// Last known reachability of the judge API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// First check still in flight.
    #[default]
    Checking,
    Online,
    /// Last check failed; `retry_in` until the next automatic attempt.
    Offline { attempt: u32, retry_in: Duration },
}

impl Connectivity {
    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Whether the app shell should stay behind the connecting screen.
    #[must_use]
    pub fn is_checking(self) -> bool {
        matches!(self, Self::Checking)
    }
}

/// Doubling delay schedule capped at a maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backoff {
    base: Duration,
    cap: Duration,
    attempt: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(BACKOFF_BASE, BACKOFF_CAP)
    }
}

impl Backoff {
    #[must_use]
    pub const fn new(base: Duration, cap: Duration) -> Self {
        Self { base, cap, attempt: 0 }
    }

    /// Failures recorded so far.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Record a failure and return how long to wait before the next try.
    pub fn next_delay(&mut self) -> Duration {
        let factor = 1_u32.checked_shl(self.attempt).unwrap_or(u32::MAX);
        self.attempt = self.attempt.saturating_add(1);
        self.base.saturating_mul(factor).min(self.cap)
    }

    /// Record a failure and produce the matching `Offline` state.
    pub fn fail(&mut self) -> Connectivity {
        let retry_in = self.next_delay();
        Connectivity::Offline { attempt: self.attempt, retry_in }
    }
}
