//! Lock-free rate limiting for repeated side effects.
//!
//! A [`RateLimiter`] guards one logical action, for example posting an error report to the
//! bot-log channel. Any number of concurrent callers may ask for permission; within one
//! interval at most one of them is granted. Losing a race is reported as a denial, so the
//! limiter can under-fire under contention but never over-fire.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Stored timestamp meaning "never fired".
const NEVER: i64 = i64::MIN;

/// Shared "last fired" timestamp in seconds since the Unix epoch.
#[derive(Debug)]
pub struct RateLimiter {
    last_fired: AtomicI64,
}

impl RateLimiter {
    pub const fn new() -> Self {
        Self {
            last_fired: AtomicI64::new(NEVER),
        }
    }

    /// Asks for permission to fire now, using the system clock.
    ///
    /// # Arguments
    /// - `interval_secs` - Minimum number of seconds between two grants
    ///
    /// # Returns
    /// - `true` - Caller may perform the guarded action
    /// - `false` - Too soon, or another caller won the race
    pub fn try_fire(&self, interval_secs: u64) -> bool {
        self.try_fire_at(Utc::now().timestamp(), interval_secs)
    }

    /// Asks for permission to fire at `now` seconds since the epoch.
    ///
    /// Reads the stored timestamp once, refuses if fewer than `interval_secs` seconds have
    /// elapsed, then tries to compare-and-swap the stored value to `now`. The swap only
    /// succeeds for the caller that observed the current value, so concurrent callers
    /// cannot both be granted. The stored timestamp only ever moves forward.
    ///
    /// # Arguments
    /// - `now` - Current time in seconds since the epoch
    /// - `interval_secs` - Minimum number of seconds between two grants
    ///
    /// # Returns
    /// - `true` - This call advanced the timestamp and may fire
    /// - `false` - Too soon, or another caller advanced the timestamp first
    pub fn try_fire_at(&self, now: i64, interval_secs: u64) -> bool {
        let interval = i64::try_from(interval_secs).unwrap_or(i64::MAX);
        let last = self.last_fired.load(Ordering::Acquire);

        if last != NEVER && now.saturating_sub(last) <= interval {
            return false;
        }

        self.last_fired
            .compare_exchange(last, now, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Timestamp of the last grant, if there has been one.
    #[cfg(test)]
    pub fn last_fired(&self) -> Option<i64> {
        match self.last_fired.load(Ordering::Acquire) {
            NEVER => None,
            last => Some(last),
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
