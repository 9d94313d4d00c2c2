//! Rate limiting for the per-frame enemy update.

use serde::{Deserialize, Serialize};

/// Lets a call through at most once per fixed interval.
///
/// Calls arriving inside the interval are dropped, never queued, so a host
/// rendering at any frame rate drives at most `1000 / interval_ms` ticks per
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiter {
    /// Minimum spacing between executions (milliseconds)
    interval_ms: u64,
    /// Timestamp of the last execution that was let through
    last_run_ms: Option<u64>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum interval.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
        }
    }

    /// Returns whether a call at `now_ms` may run, recording it if so.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        match self.last_run_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => false,
            _ => {
                self.last_run_ms = Some(now_ms);
                true
            },
        }
    }

    /// Timestamp of the last call that ran.
    #[must_use]
    pub const fn last_run_ms(&self) -> Option<u64> {
        self.last_run_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_runs() {
        let mut limiter = RateLimiter::new(10);
        assert!(limiter.try_acquire(0));
        assert_eq!(limiter.last_run_ms(), Some(0));
    }

    #[test]
    fn test_calls_inside_interval_are_dropped() {
        let mut limiter = RateLimiter::new(10);
        assert!(limiter.try_acquire(100));
        assert!(!limiter.try_acquire(101));
        assert!(!limiter.try_acquire(109));
        assert!(limiter.try_acquire(110));
        assert_eq!(limiter.last_run_ms(), Some(110));
    }

    #[test]
    fn test_frame_rate_independent() {
        // 1000 calls one millisecond apart collapse to 100 runs.
        let mut limiter = RateLimiter::new(10);
        let runs = (0..1000u64).filter(|t| limiter.try_acquire(*t)).count();
        assert_eq!(runs, 100);
    }

    #[test]
    fn test_clock_going_backwards_is_dropped() {
        let mut limiter = RateLimiter::new(10);
        assert!(limiter.try_acquire(50));
        assert!(!limiter.try_acquire(45));
    }
}
