//! Injected time source for record timestamps and durations.
//!
//! The service consumes a [`Clock`] from its caller rather than reading the
//! system time directly. The contract is monotonicity: successive `now()`
//! calls never go backwards, which is what keeps history timestamps
//! non-decreasing in insertion order.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Monotonic time source consumed by the service.
///
/// Implementations must be thread-safe and must never return a value earlier
/// than one previously returned.
pub trait Clock: Send + Sync {
    /// Current point in time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock: a wall-clock anchor captured at construction, advanced
/// by a monotonic [`Instant`].
///
/// Readings look like wall-clock time but cannot regress when the system
/// clock is adjusted, so they satisfy the [`Clock`] monotonicity contract.
pub struct MonotonicClock {
    anchor_wall: DateTime<Utc>,
    anchor_instant: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            anchor_wall: Utc::now(),
            anchor_instant: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = self.anchor_instant.elapsed();
        self.anchor_wall
            + ChronoDuration::from_std(elapsed).unwrap_or_else(|_| ChronoDuration::zero())
    }
}

/// Deterministic clock that only moves when told to.
///
/// Intended for tests and simulations: construct it at a known instant,
/// `advance` it between operations, and durations and timestamps come out
/// exact.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Start at the Unix epoch.
    pub fn new() -> Self {
        Self::starting_at(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Start at an explicit point in time.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        ManualClock {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut now = self.now.lock();
        *now = *now + ChronoDuration::from_std(step).unwrap_or_else(|_| ChronoDuration::zero());
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
