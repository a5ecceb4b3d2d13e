//! Booking strategy timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for the lock-acquisition strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Bounded wait for the timed strategy, in milliseconds.
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
    /// Artificial delay the timed strategy holds the lock through after
    /// booking, in milliseconds.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    /// Artificial delay the cancellable strategy holds the lock through
    /// after booking, in milliseconds. Deliberately pathological.
    #[serde(default = "default_long_hold_ms")]
    pub long_hold_ms: u64,
}

impl BookingConfig {
    /// Bounded wait for the timed strategy.
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }

    /// Post-booking hold for the timed strategy.
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Post-booking hold for the cancellable strategy.
    pub fn long_hold(&self) -> Duration {
        Duration::from_millis(self.long_hold_ms)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            lock_timeout_ms: default_lock_timeout_ms(),
            hold_ms: default_hold_ms(),
            long_hold_ms: default_long_hold_ms(),
        }
    }
}

fn default_lock_timeout_ms() -> u64 {
    10
}

fn default_hold_ms() -> u64 {
    100
}

fn default_long_hold_ms() -> u64 {
    1_000_000
}
