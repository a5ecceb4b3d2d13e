//! Booking attempt outcomes.

use serde::{Deserialize, Serialize};

/// Result of one booking attempt.
///
/// Rejections are ordinary values, not errors: the caller decides whether
/// and how to report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    /// All requested seats were committed.
    Booked {
        /// The seat numbers that were booked.
        seats: Vec<u32>,
    },
    /// A requested seat was already taken; nothing was committed.
    Unavailable {
        /// The first unavailable seat found.
        seat: u32,
    },
    /// The bounded lock acquisition expired; nothing was committed and no
    /// guard is held.
    LockTimeout,
    /// Cancellation was requested while waiting for the lock; nothing was
    /// committed and no guard is held.
    Cancelled,
}

impl BookingOutcome {
    /// Whether the attempt committed its seats.
    pub fn is_booked(&self) -> bool {
        matches!(self, Self::Booked { .. })
    }
}
