//! Booking strategy selection and dispatch.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use cinehall_core::{AppError, AppResult};

use crate::outcome::BookingOutcome;
use crate::pool::SeatPool;
use crate::selection::SeatSelection;

/// Admission discipline wrapped around one booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStrategy {
    /// Whole-sequence exclusive lock; concurrent callers fully serialize.
    Exclusive,
    /// Bounded-wait exclusive lock; gives up after the configured timeout.
    Timed,
    /// Blocking exclusive lock whose wait aborts on cancellation.
    Cancellable,
    /// Counting permit gate.
    Permit,
}

impl Default for BookingStrategy {
    fn default() -> Self {
        Self::Exclusive
    }
}

impl std::fmt::Display for BookingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exclusive => write!(f, "exclusive"),
            Self::Timed => write!(f, "timed"),
            Self::Cancellable => write!(f, "cancellable"),
            Self::Permit => write!(f, "permit"),
        }
    }
}

impl std::str::FromStr for BookingStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exclusive" => Ok(Self::Exclusive),
            "timed" => Ok(Self::Timed),
            "cancellable" => Ok(Self::Cancellable),
            "permit" => Ok(Self::Permit),
            other => Err(AppError::validation(format!(
                "unknown booking strategy '{other}' (expected exclusive, timed, cancellable, or permit)"
            ))),
        }
    }
}

impl SeatPool {
    /// Books under the given strategy.
    ///
    /// The cancellation token is only consulted by the cancellable strategy.
    pub async fn book(
        &self,
        strategy: BookingStrategy,
        selection: &SeatSelection,
        cancel: &CancellationToken,
    ) -> AppResult<BookingOutcome> {
        match strategy {
            BookingStrategy::Exclusive => self.book_exclusive(selection).await,
            BookingStrategy::Timed => self.book_timed(selection).await,
            BookingStrategy::Cancellable => self.book_cancellable(selection, cancel).await,
            BookingStrategy::Permit => self.book_with_permit(selection).await,
        }
    }
}
