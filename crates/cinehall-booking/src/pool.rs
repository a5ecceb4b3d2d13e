//! Shared seat pool with guarded read and write access.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use cinehall_core::config::booking::BookingConfig;
use cinehall_core::config::hall::HallConfig;
use cinehall_core::{AppError, AppResult};

use crate::outcome::BookingOutcome;
use crate::selection::SeatSelection;

/// Fixed-size pool of cinema seats shared by concurrent booking workers.
///
/// The availability vector is mutated only under the write side of a single
/// `RwLock`; readers (listing available seats) take the read side. The
/// booking entry points differ only in the admission discipline they wrap
/// around that committed path: the pool-wide entry mutex (plain, timed, or
/// cancellable acquisition) or a counting permit.
///
/// Cloning is cheap and shares the same underlying pool.
#[derive(Debug, Clone)]
pub struct SeatPool {
    /// Availability flags; index `i` is seat number `i + 1`, `true` = free.
    seats: Arc<RwLock<Vec<bool>>>,
    /// Entry lock shared by the exclusive, timed, and cancellable strategies.
    entry: Arc<Mutex<()>>,
    /// Admission permits for the permit strategy.
    permits: Arc<Semaphore>,
    /// Number of seats in the hall; constant for the pool's lifetime.
    total_seats: u32,
    /// Timing knobs for the timed and cancellable strategies.
    timing: BookingConfig,
}

/// Number of callers the permit strategy admits concurrently.
const BOOKING_PERMITS: usize = 1;

impl SeatPool {
    /// Creates a pool with every seat available.
    pub fn new(hall: &HallConfig, timing: BookingConfig) -> Self {
        Self {
            seats: Arc::new(RwLock::new(vec![true; hall.total_seats as usize])),
            entry: Arc::new(Mutex::new(())),
            permits: Arc::new(Semaphore::new(BOOKING_PERMITS)),
            total_seats: hall.total_seats,
            timing,
        }
    }

    /// Number of seats in the hall.
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Seat numbers currently available, ascending. Never mutates.
    pub async fn available_seats(&self) -> Vec<u32> {
        let seats = self.seats.read().await;
        seats
            .iter()
            .enumerate()
            .filter_map(|(i, &free)| free.then_some(i as u32 + 1))
            .collect()
    }

    /// Books under the whole-sequence exclusive lock; concurrent callers
    /// fully serialize.
    pub async fn book_exclusive(&self, selection: &SeatSelection) -> AppResult<BookingOutcome> {
        let _entry = self.entry.lock().await;
        self.attempt_book(selection).await
    }

    /// Books under a bounded-wait exclusive lock.
    ///
    /// On timeout, returns [`BookingOutcome::LockTimeout`] without booking
    /// and without holding any guard. On success, books and then holds the
    /// entry lock through an artificial delay before releasing, modeling a
    /// lock held longer than the critical section strictly requires.
    pub async fn book_timed(&self, selection: &SeatSelection) -> AppResult<BookingOutcome> {
        let entry = match tokio::time::timeout(self.timing.lock_timeout(), self.entry.lock()).await
        {
            Ok(guard) => guard,
            Err(_) => {
                warn!(
                    timeout_ms = self.timing.lock_timeout_ms,
                    "Unable to acquire entry lock within the bound"
                );
                return Ok(BookingOutcome::LockTimeout);
            }
        };

        let outcome = self.attempt_book(selection).await?;
        tokio::time::sleep(self.timing.hold()).await;
        drop(entry);

        Ok(outcome)
    }

    /// Books under a blocking exclusive lock whose wait aborts on
    /// cancellation.
    ///
    /// Cancellation while waiting returns [`BookingOutcome::Cancelled`] with
    /// no guard held. After acquiring, books and then holds the entry lock
    /// through a pathologically long delay; the token also ends that hold
    /// early so the process can finish. A booking committed before the token
    /// fires stands.
    pub async fn book_cancellable(
        &self,
        selection: &SeatSelection,
        cancel: &CancellationToken,
    ) -> AppResult<BookingOutcome> {
        // Biased so a cancellation that races with the lock grant aborts
        // the wait instead of granting the lock.
        let entry = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Cancellation requested while waiting for entry lock");
                return Ok(BookingOutcome::Cancelled);
            }
            guard = self.entry.lock() => guard,
        };

        let outcome = self.attempt_book(selection).await?;
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Cancellation requested during post-booking hold");
            }
            _ = tokio::time::sleep(self.timing.long_hold()) => {}
        }
        drop(entry);

        Ok(outcome)
    }

    /// Books after acquiring one permit from the counting semaphore.
    ///
    /// Behaviorally equivalent to mutual exclusion at capacity 1, but the
    /// primitive generalizes to admitting K concurrent callers.
    pub async fn book_with_permit(&self, selection: &SeatSelection) -> AppResult<BookingOutcome> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| AppError::internal("booking permit semaphore closed"))?;
        self.attempt_book(selection).await
    }

    /// Flips previously booked seats back to available.
    pub async fn cancel_seats(&self, selection: &SeatSelection) -> AppResult<()> {
        let mut seats = self.seats.write().await;

        for &seat in selection.seats() {
            self.seat_index(seat)?;
        }
        for &seat in selection.seats() {
            let idx = (seat - 1) as usize;
            if seats[idx] {
                warn!(seat, "Attempted to cancel a seat that was not booked");
            }
            seats[idx] = true;
        }

        info!(seats = ?selection.seats(), "Seats cancelled");
        Ok(())
    }

    /// Checks all requested seats and commits the whole selection, or
    /// rejects it without partial commit.
    ///
    /// Runs entirely under the write guard, so no two attempts can each see
    /// a seat available and double-book it.
    async fn attempt_book(&self, selection: &SeatSelection) -> AppResult<BookingOutcome> {
        if selection.is_empty() {
            return Err(AppError::validation(
                "selection must contain at least one seat",
            ));
        }

        let mut seats = self.seats.write().await;

        for &seat in selection.seats() {
            if !seats[self.seat_index(seat)?] {
                debug!(seat, "Selected seat not available");
                return Ok(BookingOutcome::Unavailable { seat });
            }
        }
        for &seat in selection.seats() {
            seats[(seat - 1) as usize] = false;
        }

        info!(seats = ?selection.seats(), "Seats booked");
        Ok(BookingOutcome::Booked {
            seats: selection.seats().to_vec(),
        })
    }

    fn seat_index(&self, seat: u32) -> AppResult<usize> {
        if seat == 0 || seat > self.total_seats {
            return Err(AppError::validation(format!(
                "seat {seat} is out of range 1..={}",
                self.total_seats
            )));
        }
        Ok((seat - 1) as usize)
    }
}
