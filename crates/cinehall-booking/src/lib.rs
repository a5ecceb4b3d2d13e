//! # cinehall-booking
//!
//! Seat pool and booking strategies for cinehall.
//!
//! The pool keeps its availability flags behind a single read-write lock;
//! every mutation goes through the write guard. The four booking entry
//! points differ only in the admission discipline they wrap around that
//! committed path:
//!
//! - whole-sequence exclusive lock
//! - timed exclusive lock (bounded wait, artificial post-booking hold)
//! - cancellable blocking exclusive lock (pathological post-booking hold)
//! - counting permit (capacity 1)

pub mod outcome;
pub mod pool;
pub mod selection;
pub mod strategy;

pub use outcome::BookingOutcome;
pub use pool::SeatPool;
pub use selection::{SeatSelection, generate_selection};
pub use strategy::BookingStrategy;
