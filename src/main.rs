//! cinehall: concurrent seat booking demonstration.
//!
//! Entry point that loads configuration, initializes logging, and runs
//! concurrent booking workers against one shared seat pool, printing the
//! seat state before and after.

use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt};

use cinehall_booking::{BookingOutcome, BookingStrategy, SeatPool, generate_selection};
use cinehall_core::config::AppConfig;
use cinehall_core::error::AppError;

/// Grace period before cancelling workers parked on the cancellable
/// strategy's pathological hold.
const CANCEL_GRACE: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "cinehall", about = "Concurrent seat booking demonstration")]
struct Cli {
    /// Configuration overlay name (reads config/<env>.toml if present).
    #[arg(long, default_value = "development")]
    env: String,
    /// Booking strategy override: exclusive, timed, cancellable, or permit.
    #[arg(long)]
    strategy: Option<BookingStrategy>,
    /// Number of concurrent booking workers.
    #[arg(long)]
    workers: Option<u32>,
    /// Seed for the selection generator, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, cli.seed).await {
        tracing::error!("Demo error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, then apply CLI overrides.
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load(&cli.env)?;

    if let Some(strategy) = cli.strategy {
        config.demo.strategy = strategy.to_string();
    }
    if let Some(workers) = cli.workers {
        config.demo.workers = workers;
    }

    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main demonstration run.
async fn run(config: AppConfig, seed: Option<u64>) -> Result<(), AppError> {
    tracing::info!("Starting cinehall v{}", env!("CARGO_PKG_VERSION"));

    let strategy: BookingStrategy = config.demo.strategy.parse()?;
    let pool = SeatPool::new(&config.hall, config.booking.clone());

    print_available(&pool).await;

    let cancel = CancellationToken::new();
    let mut workers = Vec::with_capacity(config.demo.workers as usize);

    for worker_id in 0..config.demo.workers {
        let pool = pool.clone();
        let cancel = cancel.clone();
        let hall = config.hall.clone();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker_id as u64)),
            None => StdRng::from_entropy(),
        };

        workers.push(tokio::spawn(async move {
            let selection = generate_selection(&mut rng, hall.total_seats, hall.max_selection);
            tracing::info!(
                worker_id,
                seats = ?selection.seats(),
                strategy = %strategy,
                "Attempting booking"
            );

            match pool.book(strategy, &selection, &cancel).await {
                Ok(BookingOutcome::Booked { seats }) => {
                    tracing::info!(worker_id, ?seats, "Booked");
                }
                Ok(BookingOutcome::Unavailable { seat }) => {
                    tracing::info!(worker_id, seat, "Selected seat not available");
                }
                Ok(BookingOutcome::LockTimeout) => {
                    tracing::info!(worker_id, "Unable to acquire lock");
                }
                Ok(BookingOutcome::Cancelled) => {
                    tracing::info!(worker_id, "Booking cancelled");
                }
                Err(e) => {
                    tracing::error!(worker_id, error = %e, "Booking failed");
                }
            }
        }));
    }

    // Workers on the cancellable strategy park on a pathological hold;
    // cancel after a grace period so the demonstration terminates.
    if strategy == BookingStrategy::Cancellable {
        tokio::time::sleep(CANCEL_GRACE).await;
        cancel.cancel();
    }

    for handle in workers {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Booking worker panicked");
        }
    }

    print_available(&pool).await;
    Ok(())
}

/// Print available seat numbers, space-separated and 1-indexed.
async fn print_available(pool: &SeatPool) {
    let seats = pool.available_seats().await;
    let formatted = seats
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Available seats: {formatted}");
}
