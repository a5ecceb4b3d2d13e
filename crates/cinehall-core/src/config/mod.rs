//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a serde default so the binary runs with no
//! configuration file at all.

pub mod booking;
pub mod demo;
pub mod hall;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::booking::BookingConfig;
use self::demo::DemoConfig;
use self::hall::HallConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seat pool layout settings.
    #[serde(default)]
    pub hall: HallConfig,
    /// Booking strategy timing settings.
    #[serde(default)]
    pub booking: BookingConfig,
    /// Demonstration driver settings.
    #[serde(default)]
    pub demo: DemoConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CINEHALL`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CINEHALL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.hall.total_seats == 0 {
            return Err(AppError::validation("hall.total_seats must be at least 1"));
        }
        if self.hall.max_selection == 0 {
            return Err(AppError::validation("hall.max_selection must be at least 1"));
        }
        if self.hall.max_selection > self.hall.total_seats {
            return Err(AppError::validation(
                "hall.max_selection cannot exceed hall.total_seats",
            ));
        }
        if self.demo.workers == 0 {
            return Err(AppError::validation("demo.workers must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hall.total_seats, 10);
        assert_eq!(config.hall.max_selection, 5);
        assert_eq!(config.demo.workers, 2);
    }

    #[test]
    fn test_oversized_selection_rejected() {
        let mut config = AppConfig::default();
        config.hall.max_selection = config.hall.total_seats + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut config = AppConfig::default();
        config.hall.total_seats = 0;
        assert!(config.validate().is_err());
    }
}
