//! Seat pool layout configuration.

use serde::{Deserialize, Serialize};

/// Seat pool layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallConfig {
    /// Number of seats in the hall.
    #[serde(default = "default_total_seats")]
    pub total_seats: u32,
    /// Maximum number of seats one booking attempt may request.
    #[serde(default = "default_max_selection")]
    pub max_selection: u32,
}

impl Default for HallConfig {
    fn default() -> Self {
        Self {
            total_seats: default_total_seats(),
            max_selection: default_max_selection(),
        }
    }
}

fn default_total_seats() -> u32 {
    10
}

fn default_max_selection() -> u32 {
    5
}
