//! Demonstration driver configuration.

use serde::{Deserialize, Serialize};

/// Settings for the concurrent booking demonstration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of concurrent booking workers to spawn.
    #[serde(default = "default_workers")]
    pub workers: u32,
    /// Booking strategy name: `"exclusive"`, `"timed"`, `"cancellable"`,
    /// or `"permit"`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            strategy: default_strategy(),
        }
    }
}

fn default_workers() -> u32 {
    2
}

fn default_strategy() -> String {
    "exclusive".to_string()
}
