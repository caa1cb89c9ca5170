use crate::config::{default_duration_seconds, default_secondary_switch_seconds};

use serde::Deserialize;

/// Countdown timing.
#[derive(Debug, Clone, Deserialize)]
pub struct CountdownConfig {
    /// Countdown length in seconds (e.g. 180 = 3 minutes).
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,

    /// Seconds before the end at which the secondary image is shown.
    #[serde(default = "default_secondary_switch_seconds")]
    pub secondary_switch_before_end_seconds: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            duration_seconds: default_duration_seconds(),
            secondary_switch_before_end_seconds: default_secondary_switch_seconds(),
        }
    }
}
