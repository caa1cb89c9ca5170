use crate::config::default_restore_volume;

use serde::Deserialize;

/// System volume override.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    /// Master volume forced during the session (None = leave volume alone).
    #[serde(default)]
    pub target_volume_percent: Option<u8>,

    /// Restore the previous volume when the session ends.
    #[serde(default = "default_restore_volume")]
    pub restore_volume_on_exit: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            target_volume_percent: None,
            restore_volume_on_exit: default_restore_volume(),
        }
    }
}
