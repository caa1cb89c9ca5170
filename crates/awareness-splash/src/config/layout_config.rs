use crate::config::{
    default_height_percent, default_left_percent, default_title_text, default_top_percent,
    default_width_percent,
};

use serde::Deserialize;

/// Countdown region, in percent of each display (0-100).
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Text displayed above the timer.
    #[serde(default = "default_title_text")]
    pub title_text: String,

    /// Region width.
    #[serde(default = "default_width_percent")]
    pub width_percent: u8,

    /// Region height.
    #[serde(default = "default_height_percent")]
    pub height_percent: u8,

    /// Distance from the left edge.
    #[serde(default = "default_left_percent")]
    pub left_percent: u8,

    /// Distance from the top edge.
    #[serde(default = "default_top_percent")]
    pub top_percent: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title_text: default_title_text(),
            width_percent: default_width_percent(),
            height_percent: default_height_percent(),
            left_percent: default_left_percent(),
            top_percent: default_top_percent(),
        }
    }
}
