use crate::config::{
    default_background_color, default_text_color, default_timer_point_size,
    default_title_point_size,
};

use serde::Deserialize;

/// Colours (`#RRGGBB`) and font sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct AppearanceConfig {
    /// Fill behind the background image.
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Title and timer colour.
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Title font size in points.
    #[serde(default = "default_title_point_size")]
    pub title_point_size: f32,

    /// Timer font size in points.
    #[serde(default = "default_timer_point_size")]
    pub timer_point_size: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            text_color: default_text_color(),
            title_point_size: default_title_point_size(),
            timer_point_size: default_timer_point_size(),
        }
    }
}
