use crate::config::{default_image_path, default_video_height, default_video_width};

use std::path::PathBuf;

use serde::Deserialize;

/// Background images and the optional video.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Background shown from the start.
    #[serde(default = "default_image_path")]
    pub primary_image: Option<PathBuf>,

    /// Background shown shortly before the end.
    #[serde(default = "default_image_path")]
    pub secondary_image: Option<PathBuf>,

    /// Video played centred on every display (None = no video).
    #[serde(default)]
    pub video: Option<PathBuf>,

    /// Video playback width in pixels.
    #[serde(default = "default_video_width")]
    pub video_width: u32,

    /// Video playback height in pixels.
    #[serde(default = "default_video_height")]
    pub video_height: u32,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            primary_image: default_image_path(),
            secondary_image: default_image_path(),
            video: None,
            video_width: default_video_width(),
            video_height: default_video_height(),
        }
    }
}
