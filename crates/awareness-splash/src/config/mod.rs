mod appearance_config;
mod assets_config;
mod audio_config;
#[allow(clippy::module_inception)]
mod config;
mod countdown_config;
mod layout_config;

pub(crate) use {
    appearance_config::AppearanceConfig, assets_config::AssetsConfig, audio_config::AudioConfig,
    config::Config, countdown_config::CountdownConfig, layout_config::LayoutConfig,
};

use std::path::PathBuf;

pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

pub(crate) const DEFAULT_DURATION_SECONDS: u32 = 10;
pub(crate) const DEFAULT_SECONDARY_SWITCH_SECONDS: u32 = 5;
pub(crate) const DEFAULT_IMAGE_PATH: &str = r"C:\awareness\pic1.jpg";
pub(crate) const DEFAULT_VIDEO_WIDTH: u32 = 640;
pub(crate) const DEFAULT_VIDEO_HEIGHT: u32 = 360;
pub(crate) const DEFAULT_TITLE_TEXT: &str = "Countdown";
pub(crate) const DEFAULT_WIDTH_PERCENT: u8 = 100;
pub(crate) const DEFAULT_HEIGHT_PERCENT: u8 = 10;
pub(crate) const DEFAULT_LEFT_PERCENT: u8 = 0;
pub(crate) const DEFAULT_TOP_PERCENT: u8 = 85;
pub(crate) const DEFAULT_BACKGROUND_COLOR: &str = "#000000";
pub(crate) const DEFAULT_TEXT_COLOR: &str = "#FF0000";
pub(crate) const DEFAULT_TITLE_POINT_SIZE: f32 = 24.0;
pub(crate) const DEFAULT_TIMER_POINT_SIZE: f32 = 48.0;
pub(crate) const DEFAULT_RESTORE_VOLUME: bool = true;

pub(crate) fn default_duration_seconds() -> u32 {
    DEFAULT_DURATION_SECONDS
}

pub(crate) fn default_secondary_switch_seconds() -> u32 {
    DEFAULT_SECONDARY_SWITCH_SECONDS
}

pub(crate) fn default_image_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_IMAGE_PATH))
}

pub(crate) fn default_video_width() -> u32 {
    DEFAULT_VIDEO_WIDTH
}

pub(crate) fn default_video_height() -> u32 {
    DEFAULT_VIDEO_HEIGHT
}

pub(crate) fn default_title_text() -> String {
    DEFAULT_TITLE_TEXT.to_string()
}

pub(crate) fn default_width_percent() -> u8 {
    DEFAULT_WIDTH_PERCENT
}

pub(crate) fn default_height_percent() -> u8 {
    DEFAULT_HEIGHT_PERCENT
}

pub(crate) fn default_left_percent() -> u8 {
    DEFAULT_LEFT_PERCENT
}

pub(crate) fn default_top_percent() -> u8 {
    DEFAULT_TOP_PERCENT
}

pub(crate) fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

pub(crate) fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

pub(crate) fn default_title_point_size() -> f32 {
    DEFAULT_TITLE_POINT_SIZE
}

pub(crate) fn default_timer_point_size() -> f32 {
    DEFAULT_TIMER_POINT_SIZE
}

pub(crate) fn default_restore_volume() -> bool {
    DEFAULT_RESTORE_VOLUME
}
