//! Configuration loading for awareness-splash.
//!
//! A `config.toml` next to the executable wins over the per-user config
//! directory. Without either, built-in defaults are used and nothing is
//! written to disk.

use crate::{
    AppError, AppResult,
    config::{
        AppearanceConfig, AssetsConfig, AudioConfig, CONFIG_FILE_NAME, CountdownConfig,
        LayoutConfig,
    },
};

use std::{
    env, fs,
    panic::Location,
    path::{Path, PathBuf},
};

use awareness_splash_core::{
    Appearance, CountdownGeometry, Rgb, SessionSettings, VideoOptions,
};
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Countdown timing.
    #[serde(default)]
    pub countdown: CountdownConfig,
    /// Images and video.
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Countdown region placement.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Colours and fonts.
    #[serde(default)]
    pub appearance: AppearanceConfig,
    /// System volume override.
    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Load and validate the first config file found, or the defaults.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        match Self::candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from(&path),
            None => {
                info!("No config found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Reject values the session cannot run with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        if self.countdown.duration_seconds == 0 {
            return Err(Self::invalid("countdown.duration_seconds must be greater than 0"));
        }

        if self.countdown.secondary_switch_before_end_seconds >= self.countdown.duration_seconds {
            warn!(
                duration_seconds = self.countdown.duration_seconds,
                secondary_switch_before_end_seconds =
                    self.countdown.secondary_switch_before_end_seconds,
                "Secondary switch is not before the end, secondary image will never show"
            );
        }

        let percentages = [
            ("layout.width_percent", self.layout.width_percent),
            ("layout.height_percent", self.layout.height_percent),
            ("layout.left_percent", self.layout.left_percent),
            ("layout.top_percent", self.layout.top_percent),
        ];
        for (name, value) in percentages {
            if value > 100 {
                return Err(Self::invalid(&format!("{name} must be 0-100, got {value}")));
            }
        }

        if let Some(volume) = self.audio.target_volume_percent
            && volume > 100
        {
            return Err(Self::invalid(&format!(
                "audio.target_volume_percent must be 0-100, got {volume}"
            )));
        }

        if self.assets.video_width == 0 || self.assets.video_height == 0 {
            return Err(Self::invalid("assets.video_width and video_height must be non-zero"));
        }

        for (name, size) in [
            ("appearance.title_point_size", self.appearance.title_point_size),
            ("appearance.timer_point_size", self.appearance.timer_point_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(Self::invalid(&format!("{name} must be positive, got {size}")));
            }
        }

        Self::parse_color("appearance.background_color", &self.appearance.background_color)?;
        Self::parse_color("appearance.text_color", &self.appearance.text_color)?;

        Ok(())
    }

    /// Convert into the settings a session starts from.
    #[track_caller]
    pub fn session_settings(&self) -> AppResult<SessionSettings> {
        let appearance = Appearance {
            background_color: Self::parse_color(
                "appearance.background_color",
                &self.appearance.background_color,
            )?,
            text_color: Self::parse_color("appearance.text_color", &self.appearance.text_color)?,
            title_point_size: self.appearance.title_point_size,
            timer_point_size: self.appearance.timer_point_size,
        };

        let video = self.assets.video.clone().map(|path| VideoOptions {
            path,
            width: self.assets.video_width,
            height: self.assets.video_height,
        });

        Ok(SessionSettings {
            duration_seconds: self.countdown.duration_seconds,
            secondary_threshold_seconds: self.countdown.secondary_switch_before_end_seconds,
            primary_image: self.assets.primary_image.clone(),
            secondary_image: self.assets.secondary_image.clone(),
            video,
            title_text: self.layout.title_text.clone(),
            geometry: CountdownGeometry {
                width_percent: self.layout.width_percent,
                height_percent: self.layout.height_percent,
                left_percent: self.layout.left_percent,
                top_percent: self.layout.top_percent,
            },
            appearance,
            target_volume_percent: self.audio.target_volume_percent,
            restore_volume_on_exit: self.audio.restore_volume_on_exit,
        })
    }

    /// Lookup order: next to the executable, then the per-user config dir.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);

        match env::current_exe() {
            Ok(exe) => {
                if let Some(dir) = exe.parent() {
                    paths.push(dir.join(CONFIG_FILE_NAME));
                }
            }
            Err(e) => debug!(error = ?e, "Executable path unavailable"),
        }

        if let Some(proj_dirs) = ProjectDirs::from("com", "awareness-splash", "Awareness-Splash") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        paths
    }

    #[track_caller]
    fn parse_color(name: &str, value: &str) -> AppResult<Rgb> {
        Rgb::parse_hex(value)
            .ok_or_else(|| Self::invalid(&format!("{name} must be #RRGGBB, got {value:?}")))
    }

    #[track_caller]
    fn invalid(reason: &str) -> AppError {
        AppError::ConfigError {
            reason: reason.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
