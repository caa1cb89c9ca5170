use crate::{AppError, config::Config};

use std::{fs, path::PathBuf};

use awareness_splash_core::{Rgb, SessionSettings};
use tempfile::TempDir;

#[allow(clippy::unwrap_used)]
fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// WHAT: Built-in defaults match the stock kiosk deployment
/// WHY: A machine without any config file must still run a sensible session
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_file_when_using_defaults_then_stock_settings() {
    // Given: The default configuration
    let config = Config::default();

    // When: Converting it into session settings
    config.validate().unwrap();
    let settings: SessionSettings = config.session_settings().unwrap();

    // Then: Every stock value is in place
    assert_eq!(settings.duration_seconds, 10);
    assert_eq!(settings.secondary_threshold_seconds, 5);
    assert_eq!(settings.primary_image, Some(PathBuf::from(r"C:\awareness\pic1.jpg")));
    assert_eq!(settings.secondary_image, settings.primary_image);
    assert!(settings.video.is_none());
    assert_eq!(settings.title_text, "Countdown");
    assert_eq!(settings.geometry.width_percent, 100);
    assert_eq!(settings.geometry.height_percent, 10);
    assert_eq!(settings.geometry.left_percent, 0);
    assert_eq!(settings.geometry.top_percent, 85);
    assert_eq!(settings.appearance.background_color, Rgb::BLACK);
    assert_eq!(settings.appearance.text_color, Rgb::RED);
    assert_eq!(settings.target_volume_percent, None);
    assert!(settings.restore_volume_on_exit);
}

/// WHAT: A partial file keeps defaults for every omitted key
/// WHY: Deployments usually override only duration and assets
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_loading_then_missing_keys_defaulted() {
    // Given: A file setting only duration, video and volume
    let (_dir, path) = write_config(
        r#"
[countdown]
duration_seconds = 180

[assets]
video = "clip.mp4"

[audio]
target_volume_percent = 60
"#,
    );

    // When: Loading it
    let config = Config::load_from(&path).unwrap();
    let settings = config.session_settings().unwrap();

    // Then: Overrides applied, everything else defaulted
    assert_eq!(settings.duration_seconds, 180);
    assert_eq!(settings.secondary_threshold_seconds, 5);
    let video = settings.video.unwrap();
    assert_eq!(video.path, PathBuf::from("clip.mp4"));
    assert_eq!((video.width, video.height), (640, 360));
    assert_eq!(settings.target_volume_percent, Some(60));
    assert!(settings.restore_volume_on_exit);
    assert_eq!(settings.title_text, "Countdown");
}

/// WHAT: Colours are parsed from `#RRGGBB`
/// WHY: Appearance is configured as hex strings but painted as RGB
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_colors_when_loading_then_parsed() {
    let (_dir, path) = write_config(
        r##"
[appearance]
background_color = "#102030"
text_color = "#FFFFFF"
timer_point_size = 72.0
"##,
    );

    let settings = Config::load_from(&path).unwrap().session_settings().unwrap();

    assert_eq!(settings.appearance.background_color, Rgb { r: 0x10, g: 0x20, b: 0x30 });
    assert_eq!(settings.appearance.text_color, Rgb { r: 255, g: 255, b: 255 });
    assert_eq!(settings.appearance.timer_point_size, 72.0);
    assert_eq!(settings.appearance.title_point_size, 24.0);
}

/// WHAT: A zero duration is rejected at load time
/// WHY: A session that expires instantly would flash and exit
#[test]
fn given_zero_duration_when_loading_then_config_error() {
    let (_dir, path) = write_config("[countdown]\nduration_seconds = 0\n");

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Percentages above 100 are rejected
/// WHY: The countdown region is expressed as a share of the display
#[test]
fn given_percentage_over_100_when_loading_then_config_error() {
    let (_dir, path) = write_config("[layout]\ntop_percent = 120\n");

    let result = Config::load_from(&path);

    assert!(matches!(
        &result,
        Err(AppError::ConfigError { reason, .. }) if reason.contains("layout.top_percent")
    ));
}

/// WHAT: A volume above 100 percent is rejected
/// WHY: The endpoint scalar only covers 0-100
#[test]
fn given_volume_over_100_when_loading_then_config_error() {
    let (_dir, path) = write_config("[audio]\ntarget_volume_percent = 150\n");

    assert!(matches!(Config::load_from(&path), Err(AppError::ConfigError { .. })));
}

/// WHAT: Malformed colours are rejected
/// WHY: A typo must fail loudly instead of painting an unexpected colour
#[test]
fn given_malformed_color_when_loading_then_config_error() {
    let (_dir, path) = write_config("[appearance]\ntext_color = \"red\"\n");

    assert!(matches!(Config::load_from(&path), Err(AppError::ConfigError { .. })));
}

/// WHAT: Sign characters inside a colour are rejected
/// WHY: Only hex digits are colour syntax, even where integer parsing would accept them
#[test]
fn given_signed_color_digits_when_loading_then_config_error() {
    let (_dir, path) = write_config("[appearance]\nbackground_color = \"#+F+F+F\"\n");

    assert!(matches!(
        &Config::load_from(&path),
        Err(AppError::ConfigError { reason, .. }) if reason.contains("appearance.background_color")
    ));
}

/// WHAT: A layout section with one key keeps the stock values for the rest
/// WHY: Operators usually tweak a single percentage
#[test]
#[allow(clippy::unwrap_used)]
fn given_layout_with_only_width_when_loading_then_other_percentages_defaulted() {
    let (_dir, path) = write_config("[layout]\nwidth_percent = 50\n");

    let settings = Config::load_from(&path).unwrap().session_settings().unwrap();

    assert_eq!(settings.geometry.width_percent, 50);
    assert_eq!(settings.geometry.height_percent, 10);
    assert_eq!(settings.geometry.left_percent, 0);
    assert_eq!(settings.geometry.top_percent, 85);
    assert_eq!(settings.title_text, "Countdown");
}

/// WHAT: Invalid TOML and missing files are config errors
/// WHY: Startup must report the problem and exit instead of panicking
#[test]
#[allow(clippy::unwrap_used)]
fn given_unreadable_or_invalid_file_when_loading_then_config_error() {
    let (dir, path) = write_config("[countdown\nduration_seconds = ");

    assert!(matches!(Config::load_from(&path), Err(AppError::ConfigError { .. })));
    assert!(matches!(
        Config::load_from(&dir.path().join("missing.toml")),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: A switch point at or past the duration is accepted
/// WHY: It only means the secondary image never shows, which is not fatal
#[test]
#[allow(clippy::unwrap_used)]
fn given_threshold_not_before_end_when_loading_then_accepted() {
    let (_dir, path) = write_config(
        "[countdown]\nduration_seconds = 5\nsecondary_switch_before_end_seconds = 10\n",
    );

    let settings = Config::load_from(&path).unwrap().session_settings().unwrap();

    assert_eq!(settings.secondary_threshold_seconds, 10);
}
