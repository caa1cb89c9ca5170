use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Lockdown session errors with source location tracking.
#[derive(Error, Debug)]
pub enum SplashError {
    /// No display was enumerated at startup.
    #[error("No monitors found {location}")]
    NoDisplaysFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An image or video asset could not be loaded.
    #[error("Failed to load asset {path:?}: {reason} {location}")]
    AssetLoadFailed {
        /// Path of the asset that failed.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The platform could not create a surface window for a display.
    #[error("Surface creation failed on display {display}: {reason} {location}")]
    SurfaceCreationFailed {
        /// Index of the display.
        display: usize,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Drawing a scene onto a surface failed.
    #[error("Render failed: {reason} {location}")]
    RenderFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The embedded video layer failed to start, move or stop.
    #[error("Video layer error: {reason} {location}")]
    VideoFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Installing or removing the global keyboard hook failed.
    #[error("Keyboard hook error: {reason} {location}")]
    InputHookFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No default audio output device could be resolved.
    #[error("Audio output device unavailable: {reason} {location}")]
    VolumeDeviceUnavailable {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading or writing the master volume failed.
    #[error("Volume control failed: {reason} {location}")]
    VolumeControlFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Session settings violate a startup invariant.
    #[error("Invalid session settings: {reason} {location}")]
    InvalidSettings {
        /// Description of the violated invariant.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`SplashError`].
pub type Result<T> = std::result::Result<T, SplashError>;
