use awareness_splash_core::SplashError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the awareness-splash binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Lockdown session error from awareness-splash-core.
    #[error("Session error: {source} {location}")]
    Core {
        /// The underlying session error.
        #[source]
        source: SplashError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or validation error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to create a fullscreen window.
    #[error("Window creation failed: {reason} {location}")]
    WindowCreationFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<SplashError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<SplashError> for AppError {
    #[track_caller]
    fn from(source: SplashError) -> Self {
        AppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
