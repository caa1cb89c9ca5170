//! Awareness-splash core library.
//!
//! Platform-independent lockdown session: a shared one-second countdown
//! driving one fullscreen presentation per display, with a global keyboard
//! filter and a temporary system volume override that are always released
//! on exit.
//!
//! The platform supplies windows, painting and video through
//! [`SurfaceHost`], the keyboard hook through [`KeyboardHookBackend`] and
//! the output device through [`AudioDeviceResolver`].
//!
//! # Example
//!
//! ```no_run
//! use awareness_splash_core::{
//!     AudioDeviceResolver, CoreResult, DisplayInfo, KeyboardHookBackend, SessionCoordinator,
//!     SessionSettings, SessionStatus, SurfaceHost,
//! };
//!
//! fn run<H, K, R>(
//!     settings: SessionSettings,
//!     displays: Vec<DisplayInfo>,
//!     hook: K,
//!     audio: R,
//!     create_host: impl FnMut(&DisplayInfo) -> CoreResult<H>,
//! ) -> CoreResult<i32>
//! where
//!     H: SurfaceHost,
//!     K: KeyboardHookBackend,
//!     R: AudioDeviceResolver,
//! {
//!     let mut session = SessionCoordinator::start(settings, displays, hook, audio, create_host)?;
//!     loop {
//!         std::thread::sleep(session.tick_interval());
//!         if session.on_tick() == SessionStatus::Expired {
//!             break;
//!         }
//!     }
//!     Ok(session.finish().unwrap_or(1))
//! }
//! ```

mod coordinator;
mod countdown;
mod error;
mod input;
mod layout;
mod session;
mod surface;
mod volume;

pub use {
    coordinator::{
        DisplayInfo, EXIT_CODE_EXPIRED, SessionCoordinator, SessionSettings, SessionStatus,
    },
    countdown::{
        CountdownController, CountdownEvent, CountdownObserver, CountdownSchedule,
        TICK_INTERVAL, format_remaining,
    },
    error::{Result as CoreResult, SplashError},
    input::{
        GlobalInputSuppressor, HookVerdict, KeyMessage, KeyboardHookBackend, VK_LEFT_META,
        VK_RIGHT_META, classify_key_event,
    },
    layout::{
        CountdownArea, CountdownGeometry, Rect, SurfaceSize, TITLE_FRACTION_PERCENT, centered,
        zoom_fit,
    },
    session::SessionState,
    surface::{
        Appearance, DecodedImage, InputDisposition, PresentationSurface, Rgb, Scene,
        SurfaceHost, SurfaceInput, SurfaceOptions, TextBlock, VideoOptions,
    },
    volume::{AudioDeviceResolver, SystemVolumeOverride, VolumeEndpoint, VolumeOverrideRecord},
};

#[cfg(test)]
mod tests;
