//! Embedded video layer driven through MCI command strings.
//!
//! The `mpegvideo` device opens as a child of the surface window, so it is
//! clipped to the surface and closes with it. Commands are built as plain
//! strings; only sending them needs Windows.
#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

use awareness_splash_core::Rect;

use std::path::Path;

/// MCI alias for the video of one display.
pub(crate) fn alias_for(display_index: usize) -> String {
    format!("splash_video_{display_index}")
}

pub(crate) fn open_command(alias: &str, path: &Path, parent_hwnd: isize) -> String {
    format!(
        "open \"{}\" type mpegvideo alias {alias} parent {parent_hwnd} style child",
        path.display()
    )
}

pub(crate) fn place_command(alias: &str, rect: Rect) -> String {
    format!(
        "put {alias} window at {} {} {} {}",
        rect.x, rect.y, rect.width, rect.height
    )
}

pub(crate) fn mute_command(alias: &str) -> String {
    format!("setaudio {alias} off")
}

pub(crate) fn play_command(alias: &str) -> String {
    format!("play {alias} repeat")
}

pub(crate) fn stop_command(alias: &str) -> String {
    format!("stop {alias}")
}

pub(crate) fn close_command(alias: &str) -> String {
    format!("close {alias}")
}

#[cfg(target_os = "windows")]
pub(crate) use platform::MciVideo;

#[cfg(target_os = "windows")]
mod platform {
    use super::{
        close_command, mute_command, open_command, place_command, play_command, stop_command,
    };
    use crate::wide::to_wide;

    use awareness_splash_core::{CoreResult, Rect, SplashError};

    use std::{panic::Location, path::Path};

    use error_location::ErrorLocation;
    use tracing::{debug, warn};
    use windows::{
        Win32::{
            Foundation::HWND,
            Media::Multimedia::{mciGetErrorStringW, mciSendStringW},
        },
        core::PCWSTR,
    };

    /// A playing MCI video device. Closing is idempotent and happens on drop.
    pub(crate) struct MciVideo {
        alias: String,
        open: bool,
    }

    impl MciVideo {
        /// Open `path` inside `parent_hwnd` at `rect` and start looping it.
        #[track_caller]
        pub(crate) fn start(
            alias: String,
            path: &Path,
            parent_hwnd: isize,
            rect: Rect,
            muted: bool,
        ) -> CoreResult<Self> {
            send(&open_command(&alias, path, parent_hwnd))?;

            // From here on the device is open and Drop closes it on any error.
            let video = Self { alias, open: true };
            video.place(rect)?;
            if muted {
                send(&mute_command(&video.alias))?;
            }
            send(&play_command(&video.alias))?;

            debug!(alias = %video.alias, muted, "MCI video playing");
            Ok(video)
        }

        #[track_caller]
        pub(crate) fn place(&self, rect: Rect) -> CoreResult<()> {
            send(&place_command(&self.alias, rect))
        }

        /// Stop playback and release the device.
        #[track_caller]
        pub(crate) fn close(&mut self) -> CoreResult<()> {
            if !self.open {
                return Ok(());
            }
            self.open = false;

            if let Err(e) = send(&stop_command(&self.alias)) {
                warn!(alias = %self.alias, error = ?e, "MCI stop failed, closing anyway");
            }
            send(&close_command(&self.alias))
        }
    }

    impl Drop for MciVideo {
        fn drop(&mut self) {
            if let Err(e) = self.close() {
                warn!(alias = %self.alias, error = ?e, "MCI close failed");
            }
        }
    }

    #[track_caller]
    fn send(command: &str) -> CoreResult<()> {
        let wide = to_wide(command);
        // SAFETY: `wide` is NUL-terminated and outlives the call; no return buffer.
        let code = unsafe { mciSendStringW(PCWSTR::from_raw(wide.as_ptr()), None, HWND::default()) };
        if code == 0 {
            return Ok(());
        }

        let mut buffer = [0u16; 256];
        // SAFETY: buffer is writable for its full length.
        let described = unsafe { mciGetErrorStringW(code, &mut buffer) }.as_bool();
        let message = if described {
            let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
            String::from_utf16_lossy(&buffer[..len])
        } else {
            format!("MCI error {code}")
        };

        Err(SplashError::VideoFailed {
            reason: format!("`{command}`: {message}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
