//! Fullscreen `tao` window backing one presentation surface.

use crate::{AppError, AppResult};

use awareness_splash_core::{CoreResult, DisplayInfo, Rect, Scene, SurfaceHost, SurfaceSize};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tao::{
    event_loop::EventLoopWindowTarget,
    monitor::MonitorHandle,
    window::{Fullscreen, Window, WindowBuilder, WindowId},
};
use tracing::{debug, instrument};

/// Window title; never shown, only visible to accessibility tools.
const WINDOW_TITLE: &str = "Awareness Splash";

/// Describe a monitor for the session.
pub(crate) fn display_info(index: usize, monitor: &MonitorHandle) -> DisplayInfo {
    let position = monitor.position();
    let size = monitor.size();
    DisplayInfo {
        index,
        name: monitor.name(),
        position: (position.x, position.y),
        size: SurfaceSize {
            width: size.width,
            height: size.height,
        },
        scale_factor: monitor.scale_factor(),
    }
}

/// Borderless, topmost, fullscreen window on one monitor.
pub struct WindowHost {
    window: Window,
    display_index: usize,
    #[cfg(target_os = "windows")]
    video: Option<crate::mci_video::MciVideo>,
}

impl WindowHost {
    /// Create the window covering `monitor` for `surface_display`, hidden cursor, no taskbar entry.
    #[track_caller]
    #[instrument(skip_all, fields(display_index = surface_display.index))]
    pub(crate) fn create<T>(
        target: &EventLoopWindowTarget<T>,
        monitor: &MonitorHandle,
        surface_display: &DisplayInfo,
    ) -> AppResult<Self> {
        let builder = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_decorations(false)
            .with_always_on_top(true)
            .with_resizable(false)
            .with_position(monitor.position())
            .with_inner_size(monitor.size())
            .with_fullscreen(Some(Fullscreen::Borderless(Some(monitor.clone()))));

        #[cfg(target_os = "windows")]
        let builder = {
            use tao::platform::windows::WindowBuilderExtWindows;
            builder.with_skip_taskbar(true)
        };

        let window = builder
            .build(target)
            .map_err(|e| AppError::WindowCreationFailed {
                reason: format!("Display {}: {}", surface_display.index, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        window.set_cursor_visible(false);
        window.set_focus();

        debug!(window_id = ?window.id(), "Surface window created");

        Ok(Self {
            window,
            display_index: surface_display.index,
            #[cfg(target_os = "windows")]
            video: None,
        })
    }

    pub(crate) fn window_id(&self) -> WindowId {
        self.window.id()
    }

    #[cfg(target_os = "windows")]
    fn hwnd(&self) -> isize {
        use tao::platform::windows::WindowExtWindows;
        self.window.hwnd()
    }
}

impl SurfaceHost for WindowHost {
    fn size(&self) -> SurfaceSize {
        let size = self.window.inner_size();
        SurfaceSize {
            width: size.width,
            height: size.height,
        }
    }

    #[track_caller]
    fn present(&mut self, scene: &Scene<'_>) -> CoreResult<()> {
        #[cfg(target_os = "windows")]
        {
            use windows::Win32::Foundation::HWND;
            crate::gdi_painter::paint(
                HWND(self.hwnd()),
                self.size(),
                self.window.scale_factor(),
                scene,
            )
        }

        // Without a painter the window still covers the display.
        #[cfg(not(target_os = "windows"))]
        {
            let _ = scene;
            Ok(())
        }
    }

    #[track_caller]
    fn start_video(&mut self, path: &Path, rect: Rect, muted: bool) -> CoreResult<()> {
        #[cfg(target_os = "windows")]
        {
            use crate::mci_video::{MciVideo, alias_for};

            // Replacing drops (and closes) any previous device first.
            self.video = None;
            let video = MciVideo::start(
                alias_for(self.display_index),
                path,
                self.hwnd(),
                rect,
                muted,
            )?;
            self.video = Some(video);
            Ok(())
        }

        #[cfg(not(target_os = "windows"))]
        {
            let _ = (rect, muted);
            Err(awareness_splash_core::SplashError::VideoFailed {
                reason: format!(
                    "Video playback is only supported on Windows (display {}, {})",
                    self.display_index,
                    path.display()
                ),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    #[track_caller]
    fn place_video(&mut self, rect: Rect) -> CoreResult<()> {
        #[cfg(target_os = "windows")]
        {
            if let Some(video) = &self.video {
                video.place(rect)?;
            }
        }

        #[cfg(not(target_os = "windows"))]
        let _ = rect;

        Ok(())
    }

    #[track_caller]
    fn stop_video(&mut self) -> CoreResult<()> {
        #[cfg(target_os = "windows")]
        {
            if let Some(mut video) = self.video.take() {
                video.close()?;
            }
        }

        Ok(())
    }
}
