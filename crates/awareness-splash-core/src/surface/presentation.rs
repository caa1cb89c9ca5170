//! One fullscreen presentation per display.
//!
//! The surface owns its background image and video layer and draws through
//! its [`SurfaceHost`]. It only reads the shared [`SessionState`]; every
//! failure here is logged and absorbed so the lockdown stays up.

use crate::{
    CountdownObserver, DecodedImage, DisplayInfo, SessionState, format_remaining,
    layout::{CountdownArea, CountdownGeometry, Rect, SurfaceSize, centered, zoom_fit},
    surface::{Appearance, InputDisposition, Scene, SurfaceHost, SurfaceInput, TextBlock},
};

use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use tracing::{debug, info, trace, warn};

/// Embedded video played on top of the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOptions {
    /// Video file.
    pub path: PathBuf,
    /// Fixed playback width in pixels.
    pub width: u32,
    /// Fixed playback height in pixels.
    pub height: u32,
}

/// Per-surface content and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    /// Initial background image.
    pub primary_image: Option<PathBuf>,
    /// Optional video layer.
    pub video: Option<VideoOptions>,
    /// Only the designated surface plays sound.
    pub audio_enabled: bool,
    /// Text above the timer.
    pub title_text: String,
    /// Countdown region percentages.
    pub geometry: CountdownGeometry,
    /// Colours and font sizes.
    pub appearance: Appearance,
}

/// A locked fullscreen presentation on one display.
pub struct PresentationSurface<H: SurfaceHost> {
    host: H,
    state: Rc<SessionState>,
    display: DisplayInfo,
    options: SurfaceOptions,
    size: SurfaceSize,
    area: CountdownArea,
    background: Option<DecodedImage>,
    video_rect: Option<Rect>,
    timer_text: String,
    released: bool,
}

impl<H: SurfaceHost> PresentationSurface<H> {
    /// Build the surface and paint its first frame.
    ///
    /// Missing or broken assets degrade to a solid background and no video.
    pub fn new(
        host: H,
        display: DisplayInfo,
        options: SurfaceOptions,
        state: Rc<SessionState>,
    ) -> Self {
        let size = host.size();
        let area = CountdownArea::compute(options.geometry, size);
        let display_index = display.index;

        let background = options
            .primary_image
            .as_deref()
            .and_then(|path| match DecodedImage::load(path) {
                Ok(image) => Some(image),
                Err(e) => {
                    warn!(display = display_index, error = ?e, "Primary image unavailable, using solid background");
                    None
                }
            });

        let timer_text = format_remaining(state.remaining_seconds());

        let mut surface = Self {
            host,
            state,
            display,
            options,
            size,
            area,
            background,
            video_rect: None,
            timer_text,
            released: false,
        };

        surface.start_video();
        surface.redraw();

        info!(
            display = surface.display.index,
            width = size.width,
            height = size.height,
            audio_enabled = surface.options.audio_enabled,
            has_video = surface.video_rect.is_some(),
            "Presentation surface ready"
        );

        surface
    }

    /// Show the new remaining time. Render failures are logged, never raised.
    pub fn apply_remaining_time(&mut self, remaining_seconds: u32) {
        self.timer_text = format_remaining(remaining_seconds);
        self.redraw();
    }

    /// Replace the background with `image_path`.
    ///
    /// On load failure the current background stays. On success any running
    /// video is stopped and the old image is released.
    pub fn apply_secondary_content(&mut self, image_path: &Path) -> bool {
        if self.released {
            return false;
        }

        match DecodedImage::load(image_path) {
            Ok(image) => {
                self.stop_video();
                let previous = self.background.replace(image);
                drop(previous);
                self.redraw();
                debug!(display = self.display.index, image_path = ?image_path, "Secondary content applied");
                true
            }
            Err(e) => {
                warn!(display = self.display.index, error = ?e, "Secondary image failed to load, keeping current background");
                false
            }
        }
    }

    /// Re-run layout after a resize or DPI change.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size == self.size {
            return;
        }

        self.size = size;
        self.area = CountdownArea::compute(self.options.geometry, size);

        if self.video_rect.is_some()
            && let Some(video) = &self.options.video
        {
            let rect = centered(video.width, video.height, size);
            self.video_rect = Some(rect);
            if let Err(e) = self.host.place_video(rect) {
                warn!(display = self.display.index, error = ?e, "Failed to move video layer");
            }
        }

        debug!(
            display = self.display.index,
            width = size.width,
            height = size.height,
            "Surface layout recomputed"
        );

        self.redraw();
    }

    /// Decide what happens to local input.
    pub fn handle_input(&self, input: SurfaceInput) -> InputDisposition {
        if self.state.close_allowed() {
            InputDisposition::Proceed
        } else {
            trace!(display = self.display.index, ?input, "Input suppressed");
            InputDisposition::Discard
        }
    }

    /// Whether a close attempt may proceed right now.
    pub fn request_close(&self) -> bool {
        self.handle_input(SurfaceInput::CloseRequested) == InputDisposition::Proceed
    }

    /// Paint the current frame.
    pub fn redraw(&mut self) {
        if self.released {
            return;
        }

        let appearance = self.options.appearance;
        let background = self.background.as_ref().and_then(|image| {
            zoom_fit(image.width(), image.height(), self.size).map(|rect| (image, rect))
        });

        let scene = Scene {
            background_color: appearance.background_color,
            background,
            title: TextBlock {
                text: &self.options.title_text,
                rect: self.area.title,
                color: appearance.text_color,
                point_size: appearance.title_point_size,
            },
            timer: TextBlock {
                text: &self.timer_text,
                rect: self.area.timer,
                color: appearance.text_color,
                point_size: appearance.timer_point_size,
            },
            video_rect: self.video_rect,
        };

        if let Err(e) = self.host.present(&scene) {
            warn!(display = self.display.index, error = ?e, "Failed to render surface");
        }
    }

    /// Stop video and drop images. Safe to call repeatedly.
    pub fn release_resources(&mut self) {
        if self.released {
            return;
        }
        self.stop_video();
        self.background = None;
        self.released = true;
        debug!(display = self.display.index, "Surface resources released");
    }

    /// Display this surface covers.
    pub fn display(&self) -> &DisplayInfo {
        &self.display
    }

    /// Current countdown layout.
    pub fn area(&self) -> CountdownArea {
        self.area
    }

    /// Text currently shown in the timer line.
    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    /// Currently loaded background image.
    pub fn background(&self) -> Option<&DecodedImage> {
        self.background.as_ref()
    }

    /// Whether the video layer is running.
    pub fn has_video(&self) -> bool {
        self.video_rect.is_some()
    }

    /// Whether this surface carries sound.
    pub fn is_audio_enabled(&self) -> bool {
        self.options.audio_enabled
    }

    /// Platform host.
    pub fn host(&self) -> &H {
        &self.host
    }

    fn start_video(&mut self) {
        let Some(video) = &self.options.video else {
            return;
        };

        if !video.path.is_file() {
            debug!(display = self.display.index, path = ?video.path, "Video asset does not resolve, image only");
            return;
        }

        let rect = centered(video.width, video.height, self.size);
        let muted = !self.options.audio_enabled;

        match self.host.start_video(&video.path, rect, muted) {
            Ok(()) => {
                self.video_rect = Some(rect);
                info!(display = self.display.index, path = ?video.path, muted, "Video layer started");
            }
            Err(e) => {
                warn!(display = self.display.index, error = ?e, "Video layer failed, image only");
            }
        }
    }

    fn stop_video(&mut self) {
        if self.video_rect.take().is_none() {
            return;
        }
        match self.host.stop_video() {
            Ok(()) => debug!(display = self.display.index, "Video layer stopped"),
            Err(e) => warn!(display = self.display.index, error = ?e, "Failed to stop video layer"),
        }
    }
}

impl<H: SurfaceHost> CountdownObserver for PresentationSurface<H> {
    fn apply_remaining_time(&mut self, remaining_seconds: u32) {
        PresentationSurface::apply_remaining_time(self, remaining_seconds);
    }

    fn apply_secondary_content(&mut self, image_path: &Path) -> bool {
        PresentationSurface::apply_secondary_content(self, image_path)
    }
}

impl<H: SurfaceHost> Drop for PresentationSurface<H> {
    fn drop(&mut self) {
        self.stop_video();
    }
}
