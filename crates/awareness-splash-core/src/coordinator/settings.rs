use crate::{
    CountdownSchedule,
    layout::CountdownGeometry,
    surface::{Appearance, SurfaceOptions, VideoOptions},
};

use std::path::PathBuf;

/// Everything fixed at process start that shapes a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Countdown length in seconds (> 0).
    pub duration_seconds: u32,
    /// Remaining seconds at which the secondary image is shown.
    pub secondary_threshold_seconds: u32,
    /// Initial background image.
    pub primary_image: Option<PathBuf>,
    /// Image switched in near the end.
    pub secondary_image: Option<PathBuf>,
    /// Optional video layer.
    pub video: Option<VideoOptions>,
    /// Text above the timer.
    pub title_text: String,
    /// Countdown region percentages.
    pub geometry: CountdownGeometry,
    /// Colours and font sizes.
    pub appearance: Appearance,
    /// Master volume to force during the session, if any.
    pub target_volume_percent: Option<u8>,
    /// Put the previous volume back on exit.
    pub restore_volume_on_exit: bool,
}

impl SessionSettings {
    pub(crate) fn schedule(&self) -> CountdownSchedule {
        CountdownSchedule {
            duration_seconds: self.duration_seconds,
            secondary_threshold_seconds: self.secondary_threshold_seconds,
            secondary_image: self.secondary_image.clone(),
        }
    }

    pub(crate) fn surface_options(&self, audio_enabled: bool) -> SurfaceOptions {
        SurfaceOptions {
            primary_image: self.primary_image.clone(),
            video: self.video.clone(),
            audio_enabled,
            title_text: self.title_text.clone(),
            geometry: self.geometry,
            appearance: self.appearance,
        }
    }
}
