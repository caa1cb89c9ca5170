use crate::{
    CoreResult, DecodedImage,
    layout::{Rect, SurfaceSize},
};

use std::path::Path;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// Pure red.
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Colours and font sizes shared by every surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Fill behind and around the background image.
    pub background_color: Rgb,
    /// Title and timer text colour.
    pub text_color: Rgb,
    /// Title font size in points.
    pub title_point_size: f32,
    /// Timer font size in points.
    pub timer_point_size: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background_color: Rgb::BLACK,
            text_color: Rgb::RED,
            title_point_size: 24.0,
            timer_point_size: 48.0,
        }
    }
}

/// A line of text centred in `rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock<'a> {
    /// Text to draw.
    pub text: &'a str,
    /// Box the text is centred in.
    pub rect: Rect,
    /// Fill colour.
    pub color: Rgb,
    /// Font size in points, scaled by the host's DPI.
    pub point_size: f32,
}

/// Everything a host needs to paint one frame of a surface.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Solid fill for the whole surface.
    pub background_color: Rgb,
    /// Background image and where to stretch it.
    pub background: Option<(&'a DecodedImage, Rect)>,
    /// Title line.
    pub title: TextBlock<'a>,
    /// Remaining-time line.
    pub timer: TextBlock<'a>,
    /// Area owned by the video layer, hosts must not paint over it.
    pub video_rect: Option<Rect>,
}

/// Platform half of a presentation surface: one fullscreen window.
///
/// Dropping the host closes the window.
pub trait SurfaceHost {
    /// Current client size in physical pixels.
    fn size(&self) -> SurfaceSize;

    /// Paint `scene` synchronously.
    fn present(&mut self, scene: &Scene<'_>) -> CoreResult<()>;

    /// Open and play the video at `rect`, silenced when `muted`.
    fn start_video(&mut self, path: &Path, rect: Rect, muted: bool) -> CoreResult<()>;

    /// Move the running video layer.
    fn place_video(&mut self, rect: Rect) -> CoreResult<()>;

    /// Stop playback and release decoder resources.
    fn stop_video(&mut self) -> CoreResult<()>;
}
