use crate::{CoreResult, SplashError};

use std::{
    fmt,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// A decoded background image.
///
/// Pixels are stored top-down in BGRA byte order, the layout native
/// blitters (GDI DIBs) consume directly.
pub struct DecodedImage {
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Decode the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns `AssetLoadFailed` if the file is missing or cannot be decoded.
    #[track_caller]
    #[instrument]
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.is_file() {
            return Err(SplashError::AssetLoadFailed {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let decoded = image::open(path).map_err(|e| SplashError::AssetLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        let mut pixels = rgba.into_raw();
        for pixel in pixels.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }

        debug!(path = ?path, width, height, "Image decoded");

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            pixels,
        })
    }

    /// Source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// BGRA pixel rows, top-down.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("path", &self.path)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
