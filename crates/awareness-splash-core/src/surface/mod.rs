mod host;
mod image;
mod input;
mod presentation;

pub use {
    host::{Appearance, Rgb, Scene, SurfaceHost, TextBlock},
    image::DecodedImage,
    input::{InputDisposition, SurfaceInput},
    presentation::{PresentationSurface, SurfaceOptions, VideoOptions},
};
