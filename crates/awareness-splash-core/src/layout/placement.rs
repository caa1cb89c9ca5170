use crate::layout::{Rect, SurfaceSize};

/// Aspect-preserving fit of an image into the surface, centred.
///
/// Returns `None` for degenerate sizes.
pub fn zoom_fit(image_width: u32, image_height: u32, size: SurfaceSize) -> Option<Rect> {
    if image_width == 0 || image_height == 0 || size.width == 0 || size.height == 0 {
        return None;
    }

    let (iw, ih) = (u64::from(image_width), u64::from(image_height));
    let (sw, sh) = (u64::from(size.width), u64::from(size.height));

    // Compare aspect ratios without floating point.
    let (width, height) = if iw * sh <= ih * sw {
        ((iw * sh / ih).max(1), sh)
    } else {
        (sw, (ih * sw / iw).max(1))
    };

    Some(centered(width as u32, height as u32, size))
}

/// A `width` x `height` box centred in the surface, shrunk to fit if needed.
pub fn centered(width: u32, height: u32, size: SurfaceSize) -> Rect {
    let width = width.min(size.width);
    let height = height.min(size.height);
    Rect {
        x: (size.width - width) / 2,
        y: (size.height - height) / 2,
        width,
        height,
    }
}
