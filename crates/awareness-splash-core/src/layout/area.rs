use crate::layout::{Rect, SurfaceSize, percent_of};

/// Share of the countdown area given to the title line, the timer takes the rest.
pub const TITLE_FRACTION_PERCENT: u8 = 38;

/// Countdown region as percentages of the surface (each 0-100).
///
/// Values above 100 are treated as 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownGeometry {
    /// Region width.
    pub width_percent: u8,
    /// Region height.
    pub height_percent: u8,
    /// Distance of the left edge from the surface's left edge.
    pub left_percent: u8,
    /// Distance of the top edge from the surface's top edge.
    pub top_percent: u8,
}

impl Default for CountdownGeometry {
    fn default() -> Self {
        Self {
            width_percent: 100,
            height_percent: 10,
            left_percent: 0,
            top_percent: 85,
        }
    }
}

/// Pixel layout of the title and timer text, derived from the surface size.
///
/// Never cache this across a resize; call [`CountdownArea::compute`] again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownArea {
    /// Whole region.
    pub bounds: Rect,
    /// Title line at the top of the region.
    pub title: Rect,
    /// Remaining-time text below the title.
    pub timer: Rect,
}

impl CountdownArea {
    /// Lay out the region inside `size`.
    ///
    /// Offsets are pulled back so the region never extends past the right or
    /// bottom edge.
    pub fn compute(geometry: CountdownGeometry, size: SurfaceSize) -> Self {
        let width = percent_of(size.width, geometry.width_percent);
        let height = percent_of(size.height, geometry.height_percent);
        let x = percent_of(size.width, geometry.left_percent).min(size.width - width);
        let y = percent_of(size.height, geometry.top_percent).min(size.height - height);

        let title_height = percent_of(height, TITLE_FRACTION_PERCENT);

        let bounds = Rect {
            x,
            y,
            width,
            height,
        };
        let title = Rect {
            x,
            y,
            width,
            height: title_height,
        };
        let timer = Rect {
            x,
            y: y + title_height,
            width,
            height: height - title_height,
        };

        Self {
            bounds,
            title,
            timer,
        }
    }
}
