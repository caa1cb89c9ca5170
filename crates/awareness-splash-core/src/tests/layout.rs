use crate::{CountdownArea, CountdownGeometry, Rect, SurfaceSize, centered, zoom_fit};

use proptest::prelude::*;

/// WHAT: Default geometry lays out a bottom band on a 1080p display
/// WHY: Pins the pixel maths the title/timer split depends on
#[test]
fn given_default_geometry_when_computing_full_hd_then_bottom_band() {
    let area = CountdownArea::compute(
        CountdownGeometry::default(),
        SurfaceSize {
            width: 1920,
            height: 1080,
        },
    );

    assert_eq!(
        area.bounds,
        Rect {
            x: 0,
            y: 918,
            width: 1920,
            height: 108
        }
    );
    assert_eq!(area.title.height, 41);
    assert_eq!(area.timer.y, 918 + 41);
    assert_eq!(area.title.height + area.timer.height, area.bounds.height);
}

/// WHAT: Offsets that would push the region off-screen are pulled back
/// WHY: The countdown must never be clipped
#[test]
fn given_offsets_overflowing_when_computing_then_clamped_inside() {
    let geometry = CountdownGeometry {
        width_percent: 60,
        height_percent: 30,
        left_percent: 90,
        top_percent: 95,
    };
    let size = SurfaceSize {
        width: 1000,
        height: 500,
    };

    let area = CountdownArea::compute(geometry, size);

    assert_eq!(area.bounds.x, 400);
    assert_eq!(area.bounds.y, 350);
    assert!(area.bounds.fits_within(size.width, size.height));
}

/// WHAT: Layout follows the surface size it is given
/// WHY: A DPI change or resize must produce a fresh rectangle
#[test]
fn given_resized_surface_when_recomputing_then_area_scales() {
    let geometry = CountdownGeometry::default();
    let small = CountdownArea::compute(
        geometry,
        SurfaceSize {
            width: 1280,
            height: 720,
        },
    );
    let large = CountdownArea::compute(
        geometry,
        SurfaceSize {
            width: 2560,
            height: 1440,
        },
    );

    assert_eq!(large.bounds.width, small.bounds.width * 2);
    assert_eq!(large.bounds.height, small.bounds.height * 2);
}

/// WHAT: Wide images are letterboxed top and bottom
/// WHY: Background images keep their aspect ratio
#[test]
fn given_wide_image_when_fitting_then_letterboxed() {
    let size = SurfaceSize {
        width: 1000,
        height: 1000,
    };

    let rect = zoom_fit(200, 100, size);

    assert_eq!(
        rect,
        Some(Rect {
            x: 0,
            y: 250,
            width: 1000,
            height: 500
        })
    );
}

/// WHAT: Degenerate images produce no placement
/// WHY: Avoid division by zero on empty decodes
#[test]
fn given_empty_image_when_fitting_then_none() {
    assert_eq!(zoom_fit(0, 10, SurfaceSize::default()), None);
    assert_eq!(
        zoom_fit(
            0,
            10,
            SurfaceSize {
                width: 10,
                height: 10
            }
        ),
        None
    );
}

/// WHAT: Oversized video boxes shrink to the surface
/// WHY: The video layer must stay on its own display
#[test]
fn given_video_larger_than_surface_when_centering_then_clamped() {
    let size = SurfaceSize {
        width: 640,
        height: 480,
    };

    let rect = centered(1920, 1080, size);

    assert_eq!(
        rect,
        Rect {
            x: 0,
            y: 0,
            width: 640,
            height: 480
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Countdown region is always contained in the surface.
    #[test]
    fn countdown_area_always_within_surface(
        width in 0u32..10_000,
        height in 0u32..10_000,
        width_percent in 0u8..=255,
        height_percent in 0u8..=255,
        left_percent in 0u8..=255,
        top_percent in 0u8..=255,
    ) {
        let size = SurfaceSize { width, height };
        let geometry = CountdownGeometry { width_percent, height_percent, left_percent, top_percent };

        let area = CountdownArea::compute(geometry, size);

        prop_assert!(area.bounds.fits_within(width, height));
        prop_assert!(area.title.fits_within(width, height));
        prop_assert!(area.timer.fits_within(width, height));
        prop_assert_eq!(area.title.bottom(), area.timer.y);
        prop_assert_eq!(area.timer.bottom(), area.bounds.bottom());
    }

    /// Zoom-fit placement is contained and touches at least one pair of edges.
    #[test]
    fn zoom_fit_always_within_surface(
        image_width in 1u32..8_000,
        image_height in 1u32..8_000,
        width in 1u32..8_000,
        height in 1u32..8_000,
    ) {
        let size = SurfaceSize { width, height };

        let rect = zoom_fit(image_width, image_height, size);

        prop_assert!(rect.is_some());
        if let Some(rect) = rect {
            prop_assert!(rect.fits_within(width, height));
            prop_assert!(rect.width == width || rect.height == height);
        }
    }
}
