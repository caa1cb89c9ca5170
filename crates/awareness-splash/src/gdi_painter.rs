//! Double-buffered GDI painting of one surface frame.
//!
//! Every frame is composed in a memory DC and blitted in one go so the
//! one-second timer update never flickers. The video child window's
//! rectangle is excluded from the blit.
#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

use awareness_splash_core::Rgb;

/// Face used for the title and timer.
pub(crate) const FONT_FACE: &str = "Segoe UI";
pub(crate) const FONT_WEIGHT_BOLD: i32 = 700;

/// GDI `COLORREF` layout: `0x00BBGGRR`.
pub(crate) fn colorref_value(color: Rgb) -> u32 {
    u32::from(color.r) | (u32::from(color.g) << 8) | (u32::from(color.b) << 16)
}

/// Negative (character-height) logical font size for `point_size` at `scale_factor`.
pub(crate) fn font_height(point_size: f32, scale_factor: f64) -> i32 {
    let pixels = f64::from(point_size) * 96.0 * scale_factor / 72.0;
    -(pixels.round().max(1.0) as i32)
}

#[cfg(target_os = "windows")]
pub(crate) use platform::paint;

#[cfg(target_os = "windows")]
mod platform {
    use super::{FONT_FACE, FONT_WEIGHT_BOLD, colorref_value, font_height};

    use awareness_splash_core::{
        CoreResult, DecodedImage, Rect, Rgb, Scene, SplashError, SurfaceSize, TextBlock,
    };

    use std::{mem, panic::Location};

    use error_location::ErrorLocation;
    use windows::Win32::{
        Foundation::{COLORREF, HWND, RECT},
        Graphics::Gdi::{
            BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BitBlt, CreateCompatibleBitmap,
            CreateCompatibleDC, CreateFontIndirectW, CreateSolidBrush, DIB_RGB_COLORS,
            DT_CENTER, DT_NOPREFIX, DT_SINGLELINE, DT_VCENTER, DeleteDC, DeleteObject, DrawTextW,
            ExcludeClipRect, FillRect, GetDC, HALFTONE, HDC, LOGFONTW, ReleaseDC, SRCCOPY,
            SelectObject, SetBkMode, SetBrushOrgEx, SetStretchBltMode, SetTextColor,
            StretchDIBits, TRANSPARENT,
        },
    };

    /// Paint `scene` onto the client area of `hwnd`.
    #[track_caller]
    pub(crate) fn paint(
        hwnd: HWND,
        size: SurfaceSize,
        scale_factor: f64,
        scene: &Scene<'_>,
    ) -> CoreResult<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        // SAFETY: `hwnd` is a live window owned by the calling thread; the DC
        // is released before returning.
        unsafe {
            let window_dc = GetDC(hwnd);
            if window_dc.0 == 0 {
                return Err(render_failed("GetDC returned no device context"));
            }
            let result = paint_buffered(window_dc, size, scale_factor, scene);
            let _ = ReleaseDC(hwnd, window_dc);
            result
        }
    }

    #[track_caller]
    unsafe fn paint_buffered(
        window_dc: HDC,
        size: SurfaceSize,
        scale_factor: f64,
        scene: &Scene<'_>,
    ) -> CoreResult<()> {
        let width = size.width as i32;
        let height = size.height as i32;

        // SAFETY: every GDI object created here is selected out and deleted below.
        unsafe {
            let memory_dc = CreateCompatibleDC(window_dc);
            if memory_dc.0 == 0 {
                return Err(render_failed("CreateCompatibleDC failed"));
            }

            let bitmap = CreateCompatibleBitmap(window_dc, width, height);
            if bitmap.0 == 0 {
                let _ = DeleteDC(memory_dc);
                return Err(render_failed("CreateCompatibleBitmap failed"));
            }
            let dc = HDC(memory_dc.0);
            let previous = SelectObject(dc, bitmap);

            fill(dc, full_rect(width, height), scene.background_color);

            let image_drawn = match scene.background {
                Some((image, rect)) => draw_image(dc, image, rect),
                None => true,
            };

            let _ = SetBkMode(dc, TRANSPARENT);
            draw_text(dc, &scene.title, scale_factor);
            draw_text(dc, &scene.timer, scale_factor);

            if let Some(video) = scene.video_rect {
                let video = to_rect(video);
                let _ =
                    ExcludeClipRect(window_dc, video.left, video.top, video.right, video.bottom);
            }

            let blit = BitBlt(window_dc, 0, 0, width, height, dc, 0, 0, SRCCOPY);

            let _ = SelectObject(dc, previous);
            let _ = DeleteObject(bitmap);
            let _ = DeleteDC(memory_dc);

            blit.map_err(|e| render_failed(&format!("BitBlt failed: {e}")))?;

            if !image_drawn {
                return Err(render_failed("StretchDIBits copied no scan lines"));
            }
        }

        Ok(())
    }

    unsafe fn fill(dc: HDC, rect: RECT, color: Rgb) {
        // SAFETY: the brush is deleted after use.
        unsafe {
            let brush = CreateSolidBrush(COLORREF(colorref_value(color)));
            let _ = FillRect(dc, &rect, brush);
            let _ = DeleteObject(brush);
        }
    }

    unsafe fn draw_image(dc: HDC, image: &DecodedImage, target: Rect) -> bool {
        let mut info = BITMAPINFO::default();
        info.bmiHeader = BITMAPINFOHEADER {
            biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: image.width() as i32,
            // Negative height: top-down rows, matching the decoded buffer.
            biHeight: -(image.height() as i32),
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        };

        // SAFETY: `pixels` holds width * height BGRA pixels described by `info`.
        let lines = unsafe {
            let _ = SetStretchBltMode(dc, HALFTONE);
            let _ = SetBrushOrgEx(dc, 0, 0, None);
            StretchDIBits(
                dc,
                target.x as i32,
                target.y as i32,
                target.width as i32,
                target.height as i32,
                0,
                0,
                image.width() as i32,
                image.height() as i32,
                Some(image.pixels().as_ptr().cast()),
                &info,
                DIB_RGB_COLORS,
                SRCCOPY,
            )
        };
        lines != 0
    }

    unsafe fn draw_text(dc: HDC, block: &TextBlock<'_>, scale_factor: f64) {
        if block.text.is_empty() {
            return;
        }

        let mut font = LOGFONTW {
            lfHeight: font_height(block.point_size, scale_factor),
            lfWeight: FONT_WEIGHT_BOLD,
            ..Default::default()
        };
        for (slot, unit) in font.lfFaceName.iter_mut().zip(FONT_FACE.encode_utf16()) {
            *slot = unit;
        }

        let mut text: Vec<u16> = block.text.encode_utf16().collect();
        let mut rect = to_rect(block.rect);

        // SAFETY: the font is selected out and deleted after drawing.
        unsafe {
            let handle = CreateFontIndirectW(&font);
            let previous = SelectObject(dc, handle);
            let _ = SetTextColor(dc, COLORREF(colorref_value(block.color)));
            let _ = DrawTextW(
                dc,
                &mut text,
                &mut rect,
                DT_CENTER | DT_VCENTER | DT_SINGLELINE | DT_NOPREFIX,
            );
            let _ = SelectObject(dc, previous);
            let _ = DeleteObject(handle);
        }
    }

    fn full_rect(width: i32, height: i32) -> RECT {
        RECT {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    fn to_rect(rect: Rect) -> RECT {
        RECT {
            left: rect.x as i32,
            top: rect.y as i32,
            right: rect.right() as i32,
            bottom: rect.bottom() as i32,
        }
    }

    #[track_caller]
    fn render_failed(reason: &str) -> SplashError {
        SplashError::RenderFailed {
            reason: reason.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
