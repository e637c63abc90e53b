//! Crop overlay painting - the dimming mask, border, and corner handles.
//!
//! Painted directly to the GPU inside a `canvas()` element, in window
//! coordinates derived from the same [`ImageViewport`] the input handlers
//! use. This runs every frame while a gesture is active, so it stays
//! allocation-free.

use crate::constants::{CROP_BORDER_WIDTH, MASK_OPACITY};
use crate::geometry::CropRect;
use crate::input::coords::ImageViewport;
use crate::profile_scope;
use gpui::{Bounds, Hsla, IntoElement, Styled, Window, canvas, hsla, point, px, quad, size};

/// Accent color for the crop border and handles (amber)
pub const ACCENT: Hsla = Hsla {
    h: 42.0 / 360.0,
    s: 0.97,
    l: 0.51,
    a: 1.0,
};

/// Dimming mask over the image outside the crop rectangle
const MASK: Hsla = Hsla {
    h: 0.0,
    s: 0.0,
    l: 0.0,
    a: MASK_OPACITY,
};

const TRANSPARENT: Hsla = Hsla {
    h: 0.0,
    s: 0.0,
    l: 0.0,
    a: 0.0,
};

/// Render the crop overlay for the current rectangle.
pub fn render_crop_overlay(
    viewport: ImageViewport,
    rect: CropRect,
    handle_radius: f32,
) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |_bounds, _data, window, _cx| {
            profile_scope!("paint_crop_overlay");
            paint_mask(window, &viewport, rect);
            paint_border(window, &viewport, rect);
            paint_handles(window, &viewport, rect, handle_radius);
        },
    )
    .absolute()
    .size_full()
}

fn rect_quad(x: f32, y: f32, w: f32, h: f32, color: Hsla) -> gpui::PaintQuad {
    quad(
        Bounds {
            origin: point(px(x), px(y)),
            size: size(px(w), px(h)),
        },
        px(0.0),
        color,
        px(0.0),
        TRANSPARENT,
        Default::default(),
    )
}

/// Dim the image around the crop rectangle with four bands.
fn paint_mask(window: &mut Window, viewport: &ImageViewport, rect: CropRect) {
    let display = viewport.display_bounds();
    let dx = f32::from(display.origin.x);
    let dy = f32::from(display.origin.y);
    let dw = f32::from(display.size.width);
    let dh = f32::from(display.size.height);

    let crop = viewport.surface_rect_to_window(rect);
    // Clip to the displayed image; a mid-draw rectangle can hang past it.
    let cx0 = f32::from(crop.origin.x).clamp(dx, dx + dw);
    let cy0 = f32::from(crop.origin.y).clamp(dy, dy + dh);
    let cx1 = (f32::from(crop.origin.x) + f32::from(crop.size.width)).clamp(dx, dx + dw);
    let cy1 = (f32::from(crop.origin.y) + f32::from(crop.size.height)).clamp(dy, dy + dh);

    // Top band
    window.paint_quad(rect_quad(dx, dy, dw, cy0 - dy, MASK));
    // Bottom band
    window.paint_quad(rect_quad(dx, cy1, dw, dy + dh - cy1, MASK));
    // Left band
    window.paint_quad(rect_quad(dx, cy0, cx0 - dx, cy1 - cy0, MASK));
    // Right band
    window.paint_quad(rect_quad(cx1, cy0, dx + dw - cx1, cy1 - cy0, MASK));
}

fn paint_border(window: &mut Window, viewport: &ImageViewport, rect: CropRect) {
    let crop = viewport.surface_rect_to_window(rect);
    window.paint_quad(quad(
        crop,
        px(0.0),
        TRANSPARENT,
        px(CROP_BORDER_WIDTH),
        ACCENT,
        Default::default(),
    ));
}

/// Corner handle dots, skipping any corner that sits off the image.
fn paint_handles(window: &mut Window, viewport: &ImageViewport, rect: CropRect, radius: f32) {
    let display = viewport.display_bounds();
    let corners = [
        (rect.x, rect.y),
        (rect.right(), rect.y),
        (rect.x, rect.bottom()),
        (rect.right(), rect.bottom()),
    ];
    for (sx, sy) in corners {
        let p = viewport.surface_to_window(gpui::Point::new(sx, sy));
        if !display.contains(&p) {
            continue;
        }
        window.paint_quad(quad(
            Bounds {
                origin: point(
                    px(f32::from(p.x) - radius),
                    px(f32::from(p.y) - radius),
                ),
                size: size(px(radius * 2.0), px(radius * 2.0)),
            },
            px(radius),
            ACCENT,
            px(1.0),
            hsla(0.0, 0.0, 1.0, 0.9),
            Default::default(),
        ));
    }
}
