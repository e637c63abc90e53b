//! Coordinate conversion between window space and surface space.
//!
//! The loaded image is displayed letterboxed inside the canvas area; all
//! crop logic runs in surface-local (image pixel) coordinates. This module
//! centralizes the two mappings so the input handlers and the renderer
//! can never disagree about where the image sits.

use crate::constants::{CANVAS_PADDING, FOOTER_HEIGHT, HEADER_HEIGHT, PREVIEW_PANEL_WIDTH};
use crate::geometry::{CropRect, SurfaceBounds};
use gpui::{Bounds, Pixels, Point, Size, point, px, size};

/// The region of the window the image canvas occupies (between header and
/// footer, left of the preview panel), given the window size.
pub fn canvas_area(window_size: Size<Pixels>) -> Bounds<Pixels> {
    let width = (f32::from(window_size.width) - PREVIEW_PANEL_WIDTH - CANVAS_PADDING * 2.0).max(0.0);
    let height =
        (f32::from(window_size.height) - HEADER_HEIGHT - FOOTER_HEIGHT - CANVAS_PADDING * 2.0)
            .max(0.0);
    Bounds {
        origin: point(px(CANVAS_PADDING), px(HEADER_HEIGHT + CANVAS_PADDING)),
        size: size(px(width), px(height)),
    }
}

/// The letterboxed screen rectangle the image is displayed in, plus the
/// scale factor between surface pixels and screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageViewport {
    /// Top-left of the displayed image, window-relative
    pub origin: Point<Pixels>,
    /// Screen pixels per surface pixel
    pub scale: f32,
    /// Surface dimensions backing this viewport
    pub surface: SurfaceBounds,
}

impl ImageViewport {
    /// Fit `surface` into `area`, centered on both axes.
    pub fn compute(area: Bounds<Pixels>, surface: SurfaceBounds) -> Self {
        let avail_w = f32::from(area.size.width);
        let avail_h = f32::from(area.size.height);
        let scale = if surface.width > 0.0 && surface.height > 0.0 {
            (avail_w / surface.width).min(avail_h / surface.height)
        } else {
            1.0
        };
        let display_w = surface.width * scale;
        let display_h = surface.height * scale;
        let origin = point(
            px(f32::from(area.origin.x) + (avail_w - display_w) / 2.0),
            px(f32::from(area.origin.y) + (avail_h - display_h) / 2.0),
        );
        Self {
            origin,
            scale,
            surface,
        }
    }

    /// Viewport for the given window size, letterboxing `surface` into the
    /// canvas area.
    pub fn for_window(window_size: Size<Pixels>, surface: SurfaceBounds) -> Self {
        Self::compute(canvas_area(window_size), surface)
    }

    /// The displayed image rectangle in window coordinates.
    pub fn display_bounds(&self) -> Bounds<Pixels> {
        Bounds {
            origin: self.origin,
            size: size(
                px(self.surface.width * self.scale),
                px(self.surface.height * self.scale),
            ),
        }
    }

    /// Convert a window position to surface-local coordinates.
    pub fn window_to_surface(&self, pos: Point<Pixels>) -> Point<f32> {
        Point::new(
            (f32::from(pos.x) - f32::from(self.origin.x)) / self.scale,
            (f32::from(pos.y) - f32::from(self.origin.y)) / self.scale,
        )
    }

    /// Convert a surface-local point to window coordinates.
    pub fn surface_to_window(&self, p: Point<f32>) -> Point<Pixels> {
        point(
            px(f32::from(self.origin.x) + p.x * self.scale),
            px(f32::from(self.origin.y) + p.y * self.scale),
        )
    }

    /// Convert a surface-local rectangle to window bounds.
    pub fn surface_rect_to_window(&self, rect: CropRect) -> Bounds<Pixels> {
        Bounds {
            origin: self.surface_to_window(rect.origin()),
            size: size(px(rect.w * self.scale), px(rect.h * self.scale)),
        }
    }
}
