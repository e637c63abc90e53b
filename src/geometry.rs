//! Crop rectangle geometry - the value types and bounds clamping.
//!
//! Everything in here is pure: no rendering, no event state, just
//! rectangle math over surface-local (image pixel) coordinates.

use crate::constants::MIN_CLAMPED_SIZE;
use gpui::Point;

/// An axis-aligned crop rectangle in surface-local pixel coordinates.
///
/// `x,y` is the top-left corner. Sizes are conceptually non-negative;
/// gestures always hand out normalized rectangles, so a negative size
/// never escapes a pointer-move handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CropRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-size rectangle anchored at `p` - the seed of a draw gesture.
    pub fn zero_at(p: Point<f32>) -> Self {
        Self::new(p.x, p.y, 0.0, 0.0)
    }

    /// Normalized rectangle spanning two arbitrary points.
    ///
    /// The origin is the per-axis minimum, the size the absolute
    /// difference, so the span is valid whichever direction the pointer
    /// travelled from the anchor.
    pub fn spanning(a: Point<f32>, b: Point<f32>) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn origin(&self) -> Point<f32> {
        Point::new(self.x, self.y)
    }

    /// True when the rectangle covers at least one full pixel per axis.
    pub fn has_area(&self) -> bool {
        self.w >= 1.0 && self.h >= 1.0
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, p: Point<f32>) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Pixel dimensions of the loaded image - the hard constraint region for
/// the crop rectangle. Set once per load, immutable until the next load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Clamp `rect` into `bounds`.
///
/// Position is clamped before size: a rectangle dragged past the edge
/// shrinks against it instead of teleporting back inside. Dimensions are
/// floored at [`MIN_CLAMPED_SIZE`], so the result degenerates to a 1x1
/// box only under degenerate bounds. Total - never fails.
pub fn clamp_to_bounds(rect: CropRect, bounds: SurfaceBounds) -> CropRect {
    let x = rect.x.min(bounds.width - rect.w).max(0.0);
    let y = rect.y.min(bounds.height - rect.h).max(0.0);
    let w = rect.w.min(bounds.width - x).max(MIN_CLAMPED_SIZE);
    let h = rect.h.min(bounds.height - y).max(MIN_CLAMPED_SIZE);
    CropRect { x, y, w, h }
}
