//! Resize transforms - one anchored rule per handle.
//!
//! Each handle drags its own side(s) to the live pointer while the
//! opposite side stays fixed. The table reads the rectangle as it was
//! before this update; `p` is the live pointer in surface coordinates.

use crate::geometry::CropRect;
use crate::types::ResizeHandle;
use gpui::Point;

/// Apply one resize step for `handle`, then enforce the minimum size.
///
/// The size pin happens after the origin has already been taken from the
/// raw pointer position, and the origin is NOT re-derived from the pinned
/// size. At the minimum, the dragged edge therefore lands past the
/// pointer. That overshoot is long-standing behavior users may rely on;
/// changing it is a product decision, not a cleanup.
pub fn apply_resize(
    rect: &CropRect,
    handle: ResizeHandle,
    p: Point<f32>,
    min_w: f32,
    min_h: f32,
) -> CropRect {
    let mut next = match handle {
        ResizeHandle::TopLeft => CropRect {
            x: p.x,
            y: p.y,
            w: rect.right() - p.x,
            h: rect.bottom() - p.y,
        },
        ResizeHandle::TopRight => CropRect {
            x: rect.x,
            y: p.y,
            w: p.x - rect.x,
            h: rect.bottom() - p.y,
        },
        ResizeHandle::BottomLeft => CropRect {
            x: p.x,
            y: rect.y,
            w: rect.right() - p.x,
            h: p.y - rect.y,
        },
        ResizeHandle::BottomRight => CropRect {
            x: rect.x,
            y: rect.y,
            w: p.x - rect.x,
            h: p.y - rect.y,
        },
        ResizeHandle::Top => CropRect {
            x: rect.x,
            y: p.y,
            w: rect.w,
            h: rect.bottom() - p.y,
        },
        ResizeHandle::Bottom => CropRect {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: p.y - rect.y,
        },
        ResizeHandle::Left => CropRect {
            x: p.x,
            y: rect.y,
            w: rect.right() - p.x,
            h: rect.h,
        },
        ResizeHandle::Right => CropRect {
            x: rect.x,
            y: rect.y,
            w: p.x - rect.x,
            h: rect.h,
        },
    };

    next.w = next.w.max(min_w);
    next.h = next.h.max(min_h);
    next
}
