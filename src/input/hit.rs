//! Hit classification - maps a pointer position to a [`HandleZone`].
//!
//! The check order is a contract, not an accident: corner and edge grab
//! zones overlap geometrically near each corner, and a point inside the
//! overlap must always classify as the corner. Checking edges first would
//! make every corner handle unreachable, since a point satisfying both of
//! a corner's proximity predicates also satisfies each individual edge
//! predicate.

use crate::geometry::CropRect;
use crate::types::{HandleZone, ResizeHandle};
use gpui::Point;

/// Classify `p` against `rect`.
///
/// `edge_tolerance` is the grab distance in surface pixels (strict `<`).
/// Pure function of its inputs; callers re-query on every pointer move.
pub fn classify(p: Point<f32>, rect: &CropRect, edge_tolerance: f32) -> HandleZone {
    let in_x = p.x >= rect.x && p.x <= rect.right();
    let in_y = p.y >= rect.y && p.y <= rect.bottom();

    let near_top = (p.y - rect.y).abs() < edge_tolerance;
    let near_bottom = (p.y - rect.bottom()).abs() < edge_tolerance;
    let near_left = (p.x - rect.x).abs() < edge_tolerance;
    let near_right = (p.x - rect.right()).abs() < edge_tolerance;

    // Corners win over edges; no containment requirement.
    if near_top && near_left {
        return HandleZone::Handle(ResizeHandle::TopLeft);
    }
    if near_top && near_right {
        return HandleZone::Handle(ResizeHandle::TopRight);
    }
    if near_bottom && near_left {
        return HandleZone::Handle(ResizeHandle::BottomLeft);
    }
    if near_bottom && near_right {
        return HandleZone::Handle(ResizeHandle::BottomRight);
    }

    // Edges need containment on the perpendicular axis.
    if near_top && in_x {
        return HandleZone::Handle(ResizeHandle::Top);
    }
    if near_bottom && in_x {
        return HandleZone::Handle(ResizeHandle::Bottom);
    }
    if near_left && in_y {
        return HandleZone::Handle(ResizeHandle::Left);
    }
    if near_right && in_y {
        return HandleZone::Handle(ResizeHandle::Right);
    }

    if in_x && in_y {
        return HandleZone::Inside;
    }

    HandleZone::Outside
}
