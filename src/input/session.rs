//! The crop session - the owned interaction-state object.
//!
//! A [`CropSession`] owns the crop rectangle, the surface bounds, and the
//! active gesture, and consumes pointer events in surface-local
//! coordinates. Nothing in here touches a window or a renderer, so
//! sessions are cheap to construct in tests and several can exist side by
//! side.

use crate::constants::{DEFAULT_CROP_RECT, EDGE_TOLERANCE, MIN_CROP_HEIGHT, MIN_CROP_WIDTH};
use crate::geometry::{CropRect, SurfaceBounds, clamp_to_bounds};
use crate::input::hit::classify;
use crate::input::resize::apply_resize;
use crate::input::state::GestureState;
use crate::types::HandleZone;
use gpui::Point;

/// Interaction tuning knobs, sourced from settings at session creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropTolerances {
    /// Grab distance for edges and corners, in surface pixels
    pub edge_tolerance: f32,
    /// Minimum rectangle width enforced during resize
    pub min_width: f32,
    /// Minimum rectangle height enforced during resize
    pub min_height: f32,
}

impl Default for CropTolerances {
    fn default() -> Self {
        Self {
            edge_tolerance: EDGE_TOLERANCE,
            min_width: MIN_CROP_WIDTH,
            min_height: MIN_CROP_HEIGHT,
        }
    }
}

/// Owns the crop rectangle and drives it through pointer gestures.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSession {
    rect: CropRect,
    bounds: SurfaceBounds,
    tolerances: CropTolerances,
    gesture: GestureState,
}

impl CropSession {
    /// Create a session for a freshly loaded surface, with the default
    /// crop rectangle clamped into the new bounds.
    pub fn new(bounds: SurfaceBounds, tolerances: CropTolerances) -> Self {
        let (x, y, w, h) = DEFAULT_CROP_RECT;
        Self {
            rect: clamp_to_bounds(CropRect::new(x, y, w, h), bounds),
            bounds,
            tolerances,
            gesture: GestureState::Idle,
        }
    }

    /// Snapshot of the current rectangle.
    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn bounds(&self) -> SurfaceBounds {
        self.bounds
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn tolerances(&self) -> CropTolerances {
        self.tolerances
    }

    /// Replace the rectangle wholesale, clamped to the surface.
    pub fn set_rect(&mut self, rect: CropRect) {
        self.rect = clamp_to_bounds(rect, self.bounds);
    }

    /// Advisory classification of `p` against the current rectangle, for
    /// cursor hinting while idle.
    pub fn zone_at(&self, p: Point<f32>) -> HandleZone {
        classify(p, &self.rect, self.tolerances.edge_tolerance)
    }

    /// Pointer press: classify and enter the matching gesture.
    ///
    /// A press outside the rectangle starts a fresh draw, collapsing the
    /// rectangle to a zero-size box at the press point.
    pub fn pointer_down(&mut self, p: Point<f32>) {
        match self.zone_at(p) {
            HandleZone::Inside => {
                self.gesture
                    .start_moving(Point::new(p.x - self.rect.x, p.y - self.rect.y));
            }
            HandleZone::Handle(handle) => {
                self.gesture.start_resizing(handle);
            }
            HandleZone::Outside => {
                self.gesture.start_drawing(p);
                self.rect = CropRect::zero_at(p);
            }
        }
    }

    /// Pointer move: advance the active gesture. Returns whether the
    /// rectangle changed, so callers know when to repaint.
    ///
    /// Out-of-surface coordinates are not rejected; moving and resizing
    /// are clamped afterwards, and drawing is left unclamped (the anchor
    /// is in-bounds by construction, and the draw is clamped when it is
    /// consumed).
    pub fn pointer_moved(&mut self, p: Point<f32>) -> bool {
        match self.gesture {
            GestureState::Idle => false,
            GestureState::Drawing { anchor } => {
                self.rect = CropRect::spanning(anchor, p);
                true
            }
            GestureState::Moving { offset } => {
                let moved = CropRect {
                    x: p.x - offset.x,
                    y: p.y - offset.y,
                    ..self.rect
                };
                self.rect = clamp_to_bounds(moved, self.bounds);
                true
            }
            GestureState::Resizing { handle } => {
                let resized = apply_resize(
                    &self.rect,
                    handle,
                    p,
                    self.tolerances.min_width,
                    self.tolerances.min_height,
                );
                self.rect = clamp_to_bounds(resized, self.bounds);
                true
            }
        }
    }

    /// Pointer release: unconditionally back to idle, whatever was active.
    pub fn pointer_released(&mut self) {
        self.gesture.reset();
    }

    /// The committed rectangle for pixel extraction, or `None` while the
    /// selection covers less than a pixel - the caller-checked export
    /// precondition.
    pub fn export_rect(&self) -> Option<CropRect> {
        self.rect.has_area().then_some(self.rect)
    }
}
