//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSessionBuilder` - Builder pattern for creating crop sessions
//! - Gesture helpers like `drag()` for press-move-release sequences
//! - Common fixtures and assertion helpers

use cropboard::geometry::{CropRect, SurfaceBounds};
use cropboard::input::{CropSession, CropTolerances};
use gpui::Point;

/// Surface used by most tests, matching the end-to-end scenario.
pub const TEST_SURFACE: (f32, f32) = (800.0, 600.0);

// ============================================================================
// TestSessionBuilder - Builder pattern for creating crop sessions
// ============================================================================

/// Builder for creating crop sessions with custom bounds and tolerances.
///
/// # Example
/// ```ignore
/// let session = TestSessionBuilder::new()
///     .with_bounds(1024.0, 768.0)
///     .with_rect(CropRect::new(10.0, 10.0, 100.0, 100.0))
///     .build();
/// ```
pub struct TestSessionBuilder {
    bounds: SurfaceBounds,
    tolerances: CropTolerances,
    rect: Option<CropRect>,
}

impl Default for TestSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSessionBuilder {
    /// Create a builder over the default 800x600 test surface.
    pub fn new() -> Self {
        Self {
            bounds: SurfaceBounds::new(TEST_SURFACE.0, TEST_SURFACE.1),
            tolerances: CropTolerances::default(),
            rect: None,
        }
    }

    /// Set the surface bounds.
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = SurfaceBounds::new(width, height);
        self
    }

    /// Replace the starting rectangle (clamped to the surface).
    pub fn with_rect(mut self, rect: CropRect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Set the edge grab tolerance.
    pub fn with_edge_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerances.edge_tolerance = tolerance;
        self
    }

    /// Set the minimum crop size.
    pub fn with_min_size(mut self, min_width: f32, min_height: f32) -> Self {
        self.tolerances.min_width = min_width;
        self.tolerances.min_height = min_height;
        self
    }

    /// Build the session.
    pub fn build(self) -> CropSession {
        let mut session = CropSession::new(self.bounds, self.tolerances);
        if let Some(rect) = self.rect {
            session.set_rect(rect);
        }
        session
    }
}

// ============================================================================
// Standalone helper functions
// ============================================================================

/// Session over the 800x600 surface with the default rectangle.
pub fn default_session() -> CropSession {
    TestSessionBuilder::new().build()
}

/// Shorthand for a surface-local point.
pub fn pos(x: f32, y: f32) -> Point<f32> {
    Point::new(x, y)
}

/// Shorthand for a crop rectangle.
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> CropRect {
    CropRect::new(x, y, w, h)
}

/// Run a full press-move-release gesture through the session.
pub fn drag(session: &mut CropSession, from: Point<f32>, to: Point<f32>) {
    session.pointer_down(from);
    session.pointer_moved(to);
    session.pointer_released();
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two rectangles are equal within a small epsilon per component.
pub fn assert_rect_eq(actual: CropRect, expected: CropRect) {
    const EPSILON: f32 = 1e-4;
    let close = (actual.x - expected.x).abs() < EPSILON
        && (actual.y - expected.y).abs() < EPSILON
        && (actual.w - expected.w).abs() < EPSILON
        && (actual.h - expected.h).abs() < EPSILON;
    assert!(close, "Expected {expected:?}, got {actual:?}");
}

/// Assert a rectangle lies fully inside the given bounds.
pub fn assert_within_bounds(rect: CropRect, bounds: SurfaceBounds) {
    assert!(rect.x >= 0.0, "Left edge out of bounds: {rect:?}");
    assert!(rect.y >= 0.0, "Top edge out of bounds: {rect:?}");
    assert!(
        rect.x + rect.w <= bounds.width,
        "Right edge out of bounds: {rect:?} vs {bounds:?}"
    );
    assert!(
        rect.y + rect.h <= bounds.height,
        "Bottom edge out of bounds: {rect:?} vs {bounds:?}"
    );
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_session() {
        let session = default_session();
        assert_rect_eq(session.rect(), rect(50.0, 50.0, 200.0, 150.0));
        assert!(session.gesture().is_idle());
    }

    #[test]
    fn test_builder_with_rect() {
        let session = TestSessionBuilder::new()
            .with_rect(rect(10.0, 20.0, 30.0, 40.0))
            .build();
        assert_rect_eq(session.rect(), rect(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_builder_with_min_size() {
        let session = TestSessionBuilder::new().with_min_size(5.0, 7.0).build();
        assert_eq!(session.tolerances().min_width, 5.0);
        assert_eq!(session.tolerances().min_height, 7.0);
    }
}
