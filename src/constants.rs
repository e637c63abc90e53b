//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Crop Interaction
// ============================================================================

/// Distance from an edge (in surface pixels) within which a pointer grabs it
pub const EDGE_TOLERANCE: f32 = 6.0;

/// Radius of the corner handle dots drawn on the crop border
pub const HANDLE_RADIUS: f32 = 4.0;

/// Minimum crop rectangle width enforced during resize
pub const MIN_CROP_WIDTH: f32 = 20.0;

/// Minimum crop rectangle height enforced during resize
pub const MIN_CROP_HEIGHT: f32 = 20.0;

/// Crop rectangle applied whenever a new image is loaded, as (x, y, w, h)
pub const DEFAULT_CROP_RECT: (f32, f32, f32, f32) = (50.0, 50.0, 200.0, 150.0);

/// Floor for clamped rectangle dimensions; clamping never produces less
pub const MIN_CLAMPED_SIZE: f32 = 1.0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Height of the footer/status bar in pixels
pub const FOOTER_HEIGHT: f32 = 28.0;

/// Width of the live preview panel in pixels
pub const PREVIEW_PANEL_WIDTH: f32 = 260.0;

/// Padding around the displayed image inside the canvas area
pub const CANVAS_PADDING: f32 = 16.0;

/// Stroke width of the crop rectangle border
pub const CROP_BORDER_WIDTH: f32 = 2.0;

/// Opacity of the dimming mask outside the crop rectangle
pub const MASK_OPACITY: f32 = 0.5;

// ============================================================================
// UI Spacing Constants (for visual consistency)
// ============================================================================

/// Border radius - Small (buttons)
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Padding - Small
pub const PADDING_SM: f32 = 8.0;

/// Padding - Medium
pub const PADDING_MD: f32 = 12.0;

/// Gap spacing - Medium
pub const GAP_MD: f32 = 8.0;

/// Button height - Small
pub const BUTTON_HEIGHT_SM: f32 = 28.0;
