//! Core types for the crop interaction engine.
//!
//! This module defines the closed enumerations shared between the hit
//! classifier, the gesture state machine, and the renderer's cursor
//! hinting. Closed enums give every dispatch site compile-time
//! completeness checking.

use gpui::CursorStyle;

/// One of the eight grab handles on the crop rectangle.
///
/// Corner handles move two edges at once; edge handles move one. The side
/// opposite the handle stays anchored during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl ResizeHandle {
    /// All handles, corners first - the order the classifier checks them in.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
        ResizeHandle::Top,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
        ResizeHandle::Right,
    ];

    /// Returns true for the four corner handles.
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft
                | ResizeHandle::TopRight
                | ResizeHandle::BottomLeft
                | ResizeHandle::BottomRight
        )
    }
}

/// Where a pointer sits relative to the crop rectangle.
///
/// Recomputed from the live pointer position on every query; never stored
/// in the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleZone {
    /// Not over the rectangle or any handle
    Outside,
    /// Over the rectangle interior (grab to move)
    Inside,
    /// Over a resize handle
    Handle(ResizeHandle),
}

impl HandleZone {
    /// Cursor to show while hovering this zone.
    pub fn cursor_style(&self) -> CursorStyle {
        match self {
            HandleZone::Outside => CursorStyle::Crosshair,
            HandleZone::Inside => CursorStyle::OpenHand,
            HandleZone::Handle(handle) => match handle {
                ResizeHandle::TopLeft | ResizeHandle::BottomRight => {
                    CursorStyle::ResizeUpLeftDownRight
                }
                ResizeHandle::TopRight | ResizeHandle::BottomLeft => {
                    CursorStyle::ResizeUpRightDownLeft
                }
                ResizeHandle::Top | ResizeHandle::Bottom => CursorStyle::ResizeUpDown,
                ResizeHandle::Left | ResizeHandle::Right => CursorStyle::ResizeLeftRight,
            },
        }
    }
}
