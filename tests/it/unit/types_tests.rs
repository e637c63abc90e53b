//! Unit tests for the zone and handle enums.

use cropboard::types::{HandleZone, ResizeHandle};
use gpui::CursorStyle;

#[test]
fn test_all_lists_every_handle_once() {
    assert_eq!(ResizeHandle::ALL.len(), 8);
    for (i, a) in ResizeHandle::ALL.iter().enumerate() {
        for b in &ResizeHandle::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_corner_classification() {
    assert!(ResizeHandle::TopLeft.is_corner());
    assert!(ResizeHandle::TopRight.is_corner());
    assert!(ResizeHandle::BottomLeft.is_corner());
    assert!(ResizeHandle::BottomRight.is_corner());
    assert!(!ResizeHandle::Top.is_corner());
    assert!(!ResizeHandle::Bottom.is_corner());
    assert!(!ResizeHandle::Left.is_corner());
    assert!(!ResizeHandle::Right.is_corner());
}

#[test]
fn test_cursor_styles() {
    assert_eq!(HandleZone::Outside.cursor_style(), CursorStyle::Crosshair);
    assert_eq!(HandleZone::Inside.cursor_style(), CursorStyle::OpenHand);

    // Opposite corners share a diagonal cursor.
    assert_eq!(
        HandleZone::Handle(ResizeHandle::TopLeft).cursor_style(),
        HandleZone::Handle(ResizeHandle::BottomRight).cursor_style()
    );
    assert_eq!(
        HandleZone::Handle(ResizeHandle::TopRight).cursor_style(),
        HandleZone::Handle(ResizeHandle::BottomLeft).cursor_style()
    );

    assert_eq!(
        HandleZone::Handle(ResizeHandle::Top).cursor_style(),
        CursorStyle::ResizeUpDown
    );
    assert_eq!(
        HandleZone::Handle(ResizeHandle::Left).cursor_style(),
        CursorStyle::ResizeLeftRight
    );
}
