//! Crop Workflow Integration Tests
//!
//! Full gesture sequences against a session, plus the session-to-export
//! pipeline over real pixels.

use crate::helpers::{
    TestSessionBuilder, assert_rect_eq, assert_within_bounds, default_session, drag, pos, rect,
};
use cropboard::export::crop_image;
use cropboard::geometry::SurfaceBounds;
use cropboard::types::{HandleZone, ResizeHandle};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

#[test]
fn test_resize_far_past_surface_is_clamped() {
    // Load an 800x600 image, grab the bottom-right handle, drag way past
    // the surface on both axes.
    let mut session = default_session();
    assert_rect_eq(session.rect(), rect(50.0, 50.0, 200.0, 150.0));

    drag(&mut session, pos(250.0, 200.0), pos(1000.0, 1000.0));

    // Position clamps before size: the oversized rect slides to the
    // origin and then caps at the full surface.
    let r = session.rect();
    assert_within_bounds(r, SurfaceBounds::new(800.0, 600.0));
    assert_rect_eq(r, rect(0.0, 0.0, 800.0, 600.0));
    assert!(session.gesture().is_idle());
}

#[test]
fn test_draw_then_move_then_resize_sequence() {
    let mut session = default_session();

    // Draw a fresh rectangle on empty canvas space.
    drag(&mut session, pos(400.0, 300.0), pos(500.0, 420.0));
    assert_rect_eq(session.rect(), rect(400.0, 300.0, 100.0, 120.0));

    // Grab the interior and move it.
    drag(&mut session, pos(450.0, 360.0), pos(470.0, 340.0));
    assert_rect_eq(session.rect(), rect(420.0, 280.0, 100.0, 120.0));

    // Widen it by the right edge.
    drag(&mut session, pos(520.0, 340.0), pos(580.0, 340.0));
    assert_rect_eq(session.rect(), rect(420.0, 280.0, 160.0, 120.0));
}

#[test]
fn test_move_against_each_surface_edge() {
    let mut session = default_session();

    drag(&mut session, pos(100.0, 100.0), pos(-200.0, 100.0));
    assert_eq!(session.rect().x, 0.0);

    drag(&mut session, pos(100.0, 100.0), pos(100.0, -200.0));
    assert_eq!(session.rect().y, 0.0);

    drag(&mut session, pos(100.0, 100.0), pos(2000.0, 2000.0));
    let r = session.rect();
    assert_eq!(r.right(), 800.0);
    assert_eq!(r.bottom(), 600.0);
    // The rectangle only ever translated.
    assert_eq!((r.w, r.h), (200.0, 150.0));
}

#[test]
fn test_draw_outside_surface_clamps_on_later_move() {
    let mut session = default_session();

    // Draw past the right edge; the live draw is unclamped.
    session.pointer_down(pos(700.0, 100.0));
    session.pointer_moved(pos(900.0, 250.0));
    session.pointer_released();
    assert_rect_eq(session.rect(), rect(700.0, 100.0, 200.0, 150.0));

    // The first move gesture pulls it back inside.
    drag(&mut session, pos(750.0, 150.0), pos(750.0, 150.0));
    assert_within_bounds(session.rect(), SurfaceBounds::new(800.0, 600.0));
}

#[test]
fn test_hover_advisory_tracks_rectangle_after_gesture() {
    let mut session = default_session();
    drag(&mut session, pos(250.0, 200.0), pos(400.0, 300.0));

    // The bottom-right handle lives where the rectangle ended up now.
    assert_eq!(
        session.zone_at(pos(400.0, 300.0)),
        HandleZone::Handle(ResizeHandle::BottomRight)
    );
    assert_eq!(session.zone_at(pos(250.0, 200.0)), HandleZone::Inside);
}

#[test]
fn test_session_to_export_pipeline() {
    // A 200x160 image with a marker pixel inside the region we will select.
    let mut buffer = RgbaImage::from_pixel(200, 160, Rgba([0, 0, 255, 255]));
    buffer.put_pixel(60, 50, Rgba([255, 255, 0, 255]));
    let image = DynamicImage::ImageRgba8(buffer);

    // Start from a small rectangle so the draw press lands on empty space.
    let mut session = TestSessionBuilder::new()
        .with_bounds(200.0, 160.0)
        .with_rect(rect(0.0, 0.0, 20.0, 20.0))
        .build();

    // Select the region by drawing from its bottom-right to its top-left.
    drag(&mut session, pos(190.0, 150.0), pos(40.0, 30.0));
    assert_rect_eq(session.rect(), rect(40.0, 30.0, 150.0, 120.0));

    let export_rect = session.export_rect().expect("selection has area");
    let cropped = crop_image(&image, export_rect).unwrap();

    assert_eq!(cropped.dimensions(), (150, 120));
    // Marker at (60,50) lands at (20,20) relative to the crop origin.
    assert_eq!(cropped.get_pixel(20, 20), Rgba([255, 255, 0, 255]));
}

#[test]
fn test_fresh_session_per_load_discards_old_selection() {
    let mut session = default_session();
    drag(&mut session, pos(400.0, 300.0), pos(500.0, 400.0));
    assert_rect_eq(session.rect(), rect(400.0, 300.0, 100.0, 100.0));

    // A new image load means a new session; the selection resets to the
    // default rectangle clamped to the new surface.
    let session = TestSessionBuilder::new().with_bounds(300.0, 200.0).build();
    let r = session.rect();
    assert_within_bounds(r, SurfaceBounds::new(300.0, 200.0));
    assert_rect_eq(r, rect(50.0, 50.0, 200.0, 150.0));
}
