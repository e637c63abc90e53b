//! Mouse move handling - drive the active gesture, or hint the cursor.
//!
//! Mouse move is the hot path during a drag (60+ events per second), so
//! this avoids any work beyond the session update and only notifies when
//! something visible changed.

use crate::app::Cropboard;
use crate::input::coords::ImageViewport;
use crate::profile_scope;
use gpui::{Context, MouseMoveEvent, Window};

impl Cropboard {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        let Some(bounds) = self.editor.image.as_ref().map(|img| img.bounds) else {
            return;
        };
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };

        let viewport = ImageViewport::for_window(window.bounds().size, bounds);
        let pos = viewport.window_to_surface(event.position);

        if session.gesture().is_active() {
            if session.pointer_moved(pos) {
                cx.notify();
            }
        } else {
            // Idle: only the advisory zone for cursor styling changes.
            let zone = session.zone_at(pos);
            if zone != self.editor.hover_zone {
                self.editor.hover_zone = zone;
                cx.notify();
            }
        }
    }
}
