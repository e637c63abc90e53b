//! Mouse down event handling - gesture selection.
//!
//! A press picks the gesture: interior starts a move, a handle starts a
//! resize, anywhere else starts drawing a fresh rectangle at the press
//! point. The classification itself lives in the session; this file only
//! translates coordinates.

use crate::app::Cropboard;
use crate::input::coords::ImageViewport;
use crate::profile_scope;
use gpui::{Context, MouseDownEvent, Window};

impl Cropboard {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        let Some(bounds) = self.editor.image.as_ref().map(|img| img.bounds) else {
            return;
        };
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };

        let viewport = ImageViewport::for_window(window.bounds().size, bounds);
        let pos = viewport.window_to_surface(event.position);

        session.pointer_down(pos);
        cx.notify();
    }
}
