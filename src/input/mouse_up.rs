//! Mouse up event handling - end the active gesture.

use crate::app::Cropboard;
use crate::input::coords::ImageViewport;
use gpui::{Context, MouseUpEvent, Window};

impl Cropboard {
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(bounds) = self.editor.image.as_ref().map(|img| img.bounds) else {
            return;
        };
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };

        // Release always returns to idle, whatever was active.
        session.pointer_released();

        let viewport = ImageViewport::for_window(window.bounds().size, bounds);
        self.editor.hover_zone = session.zone_at(viewport.window_to_surface(event.position));
        cx.notify();
    }
}
