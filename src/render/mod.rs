//! Rendering - the application window, canvas area, preview panel, and
//! crop overlay.
//!
//! This module is organized into:
//! - `canvas` - GPU painting of the crop overlay (mask, border, handles)
//! - `preview` - The live preview panel showing the cropped region
//! - the root `Render` impl wiring layout, listeners, and cursor hinting

mod canvas;
mod preview;

use crate::app::Cropboard;
use crate::constants::{
    BORDER_RADIUS_SM, BUTTON_HEIGHT_SM, FOOTER_HEIGHT, GAP_MD, HEADER_HEIGHT, PADDING_MD,
    PADDING_SM,
};
use crate::input::GestureState;
use crate::input::coords::ImageViewport;
use crate::types::HandleZone;
use canvas::render_crop_overlay;
use gpui::prelude::FluentBuilder;
use gpui::*;
use preview::render_preview_panel;

/// Fixed dark palette; cropboard has no theming layer.
pub(crate) mod palette {
    use gpui::Hsla;

    pub const BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.11,
        a: 1.0,
    };
    pub const PANEL_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.14,
        a: 1.0,
    };
    pub const BUTTON_BG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.22,
        a: 1.0,
    };
    pub const BUTTON_HOVER: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.28,
        a: 1.0,
    };
    pub const BORDER: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.25,
        a: 1.0,
    };
    pub const FG: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.92,
        a: 1.0,
    };
    pub const MUTED: Hsla = Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.6,
        a: 1.0,
    };
}

impl Render for Cropboard {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let viewport = self
            .editor
            .image
            .as_ref()
            .map(|img| ImageViewport::for_window(window.bounds().size, img.bounds));

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(palette::BG)
            .text_color(palette::FG)
            .child(self.render_header(cx))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_1()
                    .child(self.render_canvas_area(viewport, cx))
                    .child(render_preview_panel(self)),
            )
            .child(self.render_footer())
    }
}

impl Cropboard {
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .flex()
            .items_center()
            .gap(px(GAP_MD))
            .px(px(PADDING_MD))
            .bg(palette::PANEL_BG)
            .border_b_1()
            .border_color(palette::BORDER)
            .child(
                div()
                    .text_sm()
                    .text_color(palette::MUTED)
                    .child("Cropboard"),
            )
            .child(header_button("open-image", "Open Image", cx, |this, cx| {
                this.open_image(cx);
            }))
            .child(header_button("export-crop", "Export Crop", cx, |this, cx| {
                this.export_image(cx);
            }))
    }

    fn render_canvas_area(
        &self,
        viewport: Option<ImageViewport>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let area = div()
            .id("canvas-area")
            .relative()
            .flex_1()
            .overflow_hidden()
            .cursor(self.canvas_cursor())
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_drop(
                cx.listener(|this, paths: &ExternalPaths, _window, cx| {
                    let Some(path) = paths.paths().first().cloned() else {
                        return;
                    };
                    if let Err(e) = this.load_image(path) {
                        tracing::error!("{:#}", e);
                        this.ui.status = Some(format!("{e:#}"));
                    }
                    cx.notify();
                }),
            );

        match (&self.editor.image, &self.editor.session, viewport) {
            (Some(image), Some(session), Some(viewport)) => {
                let display = viewport.display_bounds();
                area.child(
                    // Absolute offsets are relative to the canvas area,
                    // which starts below the header.
                    img(image.path.clone())
                        .absolute()
                        .left(px(f32::from(display.origin.x)))
                        .top(px(f32::from(display.origin.y) - HEADER_HEIGHT))
                        .w(display.size.width)
                        .h(display.size.height),
                )
                .child(render_crop_overlay(
                    viewport,
                    session.rect(),
                    self.settings.handle_radius,
                ))
            }
            _ => area.child(
                div()
                    .size_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .text_color(palette::MUTED)
                    .child("Drop an image here, or use Open Image"),
            ),
        }
    }

    fn render_footer(&self) -> impl IntoElement {
        let rect_label = self.editor.session.as_ref().map(|session| {
            let r = session.rect();
            format!("x {:.0}  y {:.0}  {:.0} x {:.0}", r.x, r.y, r.w, r.h)
        });

        div()
            .h(px(FOOTER_HEIGHT))
            .w_full()
            .flex_none()
            .flex()
            .items_center()
            .justify_between()
            .px(px(PADDING_MD))
            .bg(palette::PANEL_BG)
            .border_t_1()
            .border_color(palette::BORDER)
            .text_xs()
            .text_color(palette::MUTED)
            .child(div().child(self.ui.status.clone().unwrap_or_default()))
            .when_some(rect_label, |d, label| d.child(div().child(label)))
    }

    /// Cursor for the canvas area: the gesture dictates it while active,
    /// the advisory hover zone otherwise.
    fn canvas_cursor(&self) -> CursorStyle {
        let Some(session) = &self.editor.session else {
            return CursorStyle::Arrow;
        };
        match session.gesture() {
            GestureState::Idle => self.editor.hover_zone.cursor_style(),
            GestureState::Drawing { .. } => CursorStyle::Crosshair,
            GestureState::Moving { .. } => CursorStyle::ClosedHand,
            GestureState::Resizing { handle } => HandleZone::Handle(*handle).cursor_style(),
        }
    }
}

fn header_button(
    id: &'static str,
    label: &'static str,
    cx: &mut Context<Cropboard>,
    on_click: impl Fn(&mut Cropboard, &mut Context<Cropboard>) + 'static,
) -> impl IntoElement {
    div()
        .id(id)
        .h(px(BUTTON_HEIGHT_SM))
        .px(px(PADDING_SM))
        .rounded(px(BORDER_RADIUS_SM))
        .bg(palette::BUTTON_BG)
        .cursor(CursorStyle::PointingHand)
        .hover(|s| s.bg(palette::BUTTON_HOVER))
        .flex()
        .items_center()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _, _, cx| on_click(this, cx)),
        )
        .child(div().text_sm().child(label))
}
