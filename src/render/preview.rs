//! Live preview panel - the cropped region, re-rendered after every
//! rectangle update.
//!
//! The preview is the source image clipped by an overflow-hidden box: the
//! image element is scaled so the crop region exactly fills the box, then
//! shifted so the region's origin lands at the box origin. No pixel
//! copying happens until export.

use super::palette;
use crate::app::Cropboard;
use crate::constants::{GAP_MD, PADDING_MD, PREVIEW_PANEL_WIDTH};
use gpui::*;

/// Tallest the preview box is allowed to get
const PREVIEW_MAX_HEIGHT: f32 = 220.0;

pub fn render_preview_panel(app: &Cropboard) -> impl IntoElement {
    let panel = div()
        .w(px(PREVIEW_PANEL_WIDTH))
        .h_full()
        .flex_none()
        .flex()
        .flex_col()
        .gap(px(GAP_MD))
        .p(px(PADDING_MD))
        .bg(palette::PANEL_BG)
        .border_l_1()
        .border_color(palette::BORDER)
        .child(div().text_sm().text_color(palette::MUTED).child("Preview"));

    let (Some(image), Some(session)) = (&app.editor.image, &app.editor.session) else {
        return panel;
    };
    let Some(rect) = session.export_rect() else {
        return panel.child(
            div()
                .text_xs()
                .text_color(palette::MUTED)
                .child("Selection is empty"),
        );
    };

    let avail = PREVIEW_PANEL_WIDTH - PADDING_MD * 2.0;
    let scale = (avail / rect.w).min(PREVIEW_MAX_HEIGHT / rect.h);
    let box_w = rect.w * scale;
    let box_h = rect.h * scale;

    panel
        .child(
            div()
                .w(px(box_w))
                .h(px(box_h))
                .relative()
                .overflow_hidden()
                .border_1()
                .border_color(palette::BORDER)
                .child(
                    img(image.path.clone())
                        .absolute()
                        .left(px(-rect.x * scale))
                        .top(px(-rect.y * scale))
                        .w(px(image.bounds.width * scale))
                        .h(px(image.bounds.height * scale)),
                ),
        )
        .child(
            div()
                .text_xs()
                .text_color(palette::MUTED)
                .child(format!(
                    "{} x {} px",
                    rect.w.round() as u32,
                    rect.h.round() as u32
                )),
        )
}
