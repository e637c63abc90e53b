//! Application lifecycle - initialization, image loading, and export.

use super::{Cropboard, EditorState, LoadedImage, UiState};
use crate::export;
use crate::geometry::SurfaceBounds;
use crate::input::CropSession;
use crate::settings::{CropSettings, settings_path};
use crate::types::HandleZone;
use anyhow::Context as _;
use gpui::Context;
use std::path::PathBuf;

/// File extensions offered in the open/save dialogs.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

impl Cropboard {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        let settings = CropSettings::load();
        // Persist defaults on first run so there is a file to edit.
        if settings_path().is_some_and(|p| !p.exists()) {
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
        }

        Self {
            editor: EditorState {
                image: None,
                session: None,
                hover_zone: HandleZone::Outside,
            },
            settings,
            ui: UiState {
                status: Some("Open an image to start cropping".to_string()),
            },
        }
    }

    /// Decode `path` and start a fresh crop session over it.
    ///
    /// The session always restarts at the default rectangle, clamped to
    /// the new surface; a previous image's selection never carries over.
    pub fn load_image(&mut self, path: PathBuf) -> anyhow::Result<()> {
        let data = image::open(&path)
            .with_context(|| format!("Failed to load image {}", path.display()))?;
        let bounds = SurfaceBounds::new(data.width() as f32, data.height() as f32);

        tracing::info!(
            path = %path.display(),
            width = data.width(),
            height = data.height(),
            "Loaded image"
        );

        self.editor.session = Some(CropSession::new(bounds, self.settings.tolerances()));
        self.editor.hover_zone = HandleZone::Outside;
        self.ui.status = Some(format!(
            "{} ({}x{})",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            data.width(),
            data.height()
        ));
        self.editor.image = Some(LoadedImage { path, data, bounds });
        Ok(())
    }

    /// Show the open dialog and load the picked file.
    pub fn open_image(&mut self, cx: &mut Context<Self>) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        if let Err(e) = self.load_image(path) {
            tracing::error!("{:#}", e);
            self.ui.status = Some(format!("{e:#}"));
        }
        cx.notify();
    }

    /// Export the committed crop rectangle to a file of the user's choice.
    ///
    /// A selection under one pixel is a no-op with a status message, not
    /// an error - the empty-selection precondition is checked here, on the
    /// caller side of the export module.
    pub fn export_image(&mut self, cx: &mut Context<Self>) {
        let (Some(image), Some(session)) = (&self.editor.image, &self.editor.session) else {
            self.ui.status = Some("No image loaded".to_string());
            cx.notify();
            return;
        };
        let Some(rect) = session.export_rect() else {
            self.ui.status = Some("Selection is empty".to_string());
            cx.notify();
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .set_file_name("cropped.png")
            .save_file()
        else {
            return;
        };

        match export::save_cropped(&image.data, rect, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Exported crop");
                self.ui.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.ui.status = Some(format!("Export failed: {e}"));
            }
        }
        cx.notify();
    }
}
