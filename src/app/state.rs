//! Application state - the Cropboard struct definition and sub-structs.

use crate::geometry::SurfaceBounds;
use crate::input::CropSession;
use crate::settings::CropSettings;
use crate::types::HandleZone;
use image::DynamicImage;
use std::path::PathBuf;

/// A decoded image plus where it came from.
pub struct LoadedImage {
    /// Source file path (also backs the gpui image element)
    pub path: PathBuf,
    /// Decoded pixels, kept for preview extraction and export
    pub data: DynamicImage,
    /// Pixel dimensions, the crop session's constraint region
    pub bounds: SurfaceBounds,
}

/// Editor state - the loaded image and the crop interaction session.
pub struct EditorState {
    /// Currently loaded image, if any
    pub image: Option<LoadedImage>,
    /// Crop session over the loaded image; recreated on every load
    pub session: Option<CropSession>,
    /// Advisory zone under the pointer, cached for cursor styling
    pub hover_zone: HandleZone,
}

/// UI chrome state.
pub struct UiState {
    /// Status line shown in the footer
    pub status: Option<String>,
}

/// The main application entity.
pub struct Cropboard {
    pub editor: EditorState,
    pub settings: CropSettings,
    pub ui: UiState,
}
