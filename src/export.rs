//! Crop extraction and export.
//!
//! The session supplies the committed rectangle; this module turns it into
//! pixels. Encoding is whatever the `image` crate infers from the output
//! extension.

use crate::geometry::CropRect;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting a crop.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The selection covers less than one pixel
    #[error("Selection is empty")]
    EmptySelection,

    /// Encoding or decoding error from the image crate
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Snap a surface-space rectangle to whole pixels inside `image`.
///
/// Rounds the origin and size, then clamps against the image dimensions,
/// flooring each dimension at one pixel. Returns `(x, y, w, h)`.
pub fn pixel_rect(image: &DynamicImage, rect: CropRect) -> (u32, u32, u32, u32) {
    let x = (rect.x.round().max(0.0) as u32).min(image.width().saturating_sub(1));
    let y = (rect.y.round().max(0.0) as u32).min(image.height().saturating_sub(1));
    let w = (rect.w.round().max(1.0) as u32).min(image.width() - x).max(1);
    let h = (rect.h.round().max(1.0) as u32).min(image.height() - y).max(1);
    (x, y, w, h)
}

/// Extract the crop region as a new image.
pub fn crop_image(image: &DynamicImage, rect: CropRect) -> ExportResult<DynamicImage> {
    if !rect.has_area() {
        return Err(ExportError::EmptySelection);
    }
    let (x, y, w, h) = pixel_rect(image, rect);
    Ok(image.crop_imm(x, y, w, h))
}

/// Extract the crop region and write it to `path`.
pub fn save_cropped(image: &DynamicImage, rect: CropRect, path: &Path) -> ExportResult<()> {
    let cropped = crop_image(image, rect)?;
    cropped.save(path)?;
    Ok(())
}
