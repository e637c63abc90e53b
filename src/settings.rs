//! Persisted application settings.
//!
//! Interaction tuning (grab tolerance, minimum crop size, handle radius)
//! lives here rather than as constants baked into the renderer, so the
//! session gets its tolerances handed in explicitly. Settings are stored
//! as JSON under the user config directory; any load failure falls back
//! to defaults with a warning - settings are never worth refusing to
//! start over.

use crate::constants::{EDGE_TOLERANCE, HANDLE_RADIUS, MIN_CROP_HEIGHT, MIN_CROP_WIDTH};
use crate::input::CropTolerances;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-tunable crop interaction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropSettings {
    /// Grab distance for edges and corners, in surface pixels
    pub edge_tolerance: f32,
    /// Radius of the corner handle dots
    pub handle_radius: f32,
    /// Minimum crop rectangle width
    pub min_width: f32,
    /// Minimum crop rectangle height
    pub min_height: f32,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            edge_tolerance: EDGE_TOLERANCE,
            handle_radius: HANDLE_RADIUS,
            min_width: MIN_CROP_WIDTH,
            min_height: MIN_CROP_HEIGHT,
        }
    }
}

impl CropSettings {
    /// The tolerances a new [`crate::input::CropSession`] should run with.
    pub fn tolerances(&self) -> CropTolerances {
        CropTolerances {
            edge_tolerance: self.edge_tolerance,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }

    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write settings to disk, creating the config directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = settings_path() else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(&path, json)
    }
}

/// `<config_dir>/cropboard/settings.json`, or `None` on platforms without
/// a config directory.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cropboard").join("settings.json"))
}
