//! Application module - the main Cropboard application state and logic.
//!
//! This module is organized into two submodules:
//! - `state` - The Cropboard struct definition and sub-structs
//! - `lifecycle` - Initialization, image loading, and export

mod state;
mod lifecycle;

pub use state::{Cropboard, EditorState, LoadedImage, UiState};
