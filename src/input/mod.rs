//! Pointer input handling for the crop canvas.
//!
//! This module implements the crop-rectangle interaction engine: hit
//! classification, the gesture state machine, and the per-handle resize
//! transforms, plus the gpui event handlers that feed them.
//!
//! ## Architecture
//!
//! The engine uses an explicit state machine (`GestureState`) owned by a
//! `CropSession`. The session works purely in surface-local (image pixel)
//! coordinates and never touches the window, so it tests headless; the
//! event handler files translate window positions through the letterboxed
//! viewport and delegate.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `hit` - Pointer-to-zone classification with corner priority
//! - `resize` - The eight anchored resize transforms
//! - `session` - The owned session driving the crop rectangle
//! - `coords` - Window <-> surface coordinate conversion
//! - `mouse_down` / `drag` / `mouse_up` - gpui event handlers

pub mod coords;
pub mod hit;
pub mod resize;
mod state;
mod session;
mod mouse_down;
mod mouse_up;
mod drag;

pub use session::{CropSession, CropTolerances};
pub use state::GestureState;
