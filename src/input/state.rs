//! Gesture state machine - unified state management for crop interactions.
//!
//! A single explicit enum instead of scattered `is_drawing`/`is_moving`/
//! `is_resizing` booleans, making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing     (pointer down outside the rectangle)
//! Idle -> Moving      (pointer down on the rectangle interior)
//! Idle -> Resizing    (pointer down on an edge or corner handle)
//!
//! Any -> Idle         (pointer release - discards all captured data)
//! ```

use crate::types::ResizeHandle;
use gpui::Point;

/// The active pointer gesture, with the data captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No active gesture
    Idle,

    /// Drawing a fresh rectangle from scratch
    Drawing {
        /// The pointer-down position; the rectangle spans from here to the
        /// live pointer
        anchor: Point<f32>,
    },

    /// Dragging the whole rectangle
    Moving {
        /// Offset from the rectangle origin to the pointer-down position
        offset: Point<f32>,
    },

    /// Dragging one handle
    Resizing {
        /// The handle grabbed at pointer-down
        handle: ResizeHandle,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureState {
    /// Returns true if any gesture is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if the state is Idle.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently drawing a new rectangle.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Returns true if currently moving the rectangle.
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }

    /// Returns true if currently resizing.
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Get the draw anchor, if drawing.
    pub fn draw_anchor(&self) -> Option<Point<f32>> {
        match self {
            Self::Drawing { anchor } => Some(*anchor),
            _ => None,
        }
    }

    /// Get the move offset, if moving.
    pub fn move_offset(&self) -> Option<Point<f32>> {
        match self {
            Self::Moving { offset } => Some(*offset),
            _ => None,
        }
    }

    /// Get the grabbed handle, if resizing.
    pub fn active_handle(&self) -> Option<ResizeHandle> {
        match self {
            Self::Resizing { handle } => Some(*handle),
            _ => None,
        }
    }

    /// Reset to Idle, discarding captured gesture data.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start drawing from `anchor`.
    pub fn start_drawing(&mut self, anchor: Point<f32>) {
        *self = Self::Drawing { anchor };
    }

    /// Start moving with the given pointer-to-origin offset.
    pub fn start_moving(&mut self, offset: Point<f32>) {
        *self = Self::Moving { offset };
    }

    /// Start resizing via `handle`.
    pub fn start_resizing(&mut self, handle: ResizeHandle) {
        *self = Self::Resizing { handle };
    }
}
