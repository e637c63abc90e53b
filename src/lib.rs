//! Cropboard - an interactive image cropping tool.
//!
//! The crop-rectangle interaction engine (geometry, hit classification,
//! gesture state machine, resize transforms) lives in [`geometry`] and
//! [`input`] and is fully headless; [`app`], [`render`], and [`export`]
//! are the gpui shell around it.

pub mod app;
pub mod constants;
pub mod export;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;
