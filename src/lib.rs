//! diagram-rs: coordinate-plane SVG rendering engine.
//!
//! This crate provides the shared core behind educational diagram widgets:
//! exact tick generation, overlap-aware axis label selection, a retained-mode
//! SVG canvas with deferred viewport sizing, axis rendering over numeric and
//! categorical scales, and four-quadrant coordinate-plane setup.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{SceneContent, render_plane_diagram};
pub use error::{DiagramError, DiagramResult};
