//! # Petals
//!
//! A small windowed graphics demo: a white crosshair spanning the normalized
//! coordinate range, decorated with four nested "petal" line-strip patterns,
//! one per quadrant region.
//!
//! ## Architecture Overview
//!
//! The crate separates *what* is drawn from *how* it is drawn:
//!
//! - **Scene Model**: vertices, styled stages, and the static coordinate
//!   tables describing the five-stage classic scene
//! - **Surfaces**: a rendering seam with two backends, an offscreen CPU
//!   framebuffer for headless snapshots and tests and the live macroquad
//!   window
//! - **Driver**: a single painter that strokes every stage in a fixed order,
//!   flushing between stages
//!
//! The scene tables are serializable, so the same renderer can replay a scene
//! loaded from JSON in place of the built-in one.

pub mod rendering;
pub mod scene;

// Core module re-exports
pub use rendering::{init_frame, window_conf, PixelCanvas, Surface, WindowSurface};
pub use scene::{LineStrip, Rgb, Scene, Stage, Style, Vertex};

/// Core error type for the petals renderer.
#[derive(thiserror::Error, Debug)]
pub enum PetalsError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Image encoding or decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Scene data is invalid
    #[error("Invalid scene: {0}")]
    InvalidScene(String),
}

/// Result type used throughout the petals codebase.
pub type PetalsResult<T> = Result<T, PetalsError>;

/// Version information for the demo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renderer configuration constants.
pub mod config {
    /// Window width in pixels
    pub const WINDOW_WIDTH: i32 = 500;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: i32 = 500;

    /// Title of the demo window
    pub const WINDOW_TITLE: &str = "Basic Window";

    /// Stroke width in pixels shared by every classic stage
    pub const DEFAULT_LINE_WIDTH: f32 = 2.0;
}
