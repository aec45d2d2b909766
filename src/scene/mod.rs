//! # Scene Module
//!
//! The data model for everything the demo draws: vertices, styles, stages,
//! and the static coordinate tables of the classic five-stage scene.

pub mod geometry;
pub mod stages;

pub use geometry::*;
pub use stages::*;
