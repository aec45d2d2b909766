//! # Rendering Module
//!
//! The seam between the scene tables and the pixels: a small `Surface` trait
//! with an offscreen framebuffer backend for snapshots and tests, and a
//! macroquad backend for the live window.

pub mod canvas;
pub mod display;

pub use canvas::*;
pub use display::*;

use crate::scene::{LineStrip, Rgb, Style};

/// A drawing target for styled line strips.
///
/// Surfaces accept the whole stroke state with each call; they hold no
/// current-color or current-width registers of their own.
pub trait Surface {
    /// Fills the entire frame with one color.
    fn clear(&mut self, color: Rgb);

    /// Strokes a line strip with the given style.
    fn stroke_strip(&mut self, style: &Style, strip: &LineStrip);

    /// Submits all drawing issued so far before the next stage begins.
    fn flush(&mut self);
}

/// Prepares a surface for its first drawing: clear to black, then flush.
///
/// Safe to call any number of times; each call leaves the frame in the same
/// cleared state.
pub fn init_frame<S: Surface>(surface: &mut S) {
    surface.clear(Rgb::BLACK);
    surface.flush();
}
