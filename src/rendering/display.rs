//! # Window Display
//!
//! The live macroquad backend: window configuration and a [`Surface`] that
//! strokes scene strips into the current frame.

use crate::config;
use crate::rendering::Surface;
use crate::scene::{LineStrip, Rgb, Style, Vertex};
use macroquad::prelude::*;

/// Window configuration for the demo: fixed 500x500 size and the classic
/// title.
pub fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_string(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        ..Default::default()
    }
}

/// Macroquad-backed drawing surface.
///
/// Screen dimensions are read on every stroke, so a resized window simply
/// re-maps the same normalized coordinates onto the new frame.
pub struct WindowSurface;

impl Default for WindowSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSurface {
    /// Creates a new window surface.
    pub fn new() -> Self {
        Self
    }
}

impl Surface for WindowSurface {
    fn clear(&mut self, color: Rgb) {
        clear_background(to_macroquad(color));
    }

    fn stroke_strip(&mut self, style: &Style, strip: &LineStrip) {
        let width = screen_width();
        let height = screen_height();
        for (a, b) in strip.segments() {
            let (x1, y1) = to_screen(a, width, height);
            let (x2, y2) = to_screen(b, width, height);
            draw_line(x1, y1, x2, y2, style.line_width, to_macroquad(style.color));
        }
    }

    // Macroquad batches geometry internally and submits it when the frame
    // ends, which preserves stage order within the frame.
    fn flush(&mut self) {}
}

/// Maps a normalized vertex onto screen pixels, flipping y so that +y points
/// up.
fn to_screen(vertex: Vertex, width: f32, height: f32) -> (f32, f32) {
    (
        (vertex.x + 1.0) * 0.5 * width,
        (1.0 - vertex.y) * 0.5 * height,
    )
}

fn to_macroquad(color: Rgb) -> Color {
    Color::new(color.r, color.g, color.b, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_conf_matches_demo_parameters() {
        let conf = window_conf();
        assert_eq!(conf.window_title, "Basic Window");
        assert_eq!(conf.window_width, 500);
        assert_eq!(conf.window_height, 500);
    }

    #[test]
    fn screen_mapping_spans_the_frame() {
        assert_eq!(to_screen(Vertex::new(-1.0, 1.0), 500.0, 500.0), (0.0, 0.0));
        assert_eq!(to_screen(Vertex::new(1.0, -1.0), 500.0, 500.0), (500.0, 500.0));
        assert_eq!(to_screen(Vertex::new(0.0, 0.0), 500.0, 500.0), (250.0, 250.0));
    }
}
