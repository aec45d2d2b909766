//! # Offscreen Canvas
//!
//! A CPU framebuffer implementing [`Surface`] for headless rendering. The
//! canvas backs the `--snapshot` mode and gives tests a way to capture the
//! frame after each stage and inspect individual pixels.

use crate::rendering::Surface;
use crate::scene::{LineStrip, Rgb, Style, Vertex};
use crate::{PetalsError, PetalsResult};
use image::RgbImage;
use std::path::Path;

/// An RGB8 framebuffer with Bresenham line-strip rasterization.
///
/// Normalized coordinates map onto the pixel grid with x growing rightward
/// and y growing upward, matching the window backend. Pixels outside the
/// frame are silently dropped, so out-of-range vertices draw partially or
/// not at all rather than failing.
///
/// # Examples
///
/// ```
/// use petals::{init_frame, PixelCanvas, Scene};
///
/// let mut canvas = PixelCanvas::new(500, 500);
/// init_frame(&mut canvas);
/// Scene::classic().paint(&mut canvas);
/// assert!(canvas.lit_pixels() > 0);
/// ```
pub struct PixelCanvas {
    width: u32,
    height: u32,
    /// Row-major RGB8 pixel data, top row first
    data: Vec<u8>,
    /// Color the frame was last cleared to
    background: [u8; 3],
}

impl PixelCanvas {
    /// Creates a canvas of the given size, cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        let background = Rgb::BLACK.to_bytes();
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
            background,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB8 pixel data, top row first.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Reads one pixel. `(0, 0)` is the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let base = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Counts pixels that differ from the background color.
    pub fn lit_pixels(&self) -> usize {
        self.data
            .chunks_exact(3)
            .filter(|&pixel| pixel != &self.background[..])
            .count()
    }

    /// Writes the frame as a PNG file.
    pub fn export_png(&self, path: &Path) -> PetalsResult<()> {
        let frame = RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| {
                PetalsError::InvalidScene("framebuffer does not match canvas dimensions".to_string())
            })?;
        frame.save(path)?;
        Ok(())
    }

    /// Maps a normalized vertex onto the pixel grid, flipping y so that
    /// +y points up.
    fn to_pixel(&self, vertex: Vertex) -> (i64, i64) {
        let px = ((vertex.x + 1.0) * 0.5 * (self.width - 1) as f32).round() as i64;
        let py = ((1.0 - vertex.y) * 0.5 * (self.height - 1) as f32).round() as i64;
        (px, py)
    }

    fn draw_segment(&mut self, a: Vertex, b: Vertex, brush: i64, color: [u8; 3]) {
        let (mut x0, mut y0) = self.to_pixel(a);
        let (x1, y1) = self.to_pixel(b);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, brush, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x0 += sx;
            }
            if doubled <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Stamps a square brush centered on the pixel, widening the stroke to
    /// the style's line width.
    fn stamp(&mut self, x: i64, y: i64, brush: i64, color: [u8; 3]) {
        let half = brush / 2;
        for offset_y in -half..(brush - half) {
            for offset_x in -half..(brush - half) {
                self.plot(x + offset_x, y + offset_y, color);
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let base = (y as usize * self.width as usize + x as usize) * 3;
        self.data[base..base + 3].copy_from_slice(&color);
    }
}

impl Surface for PixelCanvas {
    fn clear(&mut self, color: Rgb) {
        self.background = color.to_bytes();
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&self.background);
        }
    }

    fn stroke_strip(&mut self, style: &Style, strip: &LineStrip) {
        let brush = (style.line_width.round() as i64).max(1);
        let color = style.color.to_bytes();
        for (a, b) in strip.segments() {
            self.draw_segment(a, b, brush, color);
        }
    }

    // Pixels land in the buffer as they are plotted.
    fn flush(&mut self) {}
}
