//! # Scene Geometry
//!
//! Primitive value types shared by the scene tables and the rendering
//! backends. All coordinates use the normalized device range: [-1, 1] on each
//! axis, with +x right and +y up. Out-of-range values are not an error; they
//! simply land outside the visible area.

use serde::{Deserialize, Serialize};

/// A point in the normalized coordinate range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Horizontal position, -1 (left edge) to 1 (right edge)
    pub x: f32,
    /// Vertical position, -1 (bottom edge) to 1 (top edge)
    pub y: f32,
}

impl Vertex {
    /// Creates a new vertex.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);

    /// Creates a new color.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantizes the color to one byte per channel.
    pub fn to_bytes(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

/// Stroke settings for one stage: a color and a line width in pixels.
///
/// The style travels with each stroke call instead of living in mutable
/// drawing-context state, so stages can be rendered independently and in any
/// order without leaking settings into each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Rgb,
    pub line_width: f32,
}

/// An ordered run of vertices rendered by connecting consecutive points.
///
/// A strip of two vertices is a single line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStrip {
    pub vertices: Vec<Vertex>,
}

impl LineStrip {
    /// Creates a line strip from a vertex list.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Creates a line strip from coordinate pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use petals::LineStrip;
    ///
    /// let strip = LineStrip::from_points(&[(0.0, 0.0), (0.5, -0.9), (1.0, 0.0)]);
    /// assert_eq!(strip.vertices.len(), 3);
    /// ```
    pub fn from_points(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Vertex::new(x, y)).collect())
    }

    /// Iterates over the consecutive-vertex segments of the strip.
    pub fn segments(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
