//! # Scene Stages
//!
//! Stages group line strips under one stroke style, and a scene is an ordered
//! stage list walked by a single painter. The classic scene reproduces the
//! demo's fixed coordinate tables: a full-range crosshair followed by four
//! nested petal patterns, one per quadrant region.
//!
//! Keeping the coordinates in data tables (rather than inline drawing calls)
//! lets the same tables feed the window backend, the offscreen canvas, the
//! JSON dump, and the structural tests.

use crate::config;
use crate::rendering::Surface;
use crate::scene::{LineStrip, Rgb, Style};
use log::debug;
use serde::{Deserialize, Serialize};

/// One drawing pass: a named set of line strips sharing a stroke style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage name used in logs and tests
    pub name: String,
    /// Stroke style applied to every strip in the stage
    pub style: Style,
    /// The strips drawn by this stage, in order
    pub strips: Vec<LineStrip>,
}

impl Stage {
    /// Creates a stage from a name, style, and coordinate tables.
    pub fn new(name: &str, style: Style, tables: &[&[(f32, f32)]]) -> Self {
        Self {
            name: name.to_string(),
            style,
            strips: tables.iter().map(|points| LineStrip::from_points(points)).collect(),
        }
    }

    /// Strokes every strip of the stage onto the surface, then flushes.
    pub fn paint<S: Surface>(&self, surface: &mut S) {
        for strip in &self.strips {
            surface.stroke_strip(&self.style, strip);
        }
        surface.flush();
        debug!("Painted stage '{}' ({} strips)", self.name, self.strips.len());
    }
}

/// An ordered list of stages forming one complete drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    stages: Vec<Stage>,
}

impl Scene {
    /// Creates a scene from an ordered stage list.
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// The stages in paint order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Paints every stage in order onto the surface.
    ///
    /// Stages accumulate into the same frame; nothing is cleared between
    /// them, so the finished image is the union of all stages. Painting the
    /// same scene again produces the identical image.
    pub fn paint<S: Surface>(&self, surface: &mut S) {
        for stage in &self.stages {
            stage.paint(surface);
        }
    }

    /// The classic five-stage drawing: white crosshair axes, then green, red,
    /// blue, and cyan petal patterns in the lower-right, upper-left,
    /// upper-right, and lower-left regions.
    ///
    /// Each petal stage nests three strips of three vertices apiece, shrinking
    /// toward the quadrant's midline.
    ///
    /// # Examples
    ///
    /// ```
    /// use petals::Scene;
    ///
    /// let scene = Scene::classic();
    /// assert_eq!(scene.stages().len(), 5);
    /// ```
    pub fn classic() -> Self {
        let width = config::DEFAULT_LINE_WIDTH;
        let style = |color| Style { color, line_width: width };

        Self::new(vec![
            Stage::new(
                "axes",
                style(Rgb::WHITE),
                &[
                    &[(-1.0, 0.0), (1.0, 0.0)],
                    &[(0.0, -1.0), (0.0, 1.0)],
                ],
            ),
            Stage::new(
                "lower-right",
                style(Rgb::GREEN),
                &[
                    &[(0.0, 0.0), (0.5, -0.9), (1.0, 0.0)],
                    &[(0.2, 0.0), (0.5, -0.6), (0.8, 0.0)],
                    &[(0.4, 0.0), (0.5, -0.3), (0.6, 0.0)],
                ],
            ),
            Stage::new(
                "upper-left",
                style(Rgb::RED),
                &[
                    &[(0.0, 0.0), (-0.5, 0.9), (-1.0, 0.0)],
                    &[(-0.2, 0.0), (-0.5, 0.6), (-0.8, 0.0)],
                    &[(-0.4, 0.0), (-0.5, 0.3), (-0.6, 0.0)],
                ],
            ),
            Stage::new(
                "upper-right",
                style(Rgb::BLUE),
                &[
                    &[(0.0, 0.0), (0.9, 0.5), (0.0, 1.0)],
                    &[(0.0, 0.2), (0.6, 0.5), (0.0, 0.8)],
                    &[(0.0, 0.4), (0.3, 0.5), (0.0, 0.6)],
                ],
            ),
            Stage::new(
                "lower-left",
                style(Rgb::CYAN),
                &[
                    &[(0.0, 0.0), (-0.9, -0.5), (0.0, -1.0)],
                    &[(0.0, -0.2), (-0.6, -0.5), (0.0, -0.8)],
                    &[(0.0, -0.4), (-0.3, -0.5), (0.0, -0.6)],
                ],
            ),
        ])
    }
}
