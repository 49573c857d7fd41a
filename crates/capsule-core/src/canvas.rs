//! Paint contract between widgets and the host renderer.
//!
//! Widgets describe what to draw; [`Canvas`] implementations decide how.
//! [`RecordingCanvas`] keeps the commands so tests can inspect them.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Shadow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Shadow {
    /// A shadow centered under its shape.
    #[must_use]
    pub const fn centered(color: Color, blur: f32) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur,
        }
    }
}

/// Drawing primitive recorded by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle with uniformly rounded corners
    RoundedRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
        /// Optional drop shadow
        shadow: Option<Shadow>,
    },
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Fill a circle, with an optional drop shadow beneath it.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, shadow: Option<Shadow>);
}

/// Canvas that records draw commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect {
            bounds: rect,
            radius,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, shadow: Option<Shadow>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            shadow,
        });
    }
}
