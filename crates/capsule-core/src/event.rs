//! Pointer events delivered by the host.
//!
//! Coordinates are in the receiving widget's local space; routing a screen
//! event to the right widget is the host's job.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer went down
    Press {
        /// Press position
        position: Point,
        /// Host event time in milliseconds
        timestamp_ms: u64,
    },
    /// Pointer moved while down
    Move {
        /// New position
        position: Point,
    },
    /// Pointer went up
    Release {
        /// Host event time in milliseconds
        timestamp_ms: u64,
    },
    /// The host took the gesture away (scroll parent, window lost focus)
    Cancel,
}

impl PointerEvent {
    /// Create a press event.
    #[must_use]
    pub const fn press(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::Press {
            position: Point::new(x, y),
            timestamp_ms,
        }
    }

    /// Create a move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    /// Create a release event.
    #[must_use]
    pub const fn release(timestamp_ms: u64) -> Self {
        Self::Release { timestamp_ms }
    }

    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Press { position, .. } | Self::Move { position } => Some(*position),
            Self::Release { .. } | Self::Cancel => None,
        }
    }
}
