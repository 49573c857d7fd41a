//! Pointer gesture interpretation.
//!
//! The state machine only decides what a pointer event means. Applying the
//! outcome (moving the slider, starting a transition) is the control's job.

use crate::geometry::GeometrySnapshot;
use capsule_core::Point;

/// Phase of the current touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchPhase {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer down on the track, not yet moved
    Pressed,
    /// Pointer moved after pressing
    Dragging,
}

/// What the control should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Event is not handled
    Unhandled,
    /// Event handled with nothing to apply
    Handled,
    /// The gesture became a drag; any transition in flight should stop
    DragStarted,
    /// Drag frame: slider center x and the off-to-on color ratio (unclamped)
    Drag {
        /// Slider center x, clamped to the travel
        slider_x: f32,
        /// Color offset relative to the drag anchor
        color_ratio: f32,
    },
    /// Short press: toggle the current state
    Toggle,
    /// Drag released: transition to this state
    Settle(bool),
    /// Drag cancelled by the host: return to the current state
    Abandoned,
}

/// Idle / Pressed / Dragging state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureStateMachine {
    phase: TouchPhase,
    anchor_x: f32,
    press_time_ms: u64,
    tap_timeout_ms: u64,
}

impl GestureStateMachine {
    /// Create a state machine with the given tap timeout.
    #[must_use]
    pub fn new(tap_timeout_ms: u64) -> Self {
        Self {
            tap_timeout_ms,
            ..Self::default()
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// Drag anchor x, only meaningful while dragging.
    #[must_use]
    pub const fn anchor_x(&self) -> Option<f32> {
        match self.phase {
            TouchPhase::Dragging => Some(self.anchor_x),
            TouchPhase::Idle | TouchPhase::Pressed => None,
        }
    }

    /// Longest press counted as a tap.
    #[must_use]
    pub const fn tap_timeout_ms(&self) -> u64 {
        self.tap_timeout_ms
    }

    /// Set the tap timeout.
    pub fn set_tap_timeout_ms(&mut self, tap_timeout_ms: u64) {
        self.tap_timeout_ms = tap_timeout_ms;
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.phase = TouchPhase::Idle;
    }

    /// Pointer went down at `position`.
    ///
    /// Only a press on the stadium claims the gesture; anything else leaves
    /// the machine idle.
    pub fn press(
        &mut self,
        position: Point,
        timestamp_ms: u64,
        geometry: &GeometrySnapshot,
    ) -> GestureOutcome {
        if !geometry.contains(position) {
            self.phase = TouchPhase::Idle;
            return GestureOutcome::Unhandled;
        }
        self.phase = TouchPhase::Pressed;
        self.anchor_x = position.x;
        self.press_time_ms = timestamp_ms;
        GestureOutcome::Handled
    }

    /// Pointer moved to `position`.
    pub fn move_to(&mut self, position: Point, geometry: &GeometrySnapshot) -> GestureOutcome {
        match self.phase {
            TouchPhase::Idle => GestureOutcome::Unhandled,
            TouchPhase::Pressed => {
                // Re-anchor at the first move, not at the press
                self.phase = TouchPhase::Dragging;
                self.anchor_x = position.x;
                GestureOutcome::DragStarted
            }
            TouchPhase::Dragging => self.drag(position.x, geometry),
        }
    }

    fn drag(&self, x: f32, geometry: &GeometrySnapshot) -> GestureOutcome {
        let x = geometry.clamp_to_travel(x);
        let rtl = geometry.direction.is_rtl();
        let range = geometry.slider_move_range;

        let mut offset = if range > 0.0 {
            (x - self.anchor_x) / range
        } else {
            0.0
        };
        if rtl {
            offset = -offset;
        }
        let toward_end = if rtl {
            x < self.anchor_x
        } else {
            x > self.anchor_x
        };
        let color_ratio = if toward_end { offset } else { 1.0 + offset };

        GestureOutcome::Drag {
            slider_x: x,
            color_ratio,
        }
    }

    /// Pointer went up.
    ///
    /// `slider_x` is the slider position the drag left behind.
    pub fn release(
        &mut self,
        timestamp_ms: u64,
        slider_x: f32,
        geometry: &GeometrySnapshot,
    ) -> GestureOutcome {
        let phase = std::mem::take(&mut self.phase);
        if phase == TouchPhase::Idle {
            return GestureOutcome::Unhandled;
        }

        let held_ms = timestamp_ms.saturating_sub(self.press_time_ms);
        if held_ms <= self.tap_timeout_ms {
            return GestureOutcome::Toggle;
        }
        if phase == TouchPhase::Dragging {
            let range = geometry.slider_move_range;
            let travelled = if range > 0.0 {
                ((slider_x - geometry.slider_start_x) / range).abs()
            } else {
                0.0
            };
            return GestureOutcome::Settle(travelled > 0.5);
        }
        GestureOutcome::Handled
    }

    /// The host took the gesture away.
    pub fn cancel(&mut self) -> GestureOutcome {
        match std::mem::take(&mut self.phase) {
            TouchPhase::Idle => GestureOutcome::Unhandled,
            TouchPhase::Pressed => GestureOutcome::Handled,
            TouchPhase::Dragging => GestureOutcome::Abandoned,
        }
    }
}
