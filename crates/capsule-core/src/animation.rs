//! Easing curves and time-driven eased values.
//!
//! Nothing here owns a clock: callers advance values with the elapsed
//! milliseconds reported by their frame loop.

use crate::color::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease in and out
    CubicInOut,
    /// Cosine curve: accelerates through the first half, decelerates through the second
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
            Self::AccelerateDecelerate => ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5,
        }
    }
}

// =============================================================================
// Interpolate
// =============================================================================

/// Trait for values that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// EasedValue
// =============================================================================

/// A value eased from `from` to `to` over a fixed duration.
///
/// At zero progress the value is exactly `from`; once the duration has
/// elapsed it is exactly `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue<T> {
    /// Start value
    pub from: T,
    /// End value
    pub to: T,
    /// Total duration in milliseconds
    pub duration_ms: f64,
    /// Elapsed time in milliseconds
    pub elapsed_ms: f64,
    /// Easing function
    pub easing: Easing,
}

impl<T: Interpolate + Clone> EasedValue<T> {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: T, to: T, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing: Easing::default(),
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> T {
        let t = self.progress();
        if t >= 1.0 {
            self.to.clone()
        } else if t <= 0.0 {
            self.from.clone()
        } else {
            T::interpolate(&self.from, &self.to, self.easing.apply(t))
        }
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance by `dt_ms` milliseconds.
    pub fn update(&mut self, dt_ms: f64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
