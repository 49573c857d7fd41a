//! Track and slider geometry.
//!
//! [`GeometryModel`] holds the track dimensions, coerced into valid ranges
//! as they are assigned; [`GeometryModel::snapshot`] places the track at a layout
//! origin and derives every spatial quantity the gesture and transition code
//! reads.

use crate::config::SwitchConfig;
use capsule_core::{LayoutDirection, Point, Rect};

/// Clamp `amount` to `[low, high]`, favoring `high` when the range is inverted.
///
/// Unlike [`f32::clamp`] this never panics: with `low > high` any amount at or
/// above `low` yields `high`.
#[must_use]
pub fn constrain(amount: f32, low: f32, high: f32) -> f32 {
    if amount < low {
        low
    } else {
        amount.min(high)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Track dimensions after clamping.
///
/// Every value is clamped when it is assigned and stays clamped: shrinking
/// the width and growing it back does not restore an earlier height.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryModel {
    width: f32,
    height: f32,
    slider_radius: f32,
    min_slider_radius: f32,
}

impl GeometryModel {
    /// Create a model from the dimensions in `config`.
    #[must_use]
    pub fn from_config(config: &SwitchConfig) -> Self {
        let width = Self::sanitize_width(config.switch_width);
        let mut model = Self {
            width,
            height: 0.0,
            slider_radius: 0.0,
            min_slider_radius: finite_or(config.min_slider_radius, 0.0).max(0.0),
        };
        model.clamp_height(config.switch_height.unwrap_or(width / 2.0));
        let inset = finite_or(config.slider_inset, 0.0);
        model.set_slider_radius(
            config
                .slider_radius
                .unwrap_or(model.corner_radius() - inset),
        );
        model
    }

    fn sanitize_width(width: f32) -> f32 {
        let sanitized = finite_or(width, 0.0).max(0.0);
        if sanitized != width {
            log::debug!("switch width {width} coerced to {sanitized}");
        }
        sanitized
    }

    /// Set the track width. The height and slider radius are re-clamped.
    pub fn set_width(&mut self, width: f32) {
        self.width = Self::sanitize_width(width);
        self.clamp_height(self.height);
        self.set_slider_radius(self.slider_radius);
    }

    /// Set the track height, clamped to `[0, width]`. The slider radius is
    /// re-clamped.
    pub fn set_height(&mut self, height: f32) {
        self.clamp_height(height);
        self.set_slider_radius(self.slider_radius);
    }

    fn clamp_height(&mut self, height: f32) {
        self.height = constrain(finite_or(height, 0.0), 0.0, self.width);
        if self.height != height {
            log::debug!("switch height {height} clamped to {}", self.height);
        }
    }

    /// Set the slider radius, clamped to `[min_slider_radius, height / 2]`.
    pub fn set_slider_radius(&mut self, radius: f32) {
        self.slider_radius = constrain(
            finite_or(radius, 0.0),
            self.min_slider_radius,
            self.corner_radius(),
        );
        if self.slider_radius != radius {
            log::debug!("slider radius {radius} clamped to {}", self.slider_radius);
        }
    }

    /// Track width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Effective track height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Corner radius of the stadium ends.
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.height / 2.0
    }

    /// Effective slider radius.
    #[must_use]
    pub const fn slider_radius(&self) -> f32 {
        self.slider_radius
    }

    /// Smallest slider radius the model accepts.
    #[must_use]
    pub const fn min_slider_radius(&self) -> f32 {
        self.min_slider_radius
    }

    /// Place the track with its top-left corner at `origin`.
    #[must_use]
    pub fn snapshot(&self, origin: Point, direction: LayoutDirection) -> GeometrySnapshot {
        let track = Rect::new(origin.x, origin.y, self.width, self.height);
        let corner = self.corner_radius();
        let near = track.left() + corner;
        let far = track.left() + self.width - corner;
        let (start, end) = if direction.is_rtl() {
            (far, near)
        } else {
            (near, far)
        };
        GeometrySnapshot {
            track,
            corner_radius: corner,
            slider_radius: self.slider_radius,
            slider_move_range: self.width - self.slider_radius * 2.0,
            slider_start_x: start,
            slider_end_x: end,
            slider_center_y: track.top() + corner,
            direction,
        }
    }
}

impl Default for GeometryModel {
    fn default() -> Self {
        Self::from_config(&SwitchConfig::default())
    }
}

/// Spatial quantities of a placed track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    /// Track bounds
    pub track: Rect,
    /// Radius of the stadium ends (half the track height)
    pub corner_radius: f32,
    /// Slider radius
    pub slider_radius: f32,
    /// Width minus the slider diameter
    pub slider_move_range: f32,
    /// Slider center x when unchecked
    pub slider_start_x: f32,
    /// Slider center x when checked
    pub slider_end_x: f32,
    /// Slider center y
    pub slider_center_y: f32,
    /// Direction the start and end positions were derived for
    pub direction: LayoutDirection,
}

impl GeometrySnapshot {
    /// Slider center x at rest for the given state.
    #[must_use]
    pub const fn slider_x(&self, checked: bool) -> f32 {
        if checked {
            self.slider_end_x
        } else {
            self.slider_start_x
        }
    }

    /// Clamp `x` into the slider travel, honoring the direction.
    #[must_use]
    pub fn clamp_to_travel(&self, x: f32) -> f32 {
        if self.direction.is_rtl() {
            constrain(x, self.slider_end_x, self.slider_start_x)
        } else {
            constrain(x, self.slider_start_x, self.slider_end_x)
        }
    }

    /// Slider center point for a given center x.
    #[must_use]
    pub const fn slider_center(&self, x: f32) -> Point {
        Point::new(x, self.slider_center_y)
    }
}
