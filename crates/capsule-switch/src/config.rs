//! Switch configuration.
//!
//! All lengths are in pixels. Density-independent defaults are scaled with
//! [`SwitchConfig::for_density`]; [`SwitchConfig::default`] uses density 1.

use capsule_core::{Color, Easing, LayoutDirection, Padding};
use serde::{Deserialize, Serialize};

/// Default track width, in dp.
pub const DEFAULT_SWITCH_WIDTH_DP: f32 = 48.0;
/// Default transition duration, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 250;
/// Default slider shadow radius, in dp.
pub const DEFAULT_SHADOW_RADIUS_DP: f32 = 4.0;
/// Gap between the slider and the track edge when no slider radius is given, in dp.
pub const SLIDER_INSET_DP: f32 = 2.0;
/// Smallest slider radius, in dp.
pub const MIN_SLIDER_RADIUS_DP: f32 = 4.0;
/// Longest press still treated as a tap, in milliseconds.
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 100;
/// Default slider shadow color.
pub const DEFAULT_SHADOW_COLOR: Color = Color::rgb(0xdd, 0xdd, 0xdd);

/// Cosmetic slider shadow. Never affects geometry or state logic beyond the
/// layout inset it may require.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowConfig {
    /// Whether the shadow is drawn
    pub enabled: bool,
    /// Shadow color
    pub color: Color,
    /// Shadow blur radius in pixels
    pub radius: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: DEFAULT_SHADOW_COLOR,
            radius: DEFAULT_SHADOW_RADIUS_DP,
        }
    }
}

/// Construction-time configuration of a switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchConfig {
    /// Track width
    pub switch_width: f32,
    /// Track height; half the width when absent
    pub switch_height: Option<f32>,
    /// Slider radius; track corner radius minus `slider_inset` when absent
    pub slider_radius: Option<f32>,
    /// Lower bound for the slider radius
    pub min_slider_radius: f32,
    /// Gap used to derive the default slider radius
    pub slider_inset: f32,
    /// Slider fill
    pub slider_color: Color,
    /// Track fill when checked
    pub track_on_color: Color,
    /// Track fill when unchecked
    pub track_off_color: Color,
    /// Transition duration in milliseconds
    pub duration_ms: u64,
    /// Transition curve
    pub easing: Easing,
    /// Slider shadow
    pub shadow: ShadowConfig,
    /// Initial checked state
    pub checked: bool,
    /// Whether pointer input is handled
    pub enabled: bool,
    /// Mirrors the slider travel under right-to-left
    pub layout_direction: LayoutDirection,
    /// Longest press counted as a tap
    pub tap_timeout_ms: u64,
    /// Padding around the track inside the laid-out bounds
    pub padding: Padding,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}

impl SwitchConfig {
    /// Defaults with every dp quantity scaled by `density` (pixels per dp).
    #[must_use]
    pub fn for_density(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        Self {
            switch_width: DEFAULT_SWITCH_WIDTH_DP * density,
            switch_height: None,
            slider_radius: None,
            min_slider_radius: MIN_SLIDER_RADIUS_DP * density,
            slider_inset: SLIDER_INSET_DP * density,
            slider_color: Color::WHITE,
            track_on_color: Color::GRAY,
            track_off_color: Color::GRAY,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            shadow: ShadowConfig {
                radius: DEFAULT_SHADOW_RADIUS_DP * density,
                ..ShadowConfig::default()
            },
            checked: false,
            enabled: true,
            layout_direction: LayoutDirection::default(),
            tap_timeout_ms: DEFAULT_TAP_TIMEOUT_MS,
            padding: Padding::ZERO,
        }
    }

    /// Set the track size.
    #[must_use]
    pub const fn size(mut self, width: f32, height: f32) -> Self {
        self.switch_width = width;
        self.switch_height = Some(height);
        self
    }

    /// Set the slider radius.
    #[must_use]
    pub const fn slider_radius(mut self, radius: f32) -> Self {
        self.slider_radius = Some(radius);
        self
    }

    /// Set the track colors.
    #[must_use]
    pub const fn track_colors(mut self, on: Color, off: Color) -> Self {
        self.track_on_color = on;
        self.track_off_color = off;
        self
    }

    /// Set the transition duration.
    #[must_use]
    pub const fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the transition curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the initial checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set whether pointer input is handled.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub const fn direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Enable or disable the slider shadow.
    #[must_use]
    pub const fn shadow_enabled(mut self, enabled: bool) -> Self {
        self.shadow.enabled = enabled;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
