//! Measurement and track placement inside the host's bounds.

use crate::config::ShadowConfig;
use crate::geometry::GeometryModel;
use capsule_core::{LayoutDirection, Padding, Point, Rect, Size};

/// Space reserved around the track so the slider shadow is not clipped.
///
/// Non-zero only when the shadow is enabled and the shadowed slider is
/// taller than the track.
#[must_use]
pub fn shadow_inset(model: &GeometryModel, shadow: &ShadowConfig) -> f32 {
    if shadow.enabled && (shadow.radius + model.slider_radius()) * 2.0 > model.height() {
        shadow.radius.max(0.0)
    } else {
        0.0
    }
}

/// Preferred size: the track, the shadow inset on every side, then padding.
#[must_use]
pub fn desired_size(model: &GeometryModel, shadow: &ShadowConfig, padding: Padding) -> Size {
    let inset = shadow_inset(model, shadow) * 2.0;
    Size::new(
        model.width() + inset + padding.horizontal(),
        model.height() + inset + padding.vertical(),
    )
}

/// Top-left corner of the track within `bounds`.
///
/// The track hugs the trailing edge of the content box: right under
/// left-to-right, left under right-to-left. It is centered vertically.
#[must_use]
pub fn track_origin(
    bounds: Rect,
    model: &GeometryModel,
    shadow: &ShadowConfig,
    padding: Padding,
    direction: LayoutDirection,
) -> Point {
    let inset = shadow_inset(model, shadow);
    let content = bounds.deflate(padding);
    let left = if direction.is_rtl() {
        content.left() + inset
    } else {
        content.right() - inset - model.width()
    };
    Point::new(left, content.center().y - model.height() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwitchConfig;

    fn model() -> GeometryModel {
        GeometryModel::from_config(&SwitchConfig::default())
    }

    #[test]
    fn test_shadow_inset_when_slider_shadow_overflows() {
        // (4 + 10) * 2 = 28 > 24
        assert_eq!(shadow_inset(&model(), &ShadowConfig::default()), 4.0);
    }

    #[test]
    fn test_no_inset_without_shadow() {
        let shadow = ShadowConfig {
            enabled: false,
            ..ShadowConfig::default()
        };
        assert_eq!(shadow_inset(&model(), &shadow), 0.0);
    }

    #[test]
    fn test_no_inset_when_shadow_fits() {
        let shadow = ShadowConfig {
            radius: 1.0,
            ..ShadowConfig::default()
        };
        // (1 + 10) * 2 = 22 <= 24
        assert_eq!(shadow_inset(&model(), &shadow), 0.0);
    }

    #[test]
    fn test_desired_size() {
        let size = desired_size(&model(), &ShadowConfig::default(), Padding::uniform(2.0));
        assert_eq!(size, Size::new(60.0, 36.0));
    }

    #[test]
    fn test_track_origin_ltr_right_aligned() {
        let origin = track_origin(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            &model(),
            &ShadowConfig::default(),
            Padding::ZERO,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(origin, Point::new(48.0, 8.0));
    }

    #[test]
    fn test_track_origin_rtl_left_aligned() {
        let origin = track_origin(
            Rect::new(10.0, 0.0, 100.0, 40.0),
            &model(),
            &ShadowConfig::default(),
            Padding::new(3.0, 0.0, 0.0, 0.0),
            LayoutDirection::RightToLeft,
        );
        assert_eq!(origin, Point::new(17.0, 8.0));
    }

    #[test]
    fn test_track_origin_centers_in_padded_content() {
        let origin = track_origin(
            Rect::new(0.0, 0.0, 48.0, 40.0),
            &model(),
            &ShadowConfig {
                enabled: false,
                ..ShadowConfig::default()
            },
            Padding::new(0.0, 10.0, 0.0, 0.0),
            LayoutDirection::LeftToRight,
        );
        // content spans y 10..40, midpoint 25
        assert_eq!(origin, Point::new(0.0, 13.0));
    }
}
