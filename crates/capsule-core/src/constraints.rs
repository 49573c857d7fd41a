//! Layout constraints and direction.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Horizontal reading direction of the surrounding layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Left to right
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    /// Right to left
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl LayoutDirection {
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain_clamps_both_axes() {
        let c = Constraints::new(10.0, 100.0, 10.0, 50.0);
        assert_eq!(c.constrain(Size::new(5.0, 80.0)), Size::new(10.0, 50.0));
        assert_eq!(c.constrain(Size::new(60.0, 20.0)), Size::new(60.0, 20.0));
    }

    #[test]
    fn test_loose_caps_size() {
        let size = Size::new(48.0, 24.0);
        assert_eq!(Constraints::loose(size).constrain(Size::new(100.0, 100.0)), size);
    }

    #[test]
    fn test_unbounded_keeps_size() {
        let size = Size::new(1234.0, 5678.0);
        assert_eq!(Constraints::default().constrain(size), size);
    }

    #[test]
    fn test_layout_direction() {
        assert!(!LayoutDirection::default().is_rtl());
        assert!(LayoutDirection::RightToLeft.is_rtl());
    }
}
