//! Packed ARGB color and channel-wise interpolation.

use serde::{Deserialize, Serialize};

/// 32-bit color packed as `0xAARRGGBB`.
///
/// Serializes as a hex string (`"#rrggbb"` when opaque, `"#aarrggbb"` otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    /// Black color
    pub const BLACK: Self = Self(0xFF00_0000);
    /// White color
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Mid gray
    pub const GRAY: Self = Self(0xFF88_8888);

    /// Create a color from individual channels.
    #[must_use]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse a hex color string (e.g., `"#34c759"` or `"ff34c759"`).
    ///
    /// Six digits are `rrggbb` (opaque); eight digits are `aarrggbb`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }
        let value = match hex.len() {
            6 | 8 => u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidHex)?,
            _ => return Err(ColorParseError::InvalidLength),
        };
        if hex.len() == 6 {
            Ok(Self(0xFF00_0000 | value))
        } else {
            Ok(Self(value))
        }
    }

    /// Convert to a hex string, omitting alpha when fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.alpha() == 0xFF {
            format!("#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08x}", self.0)
        }
    }

    /// Linear interpolation between two colors, channel by channel.
    ///
    /// `ratio` is clamped to `[0, 1]`; a NaN ratio is treated as `0`. The
    /// endpoints are returned exactly.
    #[must_use]
    pub fn lerp(&self, other: &Self, ratio: f32) -> Self {
        let t = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Self::argb(
            mix(self.alpha(), other.alpha(), t),
            mix(self.red(), other.red(), t),
            mix(self.green(), other.green(), t),
            mix(self.blue(), other.blue(), t),
        )
    }
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    (from + (f32::from(to) - from) * t).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_channels() {
        let c = Color::argb(0x80, 0x11, 0x22, 0x33);
        assert_eq!(c, Color(0x8011_2233));
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x11);
        assert_eq!(c.green(), 0x22);
        assert_eq!(c.blue(), 0x33);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#dddddd"), Ok(Color::rgb(0xdd, 0xdd, 0xdd)));
        assert_eq!(Color::from_hex("34c759"), Ok(Color::rgb(0x34, 0xc7, 0x59)));
        assert_eq!(
            Color::from_hex("#8034c759"),
            Ok(Color::argb(0x80, 0x34, 0xc7, 0x59))
        );
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("+1234567"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::GRAY.to_hex(), "#888888");
        assert_eq!(Color::argb(0, 0, 0, 0).to_hex(), "#00000000");
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0x34, 0xc7, 0x59)).unwrap();
        assert_eq!(json, "\"#34c759\"");
        let back: Color = serde_json::from_str("\"#80ffffff\"").unwrap();
        assert_eq!(back, Color::argb(0x80, 0xff, 0xff, 0xff));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert_eq!(mid.alpha(), 0xFF);
        assert_eq!(mid.red(), 128);
        assert_eq!(mid.green(), 128);
        assert_eq!(mid.blue(), 128);
    }

    #[test]
    fn test_lerp_clamps_ratio() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(a.lerp(&b, -3.0), a);
        assert_eq!(a.lerp(&b, 7.5), b);
        assert_eq!(a.lerp(&b, f32::NAN), a);
    }

    #[test]
    fn test_lerp_interpolates_alpha() {
        let a = Color::argb(0, 0, 0, 0);
        let b = Color::WHITE;
        assert_eq!(a.lerp(&b, 0.25).alpha(), 64);
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidHex.to_string(),
            "invalid hex characters"
        );
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }

    proptest! {
        #[test]
        fn prop_lerp_at_zero_returns_from(a in any::<u32>(), b in any::<u32>()) {
            let (a, b) = (Color(a), Color(b));
            prop_assert_eq!(a.lerp(&b, 0.0), a);
        }

        #[test]
        fn prop_lerp_at_one_returns_to(a in any::<u32>(), b in any::<u32>()) {
            let (a, b) = (Color(a), Color(b));
            prop_assert_eq!(a.lerp(&b, 1.0), b);
        }

        #[test]
        fn prop_lerp_channels_stay_between_endpoints(a in any::<u32>(), b in any::<u32>(), t in 0.0f32..=1.0) {
            let (a, b) = (Color(a), Color(b));
            let c = a.lerp(&b, t);
            for (x, y, z) in [
                (a.alpha(), b.alpha(), c.alpha()),
                (a.red(), b.red(), c.red()),
                (a.green(), b.green(), c.green()),
                (a.blue(), b.blue(), c.blue()),
            ] {
                prop_assert!(z >= x.min(y) && z <= x.max(y));
            }
        }
    }
}
