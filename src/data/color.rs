use serde::{Deserialize, Serialize};

/// Opaque RGB fill color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Default canopy color
    pub const LEAF: Rgb = Rgb::new(0.207, 0.344, 0.415);
    /// Default trunk color
    pub const TRUNK: Rgb = Rgb::new(0.155, 0.258, 0.311);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channels clamped to [0, 1]
    pub fn clamped(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '{}': expected 6 hex digits", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|e| format!("Invalid hex color '{}': {}", hex, e))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// CSS `rgb(r, g, b)` string for canvas fill styles
    pub fn to_css(&self) -> String {
        let c = self.clamped();
        format!(
            "rgb({}, {}, {})",
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_css() {
        assert_eq!(Rgb::LEAF.to_css(), "rgb(53, 88, 106)");
        assert_eq!(Rgb::TRUNK.to_css(), "rgb(40, 66, 79)");
    }

    #[test]
    fn test_from_hex() {
        let c = Rgb::from_hex("#ff8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 0.0001);
        assert_eq!(c.b, 0.0);

        assert!(Rgb::from_hex("00ff00").is_ok());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        // from_str_radix alone would accept a sign per channel
        assert!(Rgb::from_hex("#+1+2+3").is_err());
    }

    #[test]
    fn test_css_clamps_channels() {
        assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_css(), "rgb(255, 0, 0)");
    }
}
