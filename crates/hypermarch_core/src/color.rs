//! RGBA colors
//!
//! Every channel, alpha included, lives in `[0, 1]`. The 8-bit form only
//! appears at the output boundary via [`Color::to_rgba8`].

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Linear RGBA color, each channel in `[0, 1]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Fully transparent black, the color of a ray that hit nothing
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque white, the backdrop every pixel is composited onto
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 0-255 channels and a 0-1 alpha
    ///
    /// This is the palette convention used in scene files written by hand.
    #[inline]
    pub fn from_rgb255(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0, a)
    }

    /// True when every channel is finite and within `[0, 1]`
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Convert to 8-bit RGBA, clamping out-of-range channels
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| {
            if c.is_nan() {
                0
            } else {
                (c.clamp(0.0, 1.0) * 255.0).round() as u8
            }
        };
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb255() {
        let c = Color::from_rgb255(255.0, 0.0, 51.0, 0.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
        assert_eq!(Color::new(0.5, 0.0, 1.0, 1.0).to_rgba8(), [128, 0, 255, 255]);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        let c = Color::new(2.0, -1.0, f32::NAN, 1.5);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_is_valid() {
        assert!(Color::WHITE.is_valid());
        assert!(Color::TRANSPARENT.is_valid());
        assert!(!Color::new(1.1, 0.0, 0.0, 1.0).is_valid());
        assert!(!Color::new(0.0, 0.0, 0.0, f32::NAN).is_valid());
        // 0-255 channels that were never converted
        assert!(!Color::new(227.0, 141.0, 51.0, 1.0).is_valid());
    }

    #[test]
    fn test_serialization() {
        let c = Color::new(0.25, 0.5, 0.75, 1.0);
        let text = ron::to_string(&c).unwrap();
        let back: Color = ron::from_str(&text).unwrap();
        assert_eq!(back, c);
    }
}
