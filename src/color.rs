//! Pixel color value and the RGB distance metric used for run merging.

use core::fmt;

use crate::threshold::Threshold;

/// Largest alpha value in the 7-bit convention (fully transparent).
pub const ALPHA_TRANSPARENT: u8 = 127;

/// A single pixel color.
///
/// Alpha follows the 7-bit convention used by palette-era raster libraries:
/// `0` is fully opaque and `127` is fully transparent. Use
/// [`Color::from_rgba8`] to convert from 8-bit straight alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::opaque(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Convert from 8-bit straight alpha (`255` = opaque).
    ///
    /// `alpha = 127 - (a >> 1)`, so `255` maps to `0` and `0` maps to `127`.
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, a: u8) -> Self {
        Self::new(red, green, blue, ALPHA_TRANSPARENT - (a >> 1))
    }

    /// Squared Euclidean distance over the RGB channels. Alpha is ignored.
    pub fn distance_squared(&self, other: &Color) -> u32 {
        let dr = i32::from(self.red) - i32::from(other.red);
        let dg = i32::from(self.green) - i32::from(other.green);
        let db = i32::from(self.blue) - i32::from(other.blue);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance over the RGB channels.
    pub fn distance(&self, other: &Color) -> f64 {
        libm::sqrt(f64::from(self.distance_squared(other)))
    }

    /// Whether `other` lies strictly closer than `threshold` in RGB space.
    ///
    /// A threshold of zero never matches, not even identical colors.
    pub fn is_similar(&self, other: &Color, threshold: Threshold) -> bool {
        self.distance(other) < threshold.get()
    }

    /// `fill-opacity` for this color, or `None` when the attribute is omitted.
    ///
    /// Present only for `0 < alpha < 128`, as `(128 - alpha) / 128`.
    pub fn fill_opacity(&self) -> Option<f64> {
        if self.alpha > 0 && self.alpha < 128 {
            Some(f64::from(128 - self.alpha) / 128.0)
        } else {
            None
        }
    }

    /// `rgb(R,G,B)` display adapter.
    pub fn css(&self) -> CssRgb {
        CssRgb(*self)
    }
}

/// Formats a [`Color`] as `rgb(R,G,B)`.
#[derive(Clone, Copy, Debug)]
pub struct CssRgb(Color);

impl fmt::Display for CssRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0.red, self.0.green, self.0.blue)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Color {
    fn from(px: rgb::RGBA8) -> Self {
        Color::from_rgba8(px.r, px.g, px.b, px.a)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(px: rgb::RGB8) -> Self {
        Color::opaque(px.r, px.g, px.b)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn t(v: f64) -> Threshold {
        Threshold::new(v).unwrap()
    }

    #[test]
    fn distance_ignores_alpha() {
        let a = Color::new(10, 20, 30, 0);
        let b = Color::new(10, 20, 30, 127);
        assert_eq!(a.distance_squared(&b), 0);
    }

    #[test]
    fn distance_is_rgb_euclidean() {
        let a = Color::opaque(0, 0, 0);
        let b = Color::opaque(3, 4, 0);
        assert_eq!(a.distance_squared(&b), 25);
        assert_eq!(Color::BLACK.distance_squared(&Color::WHITE), 3 * 255 * 255);
    }

    #[test]
    fn similarity_is_strict() {
        let a = Color::opaque(0, 0, 0);
        let b = Color::opaque(3, 4, 0);
        // distance is exactly 5
        assert!(!a.is_similar(&b, t(5.0)));
        assert!(a.is_similar(&b, t(5.01)));
        assert!(!a.is_similar(&b, t(4.99)));
    }

    #[test]
    fn threshold_equal_to_irrational_distance_is_not_similar() {
        let a = Color::opaque(0, 0, 0);
        let b = Color::opaque(1, 1, 0);
        assert!(!a.is_similar(&b, t(libm::sqrt(2.0))));
        // A threshold equal to the distance never merges, rational or not.
        for r in 0..=180u8 {
            for g in 0..=180u8 {
                let c = Color::opaque(r, g, 0);
                let d = libm::sqrt(f64::from(u32::from(r) * u32::from(r) + u32::from(g) * u32::from(g)));
                assert!(!Color::BLACK.is_similar(&c, t(d)), "merged at distance {d}");
            }
        }
        assert!(a.is_similar(&b, t(1.4143)));
    }

    #[test]
    fn zero_threshold_never_matches() {
        let c = Color::opaque(42, 42, 42);
        assert!(!c.is_similar(&c, Threshold::ZERO));
        assert!(c.is_similar(&c, t(0.001)));
    }

    #[test]
    fn opacity_mapping() {
        assert_eq!(Color::new(0, 0, 0, 0).fill_opacity(), None);
        assert_eq!(Color::new(0, 0, 0, 64).fill_opacity(), Some(0.5));
        assert_eq!(Color::new(0, 0, 0, 127).fill_opacity(), Some(1.0 / 128.0));
        assert_eq!(Color::new(0, 0, 0, 1).fill_opacity(), Some(127.0 / 128.0));
        assert_eq!(Color::new(0, 0, 0, 128).fill_opacity(), None);
        assert_eq!(Color::new(0, 0, 0, 255).fill_opacity(), None);
    }

    #[test]
    fn rgba8_conversion() {
        assert_eq!(Color::from_rgba8(1, 2, 3, 255).alpha, 0);
        assert_eq!(Color::from_rgba8(1, 2, 3, 0).alpha, 127);
        assert_eq!(Color::from_rgba8(1, 2, 3, 128).alpha, 63);
    }

    #[test]
    fn css_format() {
        assert_eq!(Color::opaque(255, 0, 128).css().to_string(), "rgb(255,0,128)");
    }
}
