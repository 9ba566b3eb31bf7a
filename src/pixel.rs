/// Pixel memory layout of a raw buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 2 channels, 8-bit grayscale + alpha.
    GrayAlpha8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA (straight alpha, 255 = opaque).
    Rgba8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
    /// 4 channels, 8-bit BGRX (opaque; 4th byte is padding, not alpha).
    Bgrx8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::GrayAlpha8 => 2,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Rgba8 | Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::GrayAlpha8 => 2,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Rgba8 | Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// Whether the layout carries a real alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::GrayAlpha8 | Self::Rgba8 | Self::Bgra8)
    }

    /// Decode one pixel's bytes. `px` must hold exactly `bytes_per_pixel()` bytes.
    pub(crate) fn color_at(&self, px: &[u8]) -> crate::Color {
        use crate::Color;
        match self {
            Self::Gray8 => Color::opaque(px[0], px[0], px[0]),
            Self::GrayAlpha8 => Color::from_rgba8(px[0], px[0], px[0], px[1]),
            Self::Rgb8 => Color::opaque(px[0], px[1], px[2]),
            Self::Rgba8 => Color::from_rgba8(px[0], px[1], px[2], px[3]),
            Self::Bgr8 | Self::Bgrx8 => Color::opaque(px[2], px[1], px[0]),
            Self::Bgra8 => Color::from_rgba8(px[2], px[1], px[0], px[3]),
        }
    }
}
