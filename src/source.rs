//! Read-only pixel grids the encoder scans.

use crate::color::Color;
use crate::error::SvgError;
use crate::pixel::PixelLayout;

/// A read-only `width × height` grid of colors.
///
/// Implementations must return the same color for the same coordinates for
/// the duration of a conversion. `pixel` is only called with
/// `x < width()` and `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, x: u32, y: u32) -> Color;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        (**self).pixel(x, y)
    }
}

/// Borrowed raw pixel bytes with a known layout.
///
/// Rows are tightly packed unless a stride is given with [`PixelBuffer::with_stride`].
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap tightly packed pixels. Fails if `pixels` is shorter than
    /// `width * height * bytes_per_pixel`.
    pub fn new(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, SvgError> {
        let stride = (width as usize)
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(SvgError::DimensionsTooLarge { width, height })?;
        Self::with_stride(pixels, width, height, stride, layout)
    }

    /// Wrap pixels whose rows are `stride` bytes apart.
    pub fn with_stride(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Result<Self, SvgError> {
        let row_bytes = (width as usize)
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(SvgError::DimensionsTooLarge { width, height })?;
        if stride < row_bytes {
            return Err(SvgError::BufferTooSmall {
                needed: row_bytes,
                actual: stride,
            });
        }
        // The last row only needs its pixel bytes, not the full stride.
        let needed = match height as usize {
            0 => 0,
            h => stride
                .checked_mul(h - 1)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or(SvgError::DimensionsTooLarge { width, height })?,
        };
        if pixels.len() < needed {
            return Err(SvgError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
            layout,
        })
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl PixelSource for PixelBuffer<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let bpp = self.layout.bytes_per_pixel();
        let off = y as usize * self.stride + x as usize * bpp;
        self.layout.color_at(&self.pixels[off..off + bpp])
    }
}

/// Dimensions past `u32::MAX` saturate; the scan then covers only the
/// addressable part, and [`crate::Limits`] can reject such images up front.
#[cfg(feature = "imgref")]
fn saturating_dimension(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(feature = "imgref")]
impl<P> PixelSource for imgref::ImgRef<'_, P>
where
    P: Copy + Into<Color>,
{
    fn width(&self) -> u32 {
        saturating_dimension(imgref::Img::width(self))
    }

    fn height(&self) -> u32 {
        saturating_dimension(imgref::Img::height(self))
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        self[(x as usize, y as usize)].into()
    }
}
