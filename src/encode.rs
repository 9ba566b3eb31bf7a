use alloc::vec::Vec;
use enough::Stop;

use crate::error::SvgError;
use crate::limits::Limits;
use crate::rect::Rect;
use crate::scan::{self, Direction, Run};
use crate::source::PixelSource;
use crate::threshold::Threshold;

/// Which scan directions an [`EncodeRequest`] tries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectionChoice {
    /// Scan both ways and keep the encoding with fewer rectangles.
    /// Ties go to [`Direction::Vertical`].
    #[default]
    Auto,
    /// Only scan rows.
    Horizontal,
    /// Only scan columns.
    Vertical,
}

/// The rectangles chosen for one image, in scan order.
#[derive(Clone, Debug, PartialEq)]
pub struct Encoding {
    pub width: u32,
    pub height: u32,
    pub direction: Direction,
    rects: Vec<Rect>,
}

impl Encoding {
    pub(crate) fn from_runs(width: u32, height: u32, direction: Direction, runs: Vec<Run>) -> Self {
        Self {
            width,
            height,
            direction,
            rects: runs.into_iter().map(Rect::from).collect(),
        }
    }

    /// Rectangles in scan order (row-major for horizontal, column-major for vertical).
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn into_rects(self) -> Vec<Rect> {
        self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Builder for a raster-to-rectangles conversion.
///
/// ```
/// use px2svg::{EncodeRequest, PixelBuffer, PixelLayout, Threshold, Unstoppable};
///
/// let pixels = [0u8, 0, 0, 0, 0, 0, 255, 255, 255];
/// let source = PixelBuffer::new(&pixels, 3, 1, PixelLayout::Rgb8)?;
/// let encoding = EncodeRequest::new()
///     .with_threshold(Threshold::new(10.0)?)
///     .encode(&source, Unstoppable)?;
/// assert_eq!(encoding.len(), 2);
/// # Ok::<(), px2svg::SvgError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    threshold: Threshold,
    direction: DirectionChoice,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    /// Threshold 0 (no merging), both directions, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_direction(mut self, direction: DirectionChoice) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Run the conversion.
    ///
    /// A zero-sized source yields an empty encoding rather than an error.
    pub fn encode<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        stop: impl Stop,
    ) -> Result<Encoding, SvgError> {
        let stop: &dyn Stop = &stop;
        let width = source.width();
        let height = source.height();
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }

        let scan_one = |direction| {
            scan::scan(source, self.threshold, direction, self.limits, stop)
                .map(|runs| Encoding::from_runs(width, height, direction, runs))
        };

        let encoding = match self.direction {
            DirectionChoice::Horizontal => scan_one(Direction::Horizontal)?,
            DirectionChoice::Vertical => scan_one(Direction::Vertical)?,
            DirectionChoice::Auto => {
                let horizontal = scan_one(Direction::Horizontal)?;
                let vertical = scan_one(Direction::Vertical)?;
                log::debug!(
                    "{width}x{height}: {} horizontal rects, {} vertical rects",
                    horizontal.len(),
                    vertical.len()
                );
                if horizontal.len() < vertical.len() {
                    horizontal
                } else {
                    vertical
                }
            }
        };

        log::debug!(
            "encoded {width}x{height} as {} {:?} rects (threshold {})",
            encoding.len(),
            encoding.direction,
            self.threshold.get()
        );
        Ok(encoding)
    }
}
