//! Run scanning: split the grid into maximal runs of similar pixels along one axis.

use alloc::vec::Vec;
use enough::Stop;

use crate::color::Color;
use crate::error::SvgError;
use crate::limits::Limits;
use crate::source::PixelSource;
use crate::threshold::Threshold;

/// Scan axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row-major scan; runs extend to the right.
    Horizontal,
    /// Column-major scan; runs extend downward.
    Vertical,
}

/// A contiguous run of pixels, all within threshold of the first pixel's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Color of the run's first pixel.
    pub color: Color,
    pub x: u32,
    pub y: u32,
    /// Number of pixels along the scan axis, always at least 1.
    pub length: u32,
    pub direction: Direction,
}

/// Scan `source` in `direction`, returning runs in scan order.
///
/// Each run grows while the next pixel is similar to the run's *first* pixel,
/// so gradual drift ends a run once it strays past the threshold from its
/// origin. The runs tile the grid exactly.
pub fn scan<S: PixelSource + ?Sized>(
    source: &S,
    threshold: Threshold,
    direction: Direction,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<Run>, SvgError> {
    let width = source.width();
    let height = source.height();
    let (lines, line_len) = match direction {
        Direction::Horizontal => (height, width),
        Direction::Vertical => (width, height),
    };
    // Maps (line, offset along the line) to pixel coordinates.
    let at = |line: u32, pos: u32| match direction {
        Direction::Horizontal => (pos, line),
        Direction::Vertical => (line, pos),
    };

    let mut runs = Vec::new();
    for line in 0..lines {
        stop.check()?;
        let mut pos = 0;
        while pos < line_len {
            let (x, y) = at(line, pos);
            let color = source.pixel(x, y);
            let mut length = 1;
            while pos + length < line_len {
                let (nx, ny) = at(line, pos + length);
                if !color.is_similar(&source.pixel(nx, ny), threshold) {
                    break;
                }
                length += 1;
            }
            runs.push(Run {
                color,
                x,
                y,
                length,
                direction,
            });
            pos += length;
        }
        if let Some(limits) = limits {
            limits.check_rects(runs.len())?;
        }
    }

    log::trace!(
        "{direction:?} scan of {width}x{height}: {} runs",
        runs.len()
    );
    Ok(runs)
}
