use crate::color::{Color, CssRgb};
use crate::scan::{Direction, Run};

/// One output rectangle, covering exactly the pixels of one [`Run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Color of the run's first pixel.
    pub color: Color,
}

impl Rect {
    /// The `fill` attribute value, `rgb(R,G,B)`.
    pub fn fill(&self) -> CssRgb {
        self.color.css()
    }

    /// The `fill-opacity` attribute value, if the attribute should be written.
    pub fn fill_opacity(&self) -> Option<f64> {
        self.color.fill_opacity()
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && u64::from(x) < u64::from(self.x) + u64::from(self.width)
            && u64::from(y) < u64::from(self.y) + u64::from(self.height)
    }
}

impl From<Run> for Rect {
    fn from(run: Run) -> Self {
        let (width, height) = match run.direction {
            Direction::Horizontal => (run.length, 1),
            Direction::Vertical => (1, run.length),
        };
        Rect {
            x: run.x,
            y: run.y,
            width,
            height,
            color: run.color,
        }
    }
}
