//! # px2svg
//!
//! Raster to SVG conversion by run-length encoding pixels into rectangles.
//!
//! Each row (or column) of the image is split into runs of pixels whose color
//! is within a distance threshold of the run's first pixel. Every run becomes
//! one `<rect>` with `shape-rendering="crispEdges"`, so the SVG renders
//! pixel-for-pixel like the source. Both scan directions are tried and the one
//! producing fewer rectangles wins.
//!
//! ## Color similarity
//!
//! Distance is plain Euclidean distance over R, G and B. Alpha does not take
//! part; it only controls `fill-opacity`. Two colors merge when the distance is
//! strictly below the [`Threshold`], so the default threshold of `0` keeps
//! every pixel as its own rectangle.
//!
//! ## Non-Goals
//!
//! - Decoding image files (bring your own decoder; see [`PixelBuffer`])
//! - Curve or polygon tracing
//! - Perceptual color spaces
//!
//! ## Usage
//!
//! ```
//! use px2svg::{EncodeRequest, PixelBuffer, PixelLayout, Threshold, Unstoppable};
//!
//! let rgba: &[u8] = &[
//!     255, 0, 0, 255, 255, 0, 0, 255,
//!     0, 0, 255, 255, 0, 0, 255, 128,
//! ];
//! let source = PixelBuffer::new(rgba, 2, 2, PixelLayout::Rgba8)?;
//!
//! let encoding = EncodeRequest::new()
//!     .with_threshold(Threshold::new(16.0)?)
//!     .encode(&source, Unstoppable)?;
//! assert_eq!(encoding.len(), 2);
//!
//! let svg = encoding.to_svg();
//! assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
//! # Ok::<(), px2svg::SvgError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod color;
mod encode;
mod error;
mod limits;
mod pixel;
mod rect;
pub mod scan;
mod source;
pub mod svg;
mod threshold;

// Re-exports
pub use color::{Color, CssRgb};
pub use encode::{DirectionChoice, EncodeRequest, Encoding};
pub use enough::{Stop, Unstoppable};
pub use error::SvgError;
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use rect::Rect;
pub use scan::{Direction, Run};
pub use source::{PixelBuffer, PixelSource};
pub use threshold::Threshold;

/// Convert `source` to rectangles, picking the cheaper scan direction.
pub fn encode<S: PixelSource + ?Sized>(
    source: &S,
    threshold: Threshold,
    stop: impl Stop,
) -> Result<Encoding, SvgError> {
    EncodeRequest::new()
        .with_threshold(threshold)
        .encode(source, stop)
}

/// Convert `source` straight to an SVG document string.
pub fn encode_svg<S: PixelSource + ?Sized>(
    source: &S,
    threshold: Threshold,
    stop: impl Stop,
) -> Result<alloc::string::String, SvgError> {
    encode(source, threshold, stop).map(|encoding| encoding.to_svg())
}
