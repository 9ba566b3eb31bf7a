//! SVG document writer.
//!
//! Output shape, one rect per line:
//!
//! ```text
//! <svg xmlns="http://www.w3.org/2000/svg" shape-rendering="crispEdges" width="W" height="H" viewBox="0 0 W H">
//!   <rect x="X" y="Y" width="Wr" height="Hr" fill="rgb(R,G,B)" fill-opacity="A"/>
//! </svg>
//! ```
//!
//! `fill-opacity` is only written for partially transparent colors. An
//! encoding with no rectangles becomes a self-closing `<svg .../>`.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::encode::Encoding;
use crate::rect::Rect;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Write `encoding` as an SVG document (terminated by a newline) to `out`.
pub fn write_svg<W: Write + ?Sized>(encoding: &Encoding, out: &mut W) -> fmt::Result {
    let (w, h) = (encoding.width, encoding.height);
    write!(
        out,
        "<svg xmlns=\"{SVG_NAMESPACE}\" shape-rendering=\"crispEdges\" \
         width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\""
    )?;
    if encoding.is_empty() {
        return out.write_str("/>\n");
    }
    out.write_str(">\n")?;
    for rect in encoding.rects() {
        out.write_str("  ")?;
        write_rect(rect, out)?;
        out.write_char('\n')?;
    }
    out.write_str("</svg>\n")
}

/// Write a single `<rect .../>` element.
pub fn write_rect<W: Write + ?Sized>(rect: &Rect, out: &mut W) -> fmt::Result {
    write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        rect.fill()
    )?;
    if let Some(opacity) = rect.fill_opacity() {
        write!(out, " fill-opacity=\"{opacity}\"")?;
    }
    out.write_str("/>")
}

impl Encoding {
    /// Render as an SVG document string.
    pub fn to_svg(&self) -> String {
        // ~70 bytes per rect line
        let mut out = String::with_capacity(128 + self.len() * 72);
        // Writing into a String cannot fail.
        let _ = write_svg(self, &mut out);
        out
    }

    /// Write the SVG document to an I/O sink.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, mut out: W) -> Result<(), crate::SvgError> {
        out.write_all(self.to_svg().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write the SVG document to a file, replacing it if it exists.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), crate::SvgError> {
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_svg(self, f)
    }
}
