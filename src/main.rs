use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use px2svg::{DirectionChoice, EncodeRequest, Limits, PixelBuffer, PixelLayout, Threshold, Unstoppable};

/// Convert a raster image (PNG, GIF, ...) into an SVG made of crisp-edged rectangles.
#[derive(Parser, Debug)]
#[command(name = "px2svg", version)]
#[command(about = "Convert a raster image into an SVG of run-length rectangles")]
struct Args {
    /// Local path or http(s) URL of the source image
    input: String,

    /// Merge neighbouring pixels closer than this RGB distance (0 disables merging)
    #[arg(short, long, default_value_t = 0.0)]
    threshold: f64,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scan direction; `auto` keeps whichever needs fewer rectangles
    #[arg(short, long, value_enum, default_value_t = Scan::Auto)]
    direction: Scan,

    /// Refuse images with more pixels than this
    #[arg(long)]
    max_pixels: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scan {
    Auto,
    Horizontal,
    Vertical,
}

impl From<Scan> for DirectionChoice {
    fn from(scan: Scan) -> Self {
        match scan {
            Scan::Auto => DirectionChoice::Auto,
            Scan::Horizontal => DirectionChoice::Horizontal,
            Scan::Vertical => DirectionChoice::Vertical,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let threshold = Threshold::new(args.threshold)?;

    let image = load_image(&args.input)
        .with_context(|| format!("source unavailable: {}", args.input))?;
    info!("decoded {} ({}x{})", args.input, image.width(), image.height());

    let source = PixelBuffer::new(image.as_raw(), image.width(), image.height(), PixelLayout::Rgba8)?;
    let limits = Limits {
        max_pixels: args.max_pixels,
        ..Default::default()
    };
    let encoding = EncodeRequest::new()
        .with_threshold(threshold)
        .with_direction(args.direction.into())
        .with_limits(&limits)
        .encode(&source, Unstoppable)?;
    info!(
        "{} rects, {:?} scan",
        encoding.len(),
        encoding.direction
    );

    match &args.output {
        Some(path) => encoding
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => encoding.write_to(io::stdout().lock())?,
    }
    Ok(())
}

/// Read the image bytes from disk or over HTTP and decode them to RGBA8.
fn load_image(input: &str) -> Result<image::RgbaImage> {
    let bytes = if input.starts_with("http://") || input.starts_with("https://") {
        reqwest::blocking::get(input)?
            .error_for_status()?
            .bytes()?
            .to_vec()
    } else {
        std::fs::read(input)?
    };
    let decoded = image::load_from_memory(&bytes).context("unrecognized or corrupt image data")?;
    Ok(decoded.to_rgba8())
}
