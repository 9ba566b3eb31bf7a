use enough::StopReason;

/// Errors from configuring or running a raster-to-SVG conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SvgError {
    #[error("invalid threshold {0}: must be a number between 0 and 255")]
    InvalidThreshold(f64),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(alloc::string::String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for SvgError {
    fn from(r: StopReason) -> Self {
        SvgError::Cancelled(r)
    }
}
