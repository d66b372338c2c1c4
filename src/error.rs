//! Error types for icon generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum Error {
    /// Icon sizes must be at least one pixel.
    #[error("invalid icon size {0}: size must be positive")]
    InvalidSize(u32),

    /// The raster buffer could not be allocated.
    #[error("failed to allocate a {size}x{size} canvas")]
    CanvasAllocation { size: u32 },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// The icon file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A generator config could not be parsed or serialized.
    #[error("invalid generator config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for filesystem failures (directory creation or write).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::Write { .. })
    }
}
