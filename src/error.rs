//! Error types for costmap denoising.

use thiserror::Error;

use crate::core::Window;

/// Costmap denoise error type
#[derive(Error, Debug)]
pub enum DenoiseError {
    /// Source and target buffers passed to an elementwise conversion
    /// have different dimensions. The call is aborted before any cell
    /// is written.
    #[error(
        "source and target dimensions differ: {expected_width}x{expected_height} vs {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// Source width in cells.
        expected_width: usize,
        /// Source height in cells.
        expected_height: usize,
        /// Target width in cells.
        actual_width: usize,
        /// Target height in cells.
        actual_height: usize,
    },

    /// Update window does not fit inside the costmap.
    #[error("window {window:?} escapes {width}x{height} costmap")]
    WindowOutOfBounds {
        /// The offending window.
        window: Window,
        /// Costmap width in cells.
        width: usize,
        /// Costmap height in cells.
        height: usize,
    },

    /// Invalid or unparsable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while loading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DenoiseError {
    fn from(e: toml::de::Error) -> Self {
        DenoiseError::Config(e.to_string())
    }
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, DenoiseError>;
