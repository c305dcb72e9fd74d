//! Error types for the tiling and rendering pipeline

use thiserror::Error;

/// Result type alias for cutplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or rendering a layout
#[derive(Error, Debug)]
pub enum Error {
    /// A dimension was non-positive, malformed, or supplied with the
    /// wrong number of values
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Failed to encode the rendered diagram
    #[error("Rendering failed: {0}")]
    RenderError(String),
}
