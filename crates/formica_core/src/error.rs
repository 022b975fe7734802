//! Error types for world construction.

use thiserror::Error;

/// Failures raised while building a world. Everything after construction is
/// infallible: missing resources are reported through `Option`/`bool`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// One of the grid dimensions is zero.
    #[error("Invalid world size: {width}x{height}")]
    InvalidSize { width: u16, height: u16 },

    /// The nest does not lie on the grid.
    #[error("Nest ({x}, {y}) lies outside a {width}x{height} world")]
    NestOutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

/// Result type alias for world construction.
pub type Result<T> = std::result::Result<T, WorldError>;
