//! Error types for the resumark library.

use std::io;
use thiserror::Error;

/// Result type alias for resumark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the library's I/O and rendering
/// boundaries.
///
/// The two core transforms — segmentation and emphasis tokenization —
/// are total and never produce an error; malformed markup is a
/// classification outcome, not a failure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (HTML, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
