//! Error types for md2site.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for md2site operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown or generating a site.
#[derive(Error, Debug)]
pub enum Error {
    /// An HTML node is missing content it needs to render.
    #[error("Invalid HTML node: {0}")]
    Content(String),

    /// A block type name that does not map to any known block type.
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    /// The document has no `# Title` line.
    #[error("No title found: document has no level-one heading")]
    MissingTitle,

    /// Source directory for static assets does not exist.
    #[error("Source directory not found: {}", .0.display())]
    SourceDirNotFound(PathBuf),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
