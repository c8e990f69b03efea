//! Error types for the media kit engine

use thiserror::Error;

/// Result type alias for fallible boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the crate boundary.
///
/// Editor transitions themselves never fail; these only come up when
/// parsing names from strings, decoding saved documents or writing an
/// export somewhere.
#[derive(Error, Debug)]
pub enum Error {
    /// Element type name outside `social|text|metric|photo|chart`
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    /// Property key that the mutation controller does not know
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// No built-in template with that name
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A saved element record could not be turned into an element
    #[error("Invalid element record: {0}")]
    InvalidRecord(String),

    /// Filesystem failure while delivering an export
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed saved document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
