//! Error types for workspace domain values, translation and editing.

use super::{BackendUri, Position, Range};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while constructing workspace domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceDomainError {
    /// The workspace path is empty.
    #[error("workspace path must not be empty")]
    EmptyPath,

    /// The workspace path is not absolute.
    #[error("workspace path '{0}' must start with '/'")]
    RelativePath(String),

    /// The workspace path contains an empty, `.` or `..` segment.
    #[error("workspace path '{0}' contains an empty or relative segment")]
    InvalidSegment(String),

    /// A media type string is not of the form `type/subtype`.
    #[error("invalid media type: '{0}'")]
    InvalidMediaType(String),
}

/// Errors raised while translating identifiers between namespaces.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// The configured root URI is unusable.
    #[error("invalid workspace root URI: '{0}'")]
    InvalidRoot(String),

    /// A backend URI lies outside the workspace root.
    #[error("URI '{0}' is outside the workspace root")]
    OutsideRoot(BackendUri),

    /// A backend URI maps to a malformed workspace path.
    #[error("URI '{uri}' does not map to a valid workspace path: {source}")]
    MalformedPath {
        /// Offending backend URI.
        uri: BackendUri,
        /// Path validation failure.
        source: WorkspaceDomainError,
    },
}

/// Errors raised by the transform-and-invert editor.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// A range ends before it starts.
    #[error("malformed edit range {0}")]
    MalformedRange(Range),

    /// Two edit ranges overlap.
    #[error("overlapping edits: {first} and {second}")]
    OverlappingEdits {
        /// Earlier range in document order.
        first: Range,
        /// Later range in document order.
        second: Range,
    },

    /// A position lies beyond the end of its line or of the document.
    #[error("edit position {0} is outside the document")]
    RangeOutOfBounds(Position),

    /// Reading the source or writing the result failed.
    #[error("edit stream failure: {0}")]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for TransformError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
