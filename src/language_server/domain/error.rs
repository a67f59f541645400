//! Error types for language server domain validation and parsing.

use super::LanguageServerId;
use thiserror::Error;

/// Errors returned while constructing language server domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LanguageServerDomainError {
    /// The server name is empty after trimming.
    #[error("language server name must not be empty")]
    EmptyServerName,

    /// The server name contains characters outside `[a-z0-9_]`.
    #[error(
        "language server name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidServerName(String),

    /// The server name exceeds the 100-character limit.
    #[error("language server name exceeds 100 character limit: {0}")]
    ServerNameTooLong(String),

    /// The document selector language identifier is empty.
    #[error("document selector language id must not be empty")]
    EmptyLanguageId,

    /// The document selector lists no file extensions.
    #[error("document selector for '{0}' must list at least one file extension")]
    EmptySelector(String),

    /// A document selector extension is empty or contains a path separator.
    #[error("invalid file extension in document selector: '{0}'")]
    InvalidExtension(String),

    /// Transitioning between two lifecycle states is invalid.
    #[error("invalid language server lifecycle transition for {server_id}: {from} -> {to}")]
    InvalidLifecycleTransition {
        /// Server identifier.
        server_id: LanguageServerId,
        /// Current lifecycle state.
        from: String,
        /// Requested target lifecycle state.
        to: String,
    },
}

/// Error returned while parsing a lifecycle state from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown language server lifecycle state: {0}")]
pub struct ParseLifecycleStateError(pub String);
