//! Error types for dispatch requests and backend payloads.

use crate::dispatch::ports::DiscoveryError;
use crate::workspace::domain::TranslationError;
use thiserror::Error;

/// Dispatch-level failures. Per-backend problems never surface here.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The request is missing or has invalid required fields.
    #[error("malformed dispatch request: {0}")]
    MalformedRequest(String),

    /// The backend registry could not be consulted.
    #[error(transparent)]
    DiscoveryUnavailable(#[from] DiscoveryError),
}

/// Reasons a resolved backend payload could not be used.
#[derive(Debug, Clone, Error)]
pub enum PayloadError {
    /// The payload does not have the shape the query expects.
    #[error("unexpected result shape: {0}")]
    Decode(String),

    /// An identifier in the payload could not be translated.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
