//! Errors returned across the caller-facing boundary.

use crate::dispatch::domain::DispatchError;
use crate::workspace::domain::WorkspaceDomainError;
use crate::workspace::services::FileEditError;
use serde::Serialize;
use thiserror::Error;

/// Application error code for failed workspace operations.
pub const SERVER_ERROR: i64 = -27_000;

/// JSON-RPC code for unknown methods.
pub const METHOD_NOT_FOUND: i64 = -32_601;

/// JSON-RPC code for parameters that cannot be decoded or validated.
pub const INVALID_PARAMS: i64 = -32_602;

/// Error object returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} (code {code})")]
pub struct ServiceError {
    code: i64,
    message: String,
}

impl ServiceError {
    /// Creates an error with an explicit code.
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A failed workspace operation.
    #[must_use]
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(SERVER_ERROR, message)
    }

    /// An unknown method.
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("method not found: {method}"))
    }

    /// Parameters that cannot be decoded or validated.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DispatchError> for ServiceError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::MalformedRequest(_) => Self::invalid_params(err.to_string()),
            DispatchError::DiscoveryUnavailable(_) => Self::server_error(err.to_string()),
        }
    }
}

impl From<FileEditError> for ServiceError {
    fn from(err: FileEditError) -> Self {
        Self::server_error(err.to_string())
    }
}

impl From<WorkspaceDomainError> for ServiceError {
    fn from(err: WorkspaceDomainError) -> Self {
        Self::invalid_params(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_params(format!("invalid params: {err}"))
    }
}
