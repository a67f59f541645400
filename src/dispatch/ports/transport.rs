//! Transport port for calling one language server.

use crate::language_server::domain::{LanguageServerHandle, LanguageServerId};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Request/response channel to running language servers.
#[async_trait]
pub trait LanguageServerTransport: Send + Sync {
    /// Sends `method` with `params` to `server` and awaits the result.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ServerTerminated`] when the server is gone,
    /// [`TransportError::Rpc`] when it answered with an error, and
    /// [`TransportError::Io`] for channel failures.
    async fn request(
        &self,
        server: &LanguageServerHandle,
        method: &str,
        params: Value,
    ) -> TransportResult<Value>;
}

/// Errors returned by transport adapters.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The server process is no longer running.
    #[error("language server {0} has terminated")]
    ServerTerminated(LanguageServerId),

    /// The server answered with a JSON-RPC error.
    #[error("language server error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message.
        message: String,
    },

    /// The channel to the server failed.
    #[error("language server channel error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a channel failure.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
