//! Backend discovery port.

use crate::language_server::domain::LanguageServerHandle;
use crate::workspace::domain::WorkspacePath;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Resolves the language servers applicable to a workspace resource.
#[async_trait]
pub trait BackendDiscovery: Send + Sync {
    /// Returns a snapshot of the applicable servers in registry order.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when the registry cannot be consulted.
    async fn resolve(&self, path: &WorkspacePath)
    -> Result<Vec<LanguageServerHandle>, DiscoveryError>;
}

/// The backend registry could not be consulted.
#[derive(Debug, Clone, Error)]
#[error("backend discovery unavailable: {0}")]
pub struct DiscoveryError(Arc<dyn std::error::Error + Send + Sync>);

impl DiscoveryError {
    /// Wraps the underlying registry failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
