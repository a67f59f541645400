//! Repository port for language server registrations.

use crate::language_server::domain::{
    LanguageServerId, LanguageServerName, LanguageServerRegistration,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for language server repository operations.
pub type LanguageServerRepositoryResult<T> = Result<T, LanguageServerRepositoryError>;

/// Storage contract for language server registrations.
#[async_trait]
pub trait LanguageServerRepository: Send + Sync {
    /// Stores a new registration.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerRepositoryError::DuplicateServer`] when the ID
    /// already exists or [`LanguageServerRepositoryError::DuplicateServerName`]
    /// when the name is already registered.
    async fn register(
        &self,
        registration: &LanguageServerRegistration,
    ) -> LanguageServerRepositoryResult<()>;

    /// Persists changes to an existing registration.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerRepositoryError::NotFound`] when the server
    /// does not exist.
    async fn update(
        &self,
        registration: &LanguageServerRegistration,
    ) -> LanguageServerRepositoryResult<()>;

    /// Finds a registration by identifier.
    async fn find_by_id(
        &self,
        id: LanguageServerId,
    ) -> LanguageServerRepositoryResult<Option<LanguageServerRegistration>>;

    /// Finds a registration by unique name.
    async fn find_by_name(
        &self,
        name: &LanguageServerName,
    ) -> LanguageServerRepositoryResult<Option<LanguageServerRegistration>>;

    /// Returns all registrations regardless of lifecycle state.
    async fn list_all(&self) -> LanguageServerRepositoryResult<Vec<LanguageServerRegistration>>;
}

/// Errors returned by language server repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LanguageServerRepositoryError {
    /// A server with the same identifier already exists.
    #[error("duplicate language server identifier: {0}")]
    DuplicateServer(LanguageServerId),

    /// A server with the same name already exists.
    #[error("duplicate language server name: {0}")]
    DuplicateServerName(LanguageServerName),

    /// The server was not found.
    #[error("language server not found: {0}")]
    NotFound(LanguageServerId),

    /// Storage-layer failure.
    #[error("registry storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl LanguageServerRepositoryError {
    /// Wraps a storage-layer failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
