//! Service layer for language server registration and discovery.
//!
//! Provides [`LanguageServerRegistryService`] which coordinates server
//! registration, lifecycle transitions and discovery. The service also acts
//! as the [`BackendDiscovery`] collaborator of the dispatch layer.

use crate::dispatch::ports::{BackendDiscovery, DiscoveryError};
use crate::language_server::{
    domain::{
        DocumentSelector, LanguageServerDomainError, LanguageServerHandle, LanguageServerId,
        LanguageServerName, LanguageServerRegistration, ServerCapabilities,
    },
    ports::{LanguageServerRepository, LanguageServerRepositoryError},
};
use crate::workspace::domain::WorkspacePath;
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a language server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterLanguageServerRequest {
    name: String,
    language_id: String,
    extensions: Vec<String>,
}

impl RegisterLanguageServerRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, language_id: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            language_id: language_id.into(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Service-level errors for language server registry operations.
#[derive(Debug, Error)]
pub enum LanguageServerRegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LanguageServerDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] LanguageServerRepositoryError),
    /// No server exists with the given identifier.
    #[error("language server {0} not found")]
    NotFound(LanguageServerId),
}

/// Result type for language server registry service operations.
pub type LanguageServerRegistryServiceResult<T> = Result<T, LanguageServerRegistryServiceError>;

/// Language server registration and discovery service.
#[derive(Clone)]
pub struct LanguageServerRegistryService<R, C>
where
    R: LanguageServerRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> LanguageServerRegistryService<R, C>
where
    R: LanguageServerRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_server_or_error(
        &self,
        id: LanguageServerId,
    ) -> LanguageServerRegistryServiceResult<LanguageServerRegistration> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(LanguageServerRegistryServiceError::NotFound(id))
    }

    /// Registers a newly launched language server.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerRegistryServiceError`] when validation fails or
    /// the repository rejects the registration.
    pub async fn register(
        &self,
        request: RegisterLanguageServerRequest,
    ) -> LanguageServerRegistryServiceResult<LanguageServerRegistration> {
        let RegisterLanguageServerRequest {
            name,
            language_id,
            extensions,
        } = request;

        let server_name = LanguageServerName::new(name)?;
        let selector = DocumentSelector::new(language_id, extensions)?;
        let registration = LanguageServerRegistration::new(server_name, selector, &*self.clock);
        self.repository.register(&registration).await?;
        tracing::debug!(
            server = %registration.name(),
            id = %registration.id(),
            "registered language server"
        );
        Ok(registration)
    }

    /// Records a completed `initialize` handshake and stores capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerRegistryServiceError::NotFound`] for unknown
    /// servers, domain errors for invalid lifecycle transitions, or
    /// repository errors.
    pub async fn mark_initialized(
        &self,
        id: LanguageServerId,
        capabilities: ServerCapabilities,
    ) -> LanguageServerRegistryServiceResult<LanguageServerRegistration> {
        let mut registration = self.find_server_or_error(id).await?;
        registration.mark_initialized(capabilities, &*self.clock)?;
        self.repository.update(&registration).await?;
        Ok(registration)
    }

    /// Records server shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerRegistryServiceError::NotFound`] for unknown
    /// servers, domain errors for invalid lifecycle transitions, or
    /// repository errors.
    pub async fn terminate(
        &self,
        id: LanguageServerId,
    ) -> LanguageServerRegistryServiceResult<LanguageServerRegistration> {
        let mut registration = self.find_server_or_error(id).await?;
        registration.mark_terminated(&*self.clock)?;
        self.repository.update(&registration).await?;
        tracing::debug!(server = %registration.name(), "language server terminated");
        Ok(registration)
    }

    /// Finds a registration by identifier.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn find_by_id(
        &self,
        id: LanguageServerId,
    ) -> LanguageServerRegistryServiceResult<Option<LanguageServerRegistration>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds a registration by name.
    ///
    /// # Errors
    ///
    /// Returns domain validation errors when the name is invalid and
    /// repository errors.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> LanguageServerRegistryServiceResult<Option<LanguageServerRegistration>> {
        let validated_name = LanguageServerName::new(name)?;
        Ok(self.repository.find_by_name(&validated_name).await?)
    }

    /// Lists every registration.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list_all(
        &self,
    ) -> LanguageServerRegistryServiceResult<Vec<LanguageServerRegistration>> {
        Ok(self.repository.list_all().await?)
    }

    /// Snapshots the initialized servers applicable to `path`, oldest
    /// registration first.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn applicable_servers(
        &self,
        path: &WorkspacePath,
    ) -> LanguageServerRegistryServiceResult<Vec<LanguageServerHandle>> {
        let mut applicable: Vec<LanguageServerRegistration> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|registration| registration.is_applicable_to(path))
            .collect();
        applicable.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.name().cmp(right.name()))
        });
        Ok(applicable
            .iter()
            .map(LanguageServerHandle::snapshot)
            .collect())
    }
}

#[async_trait]
impl<R, C> BackendDiscovery for LanguageServerRegistryService<R, C>
where
    R: LanguageServerRepository,
    C: Clock + Send + Sync,
{
    async fn resolve(
        &self,
        path: &WorkspacePath,
    ) -> Result<Vec<LanguageServerHandle>, DiscoveryError> {
        self.applicable_servers(path)
            .await
            .map_err(DiscoveryError::unavailable)
    }
}
