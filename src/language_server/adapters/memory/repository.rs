//! In-memory repository for language server registrations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::language_server::{
    domain::{LanguageServerId, LanguageServerName, LanguageServerRegistration},
    ports::{
        LanguageServerRepository, LanguageServerRepositoryError, LanguageServerRepositoryResult,
    },
};

/// Thread-safe in-memory language server repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLanguageServerRepository {
    state: Arc<RwLock<InMemoryRepositoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryRepositoryState {
    servers: HashMap<LanguageServerId, LanguageServerRegistration>,
    name_index: HashMap<LanguageServerName, LanguageServerId>,
}

impl InMemoryLanguageServerRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> LanguageServerRepositoryError {
    LanguageServerRepositoryError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl LanguageServerRepository for InMemoryLanguageServerRepository {
    async fn register(
        &self,
        registration: &LanguageServerRegistration,
    ) -> LanguageServerRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        if state.servers.contains_key(&registration.id()) {
            return Err(LanguageServerRepositoryError::DuplicateServer(
                registration.id(),
            ));
        }

        if state.name_index.contains_key(registration.name()) {
            return Err(LanguageServerRepositoryError::DuplicateServerName(
                registration.name().clone(),
            ));
        }

        state
            .name_index
            .insert(registration.name().clone(), registration.id());
        state
            .servers
            .insert(registration.id(), registration.clone());
        Ok(())
    }

    async fn update(
        &self,
        registration: &LanguageServerRegistration,
    ) -> LanguageServerRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        if !state.servers.contains_key(&registration.id()) {
            return Err(LanguageServerRepositoryError::NotFound(registration.id()));
        }

        state
            .servers
            .insert(registration.id(), registration.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: LanguageServerId,
    ) -> LanguageServerRepositoryResult<Option<LanguageServerRegistration>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.servers.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &LanguageServerName,
    ) -> LanguageServerRepositoryResult<Option<LanguageServerRegistration>> {
        let state = self.state.read().map_err(lock_error)?;
        let server = state
            .name_index
            .get(name)
            .and_then(|id| state.servers.get(id))
            .cloned();
        Ok(server)
    }

    async fn list_all(&self) -> LanguageServerRepositoryResult<Vec<LanguageServerRegistration>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.servers.values().cloned().collect())
    }
}
