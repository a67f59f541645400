//! Read-only dispatch snapshot of an initialized language server.

use super::{LanguageServerId, LanguageServerName, LanguageServerRegistration, ServerCapabilities};
use std::sync::Arc;

/// Immutable snapshot of one initialized server, taken when a dispatch
/// resolves its backend set.
///
/// Cloning is cheap; every clone shares the same capability snapshot.
/// Registry mutations after the snapshot was taken are not reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageServerHandle {
    inner: Arc<HandleInner>,
}

#[derive(Debug, PartialEq, Eq)]
struct HandleInner {
    id: LanguageServerId,
    name: LanguageServerName,
    capabilities: ServerCapabilities,
}

impl LanguageServerHandle {
    /// Creates a handle from its parts.
    #[must_use]
    pub fn new(
        id: LanguageServerId,
        name: LanguageServerName,
        capabilities: ServerCapabilities,
    ) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                id,
                name,
                capabilities,
            }),
        }
    }

    /// Snapshots a registration.
    #[must_use]
    pub fn snapshot(registration: &LanguageServerRegistration) -> Self {
        Self::new(
            registration.id(),
            registration.name().clone(),
            registration.capabilities().clone(),
        )
    }

    /// Returns the server identifier.
    #[must_use]
    pub fn id(&self) -> LanguageServerId {
        self.inner.id
    }

    /// Returns the server name.
    #[must_use]
    pub fn name(&self) -> &LanguageServerName {
        &self.inner.name
    }

    /// Returns the advertised capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &ServerCapabilities {
        &self.inner.capabilities
    }
}
