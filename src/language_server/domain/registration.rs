//! Language server registration aggregate root.

use super::{
    DocumentSelector, LanguageServerDomainError, LanguageServerId, LanguageServerName,
    ParseLifecycleStateError, ServerCapabilities,
};
use crate::workspace::domain::WorkspacePath;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a registered language server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageServerLifecycleState {
    /// The server process is launched but has not completed `initialize`.
    Starting,
    /// The server completed `initialize` and accepts requests.
    Initialized,
    /// The server has shut down. Terminal.
    Terminated,
}

impl LanguageServerLifecycleState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Initialized => "initialized",
            Self::Terminated => "terminated",
        }
    }

    /// Returns whether a server in this state may receive dispatches.
    #[must_use]
    pub const fn accepts_requests(self) -> bool {
        matches!(self, Self::Initialized)
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Starting, Self::Initialized | Self::Terminated)
                | (Self::Initialized, Self::Initialized | Self::Terminated)
        )
    }
}

impl fmt::Display for LanguageServerLifecycleState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LanguageServerLifecycleState {
    type Error = ParseLifecycleStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "starting" => Ok(Self::Starting),
            "initialized" => Ok(Self::Initialized),
            "terminated" => Ok(Self::Terminated),
            _ => Err(ParseLifecycleStateError(value.to_owned())),
        }
    }
}

/// Language server registration aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageServerRegistration {
    id: LanguageServerId,
    name: LanguageServerName,
    selector: DocumentSelector,
    lifecycle_state: LanguageServerLifecycleState,
    capabilities: ServerCapabilities,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a stored registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLanguageServerData {
    /// Stored server identifier.
    pub id: LanguageServerId,
    /// Stored server name.
    pub name: LanguageServerName,
    /// Stored document selector.
    pub selector: DocumentSelector,
    /// Stored lifecycle state.
    pub lifecycle_state: LanguageServerLifecycleState,
    /// Stored capability snapshot.
    pub capabilities: ServerCapabilities,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl LanguageServerRegistration {
    /// Creates a new registration in the `starting` state with no
    /// capabilities.
    #[must_use]
    pub fn new(name: LanguageServerName, selector: DocumentSelector, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: LanguageServerId::new(),
            name,
            selector,
            lifecycle_state: LanguageServerLifecycleState::Starting,
            capabilities: ServerCapabilities::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a registration from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedLanguageServerData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            selector: data.selector,
            lifecycle_state: data.lifecycle_state,
            capabilities: data.capabilities,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the server identifier.
    #[must_use]
    pub const fn id(&self) -> LanguageServerId {
        self.id
    }

    /// Returns the validated server name.
    #[must_use]
    pub const fn name(&self) -> &LanguageServerName {
        &self.name
    }

    /// Returns the document selector.
    #[must_use]
    pub const fn selector(&self) -> &DocumentSelector {
        &self.selector
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn lifecycle_state(&self) -> LanguageServerLifecycleState {
        self.lifecycle_state
    }

    /// Returns the advertised capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &ServerCapabilities {
        &self.capabilities
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records a completed `initialize` handshake.
    ///
    /// Calling this on an already initialized server refreshes its
    /// capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerDomainError::InvalidLifecycleTransition`] when
    /// the server has terminated.
    pub fn mark_initialized(
        &mut self,
        capabilities: ServerCapabilities,
        clock: &impl Clock,
    ) -> Result<(), LanguageServerDomainError> {
        self.transition_to(LanguageServerLifecycleState::Initialized)?;
        self.capabilities = capabilities;
        self.touch(clock);
        Ok(())
    }

    /// Records server shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerDomainError::InvalidLifecycleTransition`] when
    /// the server has already terminated.
    pub fn mark_terminated(&mut self, clock: &impl Clock) -> Result<(), LanguageServerDomainError> {
        self.transition_to(LanguageServerLifecycleState::Terminated)?;
        self.touch(clock);
        Ok(())
    }

    /// Returns whether this server should be offered for `path`.
    #[must_use]
    pub fn is_applicable_to(&self, path: &WorkspacePath) -> bool {
        self.lifecycle_state.accepts_requests() && self.selector.matches(path)
    }

    fn transition_to(
        &mut self,
        target: LanguageServerLifecycleState,
    ) -> Result<(), LanguageServerDomainError> {
        if !self.lifecycle_state.can_transition_to(target) {
            return Err(LanguageServerDomainError::InvalidLifecycleTransition {
                server_id: self.id,
                from: self.lifecycle_state.as_str().to_owned(),
                to: target.as_str().to_owned(),
            });
        }
        self.lifecycle_state = target;
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
