//! Identifier and validated-name types for language servers.

use super::LanguageServerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length for a language server name.
const MAX_SERVER_NAME_LENGTH: usize = 100;

/// Unique identifier for a language server registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageServerId(Uuid);

impl LanguageServerId {
    /// Creates a new random language server identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a language server identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for LanguageServerId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for LanguageServerId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LanguageServerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated, lowercase alphanumeric-plus-underscores server name.
///
/// Names are unique human-readable identifiers for registered servers
/// (e.g. `rust_analyzer`, `pyright`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageServerName(String);

impl LanguageServerName {
    /// Creates a validated language server name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerDomainError::EmptyServerName`] when the value
    /// is empty after trimming,
    /// [`LanguageServerDomainError::InvalidServerName`] when it contains
    /// characters outside `[a-z0-9_]`, or
    /// [`LanguageServerDomainError::ServerNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, LanguageServerDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(LanguageServerDomainError::EmptyServerName);
        }

        if normalized.len() > MAX_SERVER_NAME_LENGTH {
            return Err(LanguageServerDomainError::ServerNameTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !is_valid {
            return Err(LanguageServerDomainError::InvalidServerName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the server name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageServerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LanguageServerName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
