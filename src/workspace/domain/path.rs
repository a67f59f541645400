//! Workspace paths and backend URIs.

use super::WorkspaceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute, normalised path of a resource inside the workspace
/// (e.g. `/app/src/main.rs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkspacePath(String);

impl WorkspacePath {
    /// Creates a validated workspace path.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyPath`] for an empty value,
    /// [`WorkspaceDomainError::RelativePath`] when it does not start with
    /// `/`, and [`WorkspaceDomainError::InvalidSegment`] when any segment is
    /// empty, `.` or `..` (this also rejects a bare `/` and trailing slashes).
    pub fn new(value: impl Into<String>) -> Result<Self, WorkspaceDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(WorkspaceDomainError::EmptyPath);
        }
        let Some(relative) = raw.strip_prefix('/') else {
            return Err(WorkspaceDomainError::RelativePath(raw));
        };
        let has_invalid_segment = relative
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
        if has_invalid_segment {
            return Err(WorkspaceDomainError::InvalidSegment(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path without its leading `/`.
    #[must_use]
    pub fn relative(&self) -> &str {
        self.0.strip_prefix('/').unwrap_or(&self.0)
    }

    /// Returns the final path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Returns the file extension, if the final segment has one.
    ///
    /// Dot-files such as `.gitignore` have no extension.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        match self.file_name().rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => {
                Some(extension)
            }
            _ => None,
        }
    }
}

impl TryFrom<String> for WorkspacePath {
    type Error = WorkspaceDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkspacePath> for String {
    fn from(path: WorkspacePath) -> Self {
        path.0
    }
}

impl AsRef<str> for WorkspacePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkspacePath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Resource identifier in the namespace language servers use
/// (e.g. `file:///projects/app/src/main.rs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendUri(String);

impl BackendUri {
    /// Wraps a backend URI.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackendUri {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
