//! Translation between workspace paths and backend URIs.

use super::{BackendUri, TranslationError, WorkspacePath};

/// Root URI under which the workspace is exposed to language servers.
pub const DEFAULT_ROOT_URI: &str = "file:///projects";

/// Bidirectional mapping between workspace paths and backend URIs.
///
/// A workspace path `/app/a.rs` maps to `<root>/app/a.rs`. The mapping is
/// total for valid workspace paths and
/// `to_workspace_path(to_backend_uri(p)) == p` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTranslator {
    root: String,
}

impl NamespaceTranslator {
    /// Creates a translator for `root_uri`.
    ///
    /// A single trailing `/` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidRoot`] when the root is blank.
    pub fn new(root_uri: impl Into<String>) -> Result<Self, TranslationError> {
        let raw = root_uri.into();
        let trimmed = raw.trim();
        let root = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if root.is_empty() {
            return Err(TranslationError::InvalidRoot(raw));
        }
        Ok(Self {
            root: root.to_owned(),
        })
    }

    /// Returns the root URI without a trailing slash.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Maps a workspace path to the URI a backend understands.
    #[must_use]
    pub fn to_backend_uri(&self, path: &WorkspacePath) -> BackendUri {
        BackendUri::new(format!("{}{}", self.root, path.as_str()))
    }

    /// Maps a backend URI back into the workspace namespace.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::OutsideRoot`] when the URI does not live
    /// under the root, or [`TranslationError::MalformedPath`] when the
    /// remainder is not a valid workspace path.
    pub fn to_workspace_path(&self, uri: &BackendUri) -> Result<WorkspacePath, TranslationError> {
        let remainder = uri
            .as_str()
            .strip_prefix(self.root.as_str())
            .filter(|rest| rest.starts_with('/'))
            .ok_or_else(|| TranslationError::OutsideRoot(uri.clone()))?;
        WorkspacePath::new(remainder).map_err(|source| TranslationError::MalformedPath {
            uri: uri.clone(),
            source,
        })
    }
}

impl Default for NamespaceTranslator {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT_URI.to_owned(),
        }
    }
}
