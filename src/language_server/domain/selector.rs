//! Document selector deciding which resources a server applies to.

use super::LanguageServerDomainError;
use crate::workspace::domain::WorkspacePath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Extension entry that matches every resource.
const WILDCARD_EXTENSION: &str = "*";

/// Language identifier plus the file extensions a server handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSelector {
    language_id: String,
    extensions: BTreeSet<String>,
}

impl DocumentSelector {
    /// Creates a validated selector.
    ///
    /// Extensions are trimmed, lowercased and stripped of a leading dot.
    /// The wildcard `*` matches every resource.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageServerDomainError::EmptyLanguageId`] for a blank
    /// language id, [`LanguageServerDomainError::EmptySelector`] when no
    /// extension is given, and
    /// [`LanguageServerDomainError::InvalidExtension`] for blank extensions
    /// or extensions containing `/`.
    pub fn new<I, S>(
        language_id: impl Into<String>,
        extensions: I,
    ) -> Result<Self, LanguageServerDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalized_language = language_id.into().trim().to_owned();
        if normalized_language.is_empty() {
            return Err(LanguageServerDomainError::EmptyLanguageId);
        }

        let mut normalized_extensions = BTreeSet::new();
        for extension in extensions {
            let raw = extension.into();
            let cleaned = raw.trim().trim_start_matches('.').to_ascii_lowercase();
            if cleaned.is_empty() || cleaned.contains('/') {
                return Err(LanguageServerDomainError::InvalidExtension(raw));
            }
            normalized_extensions.insert(cleaned);
        }

        if normalized_extensions.is_empty() {
            return Err(LanguageServerDomainError::EmptySelector(normalized_language));
        }

        Ok(Self {
            language_id: normalized_language,
            extensions: normalized_extensions,
        })
    }

    /// Returns the language identifier.
    #[must_use]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Returns the normalised extensions.
    #[must_use]
    pub const fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Returns whether this selector applies to the given resource.
    #[must_use]
    pub fn matches(&self, path: &WorkspacePath) -> bool {
        if self.extensions.contains(WILDCARD_EXTENSION) {
            return true;
        }
        path.extension()
            .is_some_and(|extension| self.extensions.contains(&extension.to_ascii_lowercase()))
    }
}
