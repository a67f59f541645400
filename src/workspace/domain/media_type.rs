//! Media type value object.

use super::WorkspaceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase `type/subtype` media type without parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaType {
    top_level: String,
    subtype: String,
}

impl MediaType {
    /// Creates a media type from its two halves.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::InvalidMediaType`] when either half is
    /// blank or contains `/`.
    pub fn new(
        top_level: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Result<Self, WorkspaceDomainError> {
        let normalized_top = top_level.into().trim().to_ascii_lowercase();
        let normalized_sub = subtype.into().trim().to_ascii_lowercase();
        let invalid = |part: &str| part.is_empty() || part.contains('/');
        if invalid(&normalized_top) || invalid(&normalized_sub) {
            return Err(WorkspaceDomainError::InvalidMediaType(format!(
                "{normalized_top}/{normalized_sub}"
            )));
        }
        Ok(Self {
            top_level: normalized_top,
            subtype: normalized_sub,
        })
    }

    /// Parses `type/subtype`, ignoring any `;`-separated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::InvalidMediaType`] for malformed input.
    pub fn parse(value: &str) -> Result<Self, WorkspaceDomainError> {
        let essence = value.split(';').next().unwrap_or_default();
        let Some((top_level, subtype)) = essence.split_once('/') else {
            return Err(WorkspaceDomainError::InvalidMediaType(value.to_owned()));
        };
        Self::new(top_level, subtype)
    }

    /// `application/zip`.
    #[must_use]
    pub fn application_zip() -> Self {
        Self {
            top_level: "application".to_owned(),
            subtype: "zip".to_owned(),
        }
    }

    /// `application/octet-stream`.
    #[must_use]
    pub fn octet_stream() -> Self {
        Self {
            top_level: "application".to_owned(),
            subtype: "octet-stream".to_owned(),
        }
    }

    /// Returns the top-level type (e.g. `image`).
    #[must_use]
    pub fn top_level(&self) -> &str {
        &self.top_level
    }

    /// Returns the subtype (e.g. `png`).
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }
}

impl TryFrom<String> for MediaType {
    type Error = WorkspaceDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.to_string()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.top_level, self.subtype)
    }
}
