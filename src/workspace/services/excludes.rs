//! Media-type based exclusion of workspace files.

use crate::workspace::{
    domain::{MediaType, WorkspacePath},
    ports::{ContentTypeDetector, WorkspaceFileStore},
};
use std::collections::HashSet;
use std::sync::Arc;

/// Top-level types whose files are always excluded.
const EXCLUDED_TOP_LEVEL_TYPES: [&str; 3] = ["video", "audio", "image"];

/// Decides whether a workspace file is binary content that text-oriented
/// consumers (search indexing, symbol queries) should skip.
///
/// Files are excluded when their detected media type is `application/zip`,
/// `application/octet-stream`, or any `video/*`, `audio/*` or `image/*`
/// type. Files that cannot be read, or whose type cannot be detected, are
/// kept.
pub struct MediaTypeExcludeMatcher<D, S>
where
    D: ContentTypeDetector,
    S: WorkspaceFileStore,
{
    detector: Arc<D>,
    store: Arc<S>,
    excluded_media_types: HashSet<MediaType>,
    excluded_top_level_types: HashSet<String>,
}

impl<D, S> MediaTypeExcludeMatcher<D, S>
where
    D: ContentTypeDetector,
    S: WorkspaceFileStore,
{
    /// Creates a matcher with the default exclusion sets.
    #[must_use]
    pub fn new(detector: Arc<D>, store: Arc<S>) -> Self {
        Self {
            detector,
            store,
            excluded_media_types: HashSet::from([
                MediaType::application_zip(),
                MediaType::octet_stream(),
            ]),
            excluded_top_level_types: EXCLUDED_TOP_LEVEL_TYPES
                .iter()
                .map(|top_level| (*top_level).to_owned())
                .collect(),
        }
    }

    /// Returns whether the file at `path` should be excluded.
    #[must_use]
    pub fn matches(&self, path: &WorkspacePath) -> bool {
        let contents = match self.store.read(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!(path = %path, error = %err, "unreadable file kept");
                return false;
            }
        };
        let Some(media_type) = self.detector.detect(&contents) else {
            tracing::debug!(path = %path, "undetectable media type, file kept");
            return false;
        };
        self.is_excluded(&media_type)
    }

    /// Returns whether `media_type` is excluded.
    #[must_use]
    pub fn is_excluded(&self, media_type: &MediaType) -> bool {
        self.excluded_media_types.contains(media_type)
            || self
                .excluded_top_level_types
                .contains(media_type.top_level())
    }
}
