//! Storage port for workspace file contents.

use crate::workspace::domain::WorkspacePath;
use std::sync::Arc;
use thiserror::Error;

/// Result type for workspace file store operations.
pub type FileStoreResult<T> = Result<T, FileStoreError>;

/// Byte-level access to workspace files.
pub trait WorkspaceFileStore: Send + Sync {
    /// Returns whether a file exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::Storage`] when the check itself fails.
    fn exists(&self, path: &WorkspacePath) -> FileStoreResult<bool>;

    /// Reads the full contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::NotFound`] when no file exists at `path`.
    fn read(&self, path: &WorkspacePath) -> FileStoreResult<Vec<u8>>;

    /// Replaces the contents of the existing file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::NotFound`] when no file exists at `path`.
    fn write(&self, path: &WorkspacePath, contents: &[u8]) -> FileStoreResult<()>;
}

/// Errors returned by workspace file store implementations.
#[derive(Debug, Clone, Error)]
pub enum FileStoreError {
    /// No file exists at the path.
    #[error("file not found: {0}")]
    NotFound(WorkspacePath),

    /// Storage-layer failure.
    #[error("file storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl FileStoreError {
    /// Wraps a storage-layer failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
