//! In-memory workspace file store for tests and scratch workspaces.

use crate::workspace::{
    domain::WorkspacePath,
    ports::{FileStoreError, FileStoreResult, WorkspaceFileStore},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory file store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStore {
    files: Arc<RwLock<HashMap<WorkspacePath, Vec<u8>>>>,
}

fn lock_error(err: impl std::fmt::Display) -> FileStoreError {
    FileStoreError::storage(std::io::Error::other(err.to_string()))
}

impl InMemoryFileStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces a file.
    ///
    /// # Errors
    ///
    /// Returns storage errors when lock acquisition fails.
    pub fn insert(&self, path: WorkspacePath, contents: impl Into<Vec<u8>>) -> FileStoreResult<()> {
        let mut files = self.files.write().map_err(lock_error)?;
        files.insert(path, contents.into());
        Ok(())
    }
}

impl WorkspaceFileStore for InMemoryFileStore {
    fn exists(&self, path: &WorkspacePath) -> FileStoreResult<bool> {
        let files = self.files.read().map_err(lock_error)?;
        Ok(files.contains_key(path))
    }

    fn read(&self, path: &WorkspacePath) -> FileStoreResult<Vec<u8>> {
        let files = self.files.read().map_err(lock_error)?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| FileStoreError::NotFound(path.clone()))
    }

    fn write(&self, path: &WorkspacePath, contents: &[u8]) -> FileStoreResult<()> {
        let mut files = self.files.write().map_err(lock_error)?;
        let slot = files
            .get_mut(path)
            .ok_or_else(|| FileStoreError::NotFound(path.clone()))?;
        contents.clone_into(slot);
        Ok(())
    }
}
