//! Service applying text edits to workspace files.
//!
//! Provides [`FileEditService`] which validates an edit batch, takes an
//! exclusive lease on the target file, streams the file through the
//! transform-and-invert editor and persists the result. The inverse edits
//! are returned so callers can offer undo.

use crate::workspace::{
    domain::{TextEdit, TextTransformer, TransformError, WorkspacePath},
    ports::{FileStoreError, WorkspaceFileStore},
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Service-level errors for file edit operations.
#[derive(Debug, Error)]
pub enum FileEditError {
    /// The edit batch is invalid or could not be applied.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// The target file does not exist.
    #[error("file not found for edit: {0}")]
    ResourceNotFound(WorkspacePath),
    /// Another edit of the same file is in progress.
    #[error("file is being edited concurrently: {0}")]
    ResourceBusy(WorkspacePath),
    /// The file store failed.
    #[error(transparent)]
    Store(FileStoreError),
}

impl From<FileStoreError> for FileEditError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::NotFound(path) => Self::ResourceNotFound(path),
            FileStoreError::Storage(_) => Self::Store(err),
        }
    }
}

/// Exclusive lease on one workspace file. Released on drop.
#[derive(Debug)]
pub struct ResourceLease {
    leased: Arc<Mutex<HashSet<WorkspacePath>>>,
    path: WorkspacePath,
}

impl Drop for ResourceLease {
    fn drop(&mut self) {
        if let Ok(mut leased) = self.leased.lock() {
            leased.remove(&self.path);
        }
    }
}

/// Applies edit batches to workspace files.
#[derive(Debug)]
pub struct FileEditService<S>
where
    S: WorkspaceFileStore,
{
    store: Arc<S>,
    leased: Arc<Mutex<HashSet<WorkspacePath>>>,
}

impl<S> Clone for FileEditService<S>
where
    S: WorkspaceFileStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            leased: Arc::clone(&self.leased),
        }
    }
}

impl<S> FileEditService<S>
where
    S: WorkspaceFileStore,
{
    /// Creates an edit service over `store`.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            leased: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Takes the exclusive lease on `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FileEditError::ResourceBusy`] when the file is already
    /// leased.
    pub fn try_lease(&self, path: &WorkspacePath) -> Result<ResourceLease, FileEditError> {
        let mut leased = self.leased.lock().map_err(|err| {
            let poisoned = std::io::Error::other(err.to_string());
            FileEditError::Store(FileStoreError::storage(poisoned))
        })?;
        if !leased.insert(path.clone()) {
            return Err(FileEditError::ResourceBusy(path.clone()));
        }
        Ok(ResourceLease {
            leased: Arc::clone(&self.leased),
            path: path.clone(),
        })
    }

    /// Applies `edits` to the file at `path` and returns the inverse edits.
    ///
    /// The edit batch is validated before the file is touched, and the file
    /// is only written when every edit applied cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`FileEditError::Transform`] for malformed, overlapping or
    /// out-of-bounds edits, [`FileEditError::ResourceBusy`] when another edit
    /// of the file is in progress, [`FileEditError::ResourceNotFound`] when
    /// the file does not exist, and [`FileEditError::Store`] for storage
    /// failures.
    pub fn edit_file(
        &self,
        path: &WorkspacePath,
        edits: Vec<TextEdit>,
    ) -> Result<Vec<TextEdit>, FileEditError> {
        let transformer = TextTransformer::new(edits)?;
        let _lease = self.try_lease(path)?;

        let original = self.store.read(path).inspect_err(|err| {
            tracing::error!(path = %path, error = %err, "could not read file for edit");
        })?;
        let mut transformed = Vec::with_capacity(original.len());
        let inverse = transformer.transform(original.as_slice(), &mut transformed)?;
        self.store.write(path, &transformed)?;

        tracing::debug!(
            path = %path,
            applied = transformer.edits().len(),
            inverse = inverse.len(),
            "applied file edits"
        );
        Ok(inverse)
    }
}
