//! Filesystem-backed workspace file store.

use crate::workspace::{
    domain::WorkspacePath,
    ports::{FileStoreError, FileStoreResult, WorkspaceFileStore},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use uuid::Uuid;

/// File store rooted at the directory holding all workspace projects.
///
/// Access goes through a capability handle on the root directory, so no
/// workspace path can reach outside it. Writes land in a staging file next
/// to the target and replace it by rename, so a failed write leaves the
/// previous contents in place.
#[derive(Debug)]
pub struct CapStdFileStore {
    root: Dir,
}

impl CapStdFileStore {
    /// Opens the projects root directory.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::Storage`] when the directory cannot be
    /// opened.
    pub fn open(root: &Utf8Path) -> FileStoreResult<Self> {
        let authority = ambient_authority();
        let dir = Dir::open_ambient_dir(root, authority).map_err(FileStoreError::storage)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(root: Dir) -> Self {
        Self { root }
    }

    fn replace(
        &self,
        target: &Utf8Path,
        staging: &Utf8Path,
        contents: &[u8],
    ) -> std::io::Result<()> {
        let permissions = self.root.metadata(target)?.permissions();
        self.root.write(staging, contents)?;
        self.root.set_permissions(staging, permissions)?;
        self.root.rename(staging, &self.root, target)
    }
}

fn staging_path(path: &WorkspacePath) -> Utf8PathBuf {
    let staging_name = format!(".{}.{}.tmp", path.file_name(), Uuid::new_v4().simple());
    Utf8Path::new(path.relative()).with_file_name(staging_name)
}

fn map_io_error(path: &WorkspacePath, err: std::io::Error) -> FileStoreError {
    if err.kind() == std::io::ErrorKind::NotFound {
        FileStoreError::NotFound(path.clone())
    } else {
        FileStoreError::storage(err)
    }
}

impl WorkspaceFileStore for CapStdFileStore {
    fn exists(&self, path: &WorkspacePath) -> FileStoreResult<bool> {
        Ok(self.root.is_file(path.relative()))
    }

    fn read(&self, path: &WorkspacePath) -> FileStoreResult<Vec<u8>> {
        self.root
            .read(path.relative())
            .map_err(|err| map_io_error(path, err))
    }

    fn write(&self, path: &WorkspacePath, contents: &[u8]) -> FileStoreResult<()> {
        let target = Utf8Path::new(path.relative());
        if !self.root.is_file(target) {
            return Err(FileStoreError::NotFound(path.clone()));
        }
        let staging = staging_path(path);
        self.replace(target, &staging, contents).map_err(|err| {
            if let Err(cleanup) = self.root.remove_file(&staging) {
                tracing::debug!(staging = %staging, error = %cleanup, "staging file not removed");
            }
            map_io_error(path, err)
        })
    }
}
