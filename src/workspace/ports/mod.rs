//! Port contracts for workspace file access and content inspection.

mod content_type;
mod file_store;

pub use content_type::ContentTypeDetector;
pub use file_store::{FileStoreError, FileStoreResult, WorkspaceFileStore};
