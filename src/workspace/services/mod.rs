//! Application services for workspace file editing and exclusion.

mod edit;
mod excludes;

pub use edit::{FileEditError, FileEditService, ResourceLease};
pub use excludes::MediaTypeExcludeMatcher;
