//! Port contracts for language server registration and discovery.
//!
//! Ports define infrastructure-agnostic interfaces used by the registry
//! service.

mod repository;

pub use repository::{
    LanguageServerRepository, LanguageServerRepositoryError, LanguageServerRepositoryResult,
};
