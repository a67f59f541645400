//! In-memory adapters for language server registrations.

mod repository;

pub use repository::InMemoryLanguageServerRepository;
