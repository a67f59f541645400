//! Application services for language server registration and discovery.

mod registry;

pub use registry::{
    LanguageServerRegistryService, LanguageServerRegistryServiceError,
    LanguageServerRegistryServiceResult, RegisterLanguageServerRequest,
};
