//! Domain model for language server registration and discovery.
//!
//! The language server domain models server identity, the document
//! selector deciding which resources a server applies to, lifecycle state,
//! and advertised capabilities. All infrastructure concerns are kept outside
//! the domain boundary.

mod capabilities;
mod error;
mod handle;
mod ids;
mod registration;
mod selector;

pub use capabilities::ServerCapabilities;
pub use error::{LanguageServerDomainError, ParseLifecycleStateError};
pub use handle::LanguageServerHandle;
pub use ids::{LanguageServerId, LanguageServerName};
pub use registration::{
    LanguageServerLifecycleState, LanguageServerRegistration, PersistedLanguageServerData,
};
pub use selector::DocumentSelector;
