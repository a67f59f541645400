//! Domain model for workspace resources, text edits and identifiers.

mod error;
mod media_type;
mod namespace;
mod path;
mod symbols;
mod text;
mod transform;

pub use error::{TransformError, TranslationError, WorkspaceDomainError};
pub use media_type::MediaType;
pub use namespace::{DEFAULT_ROOT_URI, NamespaceTranslator};
pub use path::{BackendUri, WorkspacePath};
pub use symbols::{Hover, Location, SymbolInformation};
pub use text::{Position, Range, TextEdit};
pub use transform::TextTransformer;
