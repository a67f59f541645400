//! Port contracts for backend discovery and transport.

mod discovery;
mod transport;

pub use discovery::{BackendDiscovery, DiscoveryError};
pub use transport::{LanguageServerTransport, TransportError, TransportResult};
