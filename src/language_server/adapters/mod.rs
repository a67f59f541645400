//! Adapter implementations for language server registry and transport
//! ports.

pub mod memory;

mod host;

pub use host::{InMemoryLanguageServerHost, RecordedRequest, ScriptedResponse};
