//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use gropius::language_server::{
    adapters::{InMemoryLanguageServerHost, memory::InMemoryLanguageServerRepository},
    domain::{LanguageServerHandle, ServerCapabilities},
    services::{
        LanguageServerRegistryService, LanguageServerRegistryServiceError,
        RegisterLanguageServerRequest,
    },
};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Value, json};

/// Registry service type used by the integration tests.
pub type TestRegistry =
    LanguageServerRegistryService<InMemoryLanguageServerRepository, DefaultClock>;

/// Provides a fresh registry for each test.
#[fixture]
pub fn registry() -> Arc<TestRegistry> {
    Arc::new(LanguageServerRegistryService::new(
        Arc::new(InMemoryLanguageServerRepository::new()),
        Arc::new(DefaultClock),
    ))
}

/// Provides a fresh scripted host for each test.
#[fixture]
pub fn host() -> Arc<InMemoryLanguageServerHost> {
    Arc::new(InMemoryLanguageServerHost::new())
}

/// Registers and initializes a Rust language server.
///
/// # Errors
///
/// Returns registry errors when registration or initialization fails.
pub async fn start_rust_server(
    registry: &TestRegistry,
    name: &str,
    capabilities: &[&str],
) -> Result<LanguageServerHandle, LanguageServerRegistryServiceError> {
    let registration = registry
        .register(RegisterLanguageServerRequest::new(name, "rust", ["rs"]))
        .await?;
    let advertised = capabilities
        .iter()
        .copied()
        .fold(ServerCapabilities::new(), ServerCapabilities::with_flag);
    let initialized = registry
        .mark_initialized(registration.id(), advertised)
        .await?;
    Ok(LanguageServerHandle::snapshot(&initialized))
}

/// Builds a `workspace/symbol` reply with one symbol per name, all located
/// in `uri`.
#[must_use]
pub fn symbol_reply(uri: &str, names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "kind": 12,
                    "location": {
                        "uri": uri,
                        "range": {
                            "start": { "line": 0, "character": 0 },
                            "end": { "line": 0, "character": 1 }
                        }
                    }
                })
            })
            .collect(),
    )
}

/// Builds a `textDocument/references` reply with one location per line.
#[must_use]
pub fn location_reply(uri: &str, lines: &[u32]) -> Value {
    Value::Array(
        lines
            .iter()
            .map(|line| {
                json!({
                    "uri": uri,
                    "range": {
                        "start": { "line": line, "character": 0 },
                        "end": { "line": line, "character": 3 }
                    }
                })
            })
            .collect(),
    )
}
