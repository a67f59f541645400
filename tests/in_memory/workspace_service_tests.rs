//! In-memory integration tests for the workspace method table.

use std::sync::Arc;

use super::helpers::{TestRegistry, host, registry, start_rust_server};
use gropius::config::GropiusConfig;
use gropius::language_server::adapters::{InMemoryLanguageServerHost, ScriptedResponse};
use gropius::service::WorkspaceService;
use gropius::workspace::adapters::InMemoryFileStore;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hover_prefers_first_non_empty_answer(
    registry: Arc<TestRegistry>,
    host: Arc<InMemoryLanguageServerHost>,
) {
    let empty = start_rust_server(&registry, "empty", &["hoverProvider"])
        .await
        .expect("server should start");
    let docs = start_rust_server(&registry, "docs", &["hoverProvider"])
        .await
        .expect("server should start");
    host.script(
        empty.name().clone(),
        "textDocument/hover",
        ScriptedResponse::reply(json!({ "contents": [] })),
    )
    .expect("script empty server");
    host.script(
        docs.name().clone(),
        "textDocument/hover",
        ScriptedResponse::reply(json!({
            "contents": { "kind": "markdown", "value": "Entry point" },
            "range": {
                "start": { "line": 0, "character": 3 },
                "end": { "line": 0, "character": 7 }
            }
        })),
    )
    .expect("script docs server");
    let service = WorkspaceService::from_config(
        &GropiusConfig::default(),
        Arc::clone(&registry),
        Arc::clone(&host),
        Arc::new(InMemoryFileStore::new()),
    )
    .expect("default configuration is valid");

    let hover = service
        .handle(
            "textDocument/hover",
            json!({ "fileUri": "/app/src/main.rs", "position": { "line": 0, "character": 4 } }),
        )
        .await
        .expect("hover should succeed");

    let expected = json!("Entry point");
    assert_eq!(hover.pointer("/contents/value"), Some(&expected));
    assert_eq!(hover.pointer("/range/end/character"), Some(&json!(7)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_root_is_used_for_outbound_uris(
    registry: Arc<TestRegistry>,
    host: Arc<InMemoryLanguageServerHost>,
) {
    let server = start_rust_server(&registry, "rust_analyzer", &["hoverProvider"])
        .await
        .expect("server should start");
    host.script(
        server.name().clone(),
        "textDocument/hover",
        ScriptedResponse::reply(serde_json::Value::Null),
    )
    .expect("script server");
    let raw = r#"{ "workspace": { "root_uri": "file:///srv/ws" } }"#;
    let config = GropiusConfig::from_json_str(raw).expect("configuration parses");
    let service = WorkspaceService::from_config(
        &config,
        Arc::clone(&registry),
        Arc::clone(&host),
        Arc::new(InMemoryFileStore::new()),
    )
    .expect("configuration is valid");

    service
        .handle(
            "textDocument/hover",
            json!({ "fileUri": "/app/src/main.rs", "position": { "line": 0, "character": 0 } }),
        )
        .await
        .expect("hover should succeed");

    let recorded = host.recorded_requests().expect("requests readable");
    assert_eq!(
        recorded
            .first()
            .and_then(|request| request.params.pointer("/textDocument/uri")),
        Some(&json!("file:///srv/ws/app/src/main.rs"))
    );
}
