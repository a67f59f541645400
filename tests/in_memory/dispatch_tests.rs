//! In-memory integration tests for scatter-gather dispatch.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{TestRegistry, host, location_reply, registry, start_rust_server, symbol_reply};
use gropius::config::DispatchConfig;
use gropius::dispatch::{
    domain::{DispatchRequest, PartialStatus, QueryItem, QueryPayload},
    services::ScatterGatherCoordinator,
};
use gropius::language_server::adapters::{InMemoryLanguageServerHost, ScriptedResponse};
use gropius::workspace::domain::{NamespaceTranslator, Position};
use rstest::rstest;

fn coordinator(
    registry: &Arc<TestRegistry>,
    host: &Arc<InMemoryLanguageServerHost>,
    config: DispatchConfig,
) -> ScatterGatherCoordinator<TestRegistry, InMemoryLanguageServerHost> {
    ScatterGatherCoordinator::new(
        Arc::clone(registry),
        Arc::clone(host),
        NamespaceTranslator::default(),
        config,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn references_from_all_servers_are_concatenated(
    registry: Arc<TestRegistry>,
    host: Arc<InMemoryLanguageServerHost>,
) {
    let first = start_rust_server(&registry, "rust_analyzer", &["referencesProvider"])
        .await
        .expect("first server should start");
    let second = start_rust_server(&registry, "ctags", &["referencesProvider"])
        .await
        .expect("second server should start");
    host.script(
        first.name().clone(),
        "textDocument/references",
        ScriptedResponse::reply(location_reply("file:///projects/app/src/a.rs", &[1, 2])),
    )
    .expect("script first server");
    host.script(
        second.name().clone(),
        "textDocument/references",
        ScriptedResponse::reply_after(
            location_reply("file:///projects/app/src/b.rs", &[7]),
            Duration::from_millis(40),
        ),
    )
    .expect("script second server");
    let request = DispatchRequest::new(
        "/app/src/a.rs",
        QueryPayload::References {
            position: Position::new(1, 1),
            include_declaration: false,
        },
    )
    .expect("valid request");

    let result = coordinator(&registry, &host, DispatchConfig::interactive())
        .dispatch(&request)
        .await
        .expect("dispatch should succeed");

    let uris: Vec<&str> = result
        .merged()
        .iter()
        .filter_map(QueryItem::as_location)
        .map(|location| location.uri.as_str())
        .collect();
    assert_eq!(
        uris,
        vec!["/app/src/a.rs", "/app/src/a.rs", "/app/src/b.rs"]
    );
    assert_eq!(result.count(PartialStatus::Ok), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn terminated_registrations_are_not_dispatched_to(
    registry: Arc<TestRegistry>,
    host: Arc<InMemoryLanguageServerHost>,
) {
    let retired = start_rust_server(&registry, "retired", &["workspaceSymbolProvider"])
        .await
        .expect("server should start");
    registry
        .terminate(retired.id())
        .await
        .expect("termination should succeed");
    let request = DispatchRequest::new(
        "/app/src/main.rs",
        QueryPayload::WorkspaceSymbol {
            query: String::new(),
        },
    )
    .expect("valid request");

    let result = coordinator(&registry, &host, DispatchConfig::default())
        .dispatch(&request)
        .await
        .expect("dispatch should succeed");

    let recorded = host.recorded_requests().expect("requests readable");
    assert!(result.partials().is_empty());
    assert!(recorded.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_deadline_bounds_the_dispatch(
    registry: Arc<TestRegistry>,
    host: Arc<InMemoryLanguageServerHost>,
) {
    let stuck = start_rust_server(&registry, "stuck", &["workspaceSymbolProvider"])
        .await
        .expect("server should start");
    let quick = start_rust_server(&registry, "quick", &["workspaceSymbolProvider"])
        .await
        .expect("server should start");
    host.script(
        stuck.name().clone(),
        "workspace/symbol",
        ScriptedResponse::Hang,
    )
    .expect("script stuck server");
    host.script(
        quick.name().clone(),
        "workspace/symbol",
        ScriptedResponse::reply(symbol_reply("file:///projects/app/src/main.rs", &["main"])),
    )
    .expect("script quick server");
    let config = DispatchConfig::new(100).expect("valid deadline");
    let request = DispatchRequest::new(
        "/app/src/main.rs",
        QueryPayload::WorkspaceSymbol {
            query: "main".to_owned(),
        },
    )
    .expect("valid request");

    let started = tokio::time::Instant::now();
    let result = coordinator(&registry, &host, config)
        .dispatch(&request)
        .await
        .expect("dispatch should succeed");

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(result.count(PartialStatus::TimedOut), 1);
    assert_eq!(result.merged().len(), 1);
    let timed_out = result
        .partial_for(stuck.name())
        .expect("stuck server has a partial result");
    assert!(
        timed_out
            .elapsed()
            .is_some_and(|elapsed| elapsed >= Duration::from_millis(100))
    );
}
