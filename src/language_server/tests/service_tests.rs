//! Unit tests for language server registry service orchestration.

use std::sync::Arc;

use crate::dispatch::ports::BackendDiscovery;
use crate::language_server::{
    adapters::memory::InMemoryLanguageServerRepository,
    domain::{LanguageServerId, LanguageServerLifecycleState, ServerCapabilities},
    ports::LanguageServerRepositoryError,
    services::{
        LanguageServerRegistryService, LanguageServerRegistryServiceError,
        RegisterLanguageServerRequest,
    },
};
use crate::workspace::domain::WorkspacePath;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = LanguageServerRegistryService<InMemoryLanguageServerRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    LanguageServerRegistryService::new(
        Arc::new(InMemoryLanguageServerRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn rust_request() -> RegisterLanguageServerRequest {
    RegisterLanguageServerRequest::new("rust_analyzer", "rust", ["rs"])
}

fn python_request() -> RegisterLanguageServerRequest {
    RegisterLanguageServerRequest::new("pyright", "python", ["py", "pyi"])
}

fn target(raw: &str) -> WorkspacePath {
    WorkspacePath::new(raw).expect("valid path")
}

async fn register_initialized(
    service: &TestService,
    request: RegisterLanguageServerRequest,
) -> Result<LanguageServerId, LanguageServerRegistryServiceError> {
    let created = service.register(request).await?;
    service
        .mark_initialized(
            created.id(),
            ServerCapabilities::new().with_flag("workspaceSymbolProvider"),
        )
        .await?;
    Ok(created.id())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_and_retrieve_by_name(service: TestService) {
    let created = service
        .register(rust_request())
        .await
        .expect("registration should succeed");

    let found = service
        .find_by_name("rust_analyzer")
        .await
        .expect("lookup should succeed");

    assert_eq!(found, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_names_are_rejected(service: TestService) {
    service
        .register(rust_request())
        .await
        .expect("first registration should succeed");

    let result = service.register(rust_request()).await;

    assert!(matches!(
        result,
        Err(LanguageServerRegistryServiceError::Repository(
            LanguageServerRepositoryError::DuplicateServerName(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_initialized_stores_capabilities(service: TestService) {
    let id = register_initialized(&service, rust_request())
        .await
        .expect("initialization should succeed");

    let stored = service
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("server should exist");

    assert_eq!(
        stored.lifecycle_state(),
        LanguageServerLifecycleState::Initialized
    );
    assert!(stored.capabilities().is_enabled("workspaceSymbolProvider"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_server_is_not_found(service: TestService) {
    let missing = LanguageServerId::new();

    let result = service.terminate(missing).await;

    assert!(matches!(
        result,
        Err(LanguageServerRegistryServiceError::NotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolve_returns_initialized_matching_servers(service: TestService) {
    register_initialized(&service, rust_request())
        .await
        .expect("rust server should initialize");
    register_initialized(&service, python_request())
        .await
        .expect("python server should initialize");
    service
        .register(RegisterLanguageServerRequest::new("rls", "rust", ["rs"]))
        .await
        .expect("starting server should register");

    let resolved = service
        .resolve(&target("/app/src/main.rs"))
        .await
        .expect("discovery should succeed");

    let names: Vec<&str> = resolved
        .iter()
        .map(|handle| handle.name().as_str())
        .collect();
    assert_eq!(names, vec!["rust_analyzer"]);
    assert!(
        resolved
            .first()
            .is_some_and(|handle| handle.capabilities().is_enabled("workspaceSymbolProvider"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn terminated_servers_are_not_resolved(service: TestService) {
    let id = register_initialized(&service, python_request())
        .await
        .expect("python server should initialize");
    service
        .terminate(id)
        .await
        .expect("termination should succeed");

    let resolved = service
        .resolve(&target("/tools/build.py"))
        .await
        .expect("discovery should succeed");

    assert!(resolved.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn handles_are_snapshots(service: TestService) {
    let id = register_initialized(&service, rust_request())
        .await
        .expect("rust server should initialize");
    let before = service
        .resolve(&target("/lib.rs"))
        .await
        .expect("discovery should succeed");

    service
        .mark_initialized(id, ServerCapabilities::new())
        .await
        .expect("capabilities refresh should succeed");

    assert!(
        before
            .first()
            .is_some_and(|handle| handle.capabilities().is_enabled("workspaceSymbolProvider"))
    );
    let listed = service.list_all().await.expect("list should succeed");
    assert_eq!(listed.len(), 1);
}
