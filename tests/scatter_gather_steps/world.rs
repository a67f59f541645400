//! Shared world state for scatter-gather BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use gropius::config::DispatchConfig;
use gropius::dispatch::{
    domain::{AggregatedResult, DispatchError},
    ports::{BackendDiscovery, DiscoveryError},
    services::ScatterGatherCoordinator,
};
use gropius::language_server::{
    adapters::{InMemoryLanguageServerHost, memory::InMemoryLanguageServerRepository},
    domain::LanguageServerHandle,
    services::LanguageServerRegistryService,
};
use gropius::workspace::domain::{NamespaceTranslator, WorkspacePath};
use mockable::DefaultClock;
use rstest::fixture;

/// Registry service type used by the BDD world.
pub type TestRegistryService =
    LanguageServerRegistryService<InMemoryLanguageServerRepository, DefaultClock>;

/// Discovery that can be switched offline to simulate a registry outage.
pub struct SwitchableDiscovery {
    registry: Arc<TestRegistryService>,
    offline: AtomicBool,
}

impl SwitchableDiscovery {
    /// Marks the registry as unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BackendDiscovery for SwitchableDiscovery {
    async fn resolve(
        &self,
        path: &WorkspacePath,
    ) -> Result<Vec<LanguageServerHandle>, DiscoveryError> {
        if self.offline.load(Ordering::SeqCst) {
            let offline = std::io::Error::other("registry offline");
            return Err(DiscoveryError::unavailable(offline));
        }
        self.registry.resolve(path).await
    }
}

/// Scenario world for scatter-gather behaviour tests.
pub struct DispatchWorld {
    /// Registry holding the scenario's language servers.
    pub registry: Arc<TestRegistryService>,
    /// Discovery wrapper consulted by the coordinator.
    pub discovery: Arc<SwitchableDiscovery>,
    /// Scripted language server host.
    pub host: Arc<InMemoryLanguageServerHost>,
    /// Coordinator under test.
    pub coordinator: ScatterGatherCoordinator<SwitchableDiscovery, InMemoryLanguageServerHost>,
    /// Started servers by name.
    pub servers: HashMap<String, LanguageServerHandle>,
    /// Result of the last dispatch.
    pub last_result: Option<Result<AggregatedResult, DispatchError>>,
}

impl DispatchWorld {
    /// Creates a world with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        let registry = Arc::new(LanguageServerRegistryService::new(
            Arc::new(InMemoryLanguageServerRepository::new()),
            Arc::new(DefaultClock),
        ));
        let discovery = Arc::new(SwitchableDiscovery {
            registry: Arc::clone(&registry),
            offline: AtomicBool::new(false),
        });
        let host = Arc::new(InMemoryLanguageServerHost::new());
        let coordinator = ScatterGatherCoordinator::new(
            Arc::clone(&discovery),
            Arc::clone(&host),
            NamespaceTranslator::default(),
            DispatchConfig::default(),
        );
        Self {
            registry,
            discovery,
            host,
            coordinator,
            servers: HashMap::new(),
            last_result: None,
        }
    }

    /// Looks up a started server by name.
    ///
    /// # Errors
    ///
    /// Returns an error when the scenario never started the server.
    pub fn server(&self, name: &str) -> Result<&LanguageServerHandle, eyre::Report> {
        self.servers
            .get(name)
            .ok_or_else(|| eyre::eyre!("no language server named '{name}' in scenario world"))
    }

    /// Returns the last successful dispatch result.
    ///
    /// # Errors
    ///
    /// Returns an error when no dispatch ran or it failed.
    pub fn aggregated(&self) -> Result<&AggregatedResult, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Ok(result)) => Ok(result),
            Some(Err(err)) => Err(eyre::eyre!("dispatch failed unexpectedly: {err}")),
            None => Err(eyre::eyre!("no dispatch result in scenario world")),
        }
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
