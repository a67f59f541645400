//! Scatter-gather coordinator.
//!
//! One dispatch resolves the applicable servers, records ineligible ones as
//! filtered, starts every eligible invocation at once and then awaits them
//! together against a single absolute deadline. Results are observed in
//! arrival order, translated into the workspace namespace and merged with
//! the policy of the query kind.

use super::{BackendInvoker, InvocationOutcome, QueryOperation};
use crate::config::DispatchConfig;
use crate::dispatch::domain::{AggregatedResult, DispatchError, DispatchRequest, PartialResult};
use crate::dispatch::ports::{BackendDiscovery, LanguageServerTransport};
use crate::language_server::domain::LanguageServerHandle;
use crate::workspace::domain::NamespaceTranslator;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Fans language queries out to every applicable server.
pub struct ScatterGatherCoordinator<D, T> {
    discovery: Arc<D>,
    invoker: BackendInvoker<T>,
    translator: NamespaceTranslator,
    config: DispatchConfig,
}

impl<D, T> ScatterGatherCoordinator<D, T>
where
    D: BackendDiscovery,
    T: LanguageServerTransport + 'static,
{
    /// Creates a coordinator.
    #[must_use]
    pub const fn new(
        discovery: Arc<D>,
        transport: Arc<T>,
        translator: NamespaceTranslator,
        config: DispatchConfig,
    ) -> Self {
        Self {
            discovery,
            invoker: BackendInvoker::new(transport),
            translator,
            config,
        }
    }

    /// Returns the dispatch configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns the namespace translator.
    #[must_use]
    pub const fn translator(&self) -> &NamespaceTranslator {
        &self.translator
    }

    /// Dispatches `request` with the configured deadline.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DiscoveryUnavailable`] when the registry
    /// cannot be consulted. Backend failures never fail the dispatch.
    pub async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<AggregatedResult, DispatchError> {
        self.dispatch_with_deadline(request, self.config.deadline())
            .await
    }

    /// Dispatches `request`, awaiting backends for at most `budget`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedRequest`] for a zero budget and
    /// [`DispatchError::DiscoveryUnavailable`] when the registry cannot be
    /// consulted.
    pub async fn dispatch_with_deadline(
        &self,
        request: &DispatchRequest,
        budget: Duration,
    ) -> Result<AggregatedResult, DispatchError> {
        if budget.is_zero() {
            return Err(DispatchError::MalformedRequest(
                "dispatch deadline must be positive".to_owned(),
            ));
        }
        let operation = QueryOperation::for_kind(request.kind());
        let servers = self
            .discovery
            .resolve(request.target())
            .await
            .inspect_err(|err| {
                tracing::error!(
                    target_path = %request.target(),
                    kind = %request.kind(),
                    error = %err,
                    "backend discovery failed"
                );
            })?;
        if servers.is_empty() {
            tracing::debug!(
                target_path = %request.target(),
                kind = %request.kind(),
                "no applicable language servers"
            );
            return Ok(AggregatedResult::empty(request.kind()));
        }

        let (eligible, ineligible): (Vec<_>, Vec<_>) = servers
            .into_iter()
            .partition(|server| operation.is_eligible(server.capabilities()));
        let mut partials = Vec::with_capacity(eligible.len() + ineligible.len());
        for server in &ineligible {
            tracing::debug!(
                server = %server.name(),
                capability = operation.capability(),
                "language server filtered"
            );
            partials.push(PartialResult::filtered(server));
        }

        let params = request
            .payload()
            .to_params(&self.translator.to_backend_uri(request.target()));
        let deadline = Instant::now() + budget;
        let mut pending: FuturesUnordered<_> = eligible
            .into_iter()
            .map(|server| {
                let invocation = operation.invoke(&self.invoker, &server, params.clone());
                let started_at = invocation.started_at();
                async move {
                    let outcome = invocation.await_until(deadline).await;
                    (server, started_at, outcome)
                }
            })
            .collect();
        tracing::debug!(
            kind = %request.kind(),
            invoked = pending.len(),
            filtered = partials.len(),
            budget_ms = budget.as_millis(),
            "dispatch started"
        );

        while let Some((server, started_at, outcome)) = pending.next().await {
            let elapsed = started_at.elapsed();
            partials.push(self.record(operation, &server, elapsed, outcome));
        }

        let merged = operation.merge_policy().merge(
            partials
                .iter()
                .filter(|partial| partial.is_ok())
                .map(PartialResult::payload),
        );
        Ok(AggregatedResult::new(request.kind(), merged, partials))
    }

    fn record(
        &self,
        operation: QueryOperation,
        server: &LanguageServerHandle,
        elapsed: Duration,
        outcome: InvocationOutcome,
    ) -> PartialResult {
        match outcome {
            InvocationOutcome::Resolved(value) => {
                match operation.on_result(value, &self.translator) {
                    Ok(items) => PartialResult::ok(server, elapsed, items),
                    Err(err) => {
                        tracing::warn!(
                            server = %server.name(),
                            error = %err,
                            "language server returned an unusable result"
                        );
                        PartialResult::failed(server, elapsed, err.to_string())
                    }
                }
            }
            InvocationOutcome::Failed(reason) => {
                tracing::warn!(server = %server.name(), %reason, "language server request failed");
                PartialResult::failed(server, elapsed, reason)
            }
            InvocationOutcome::Cancelled => {
                tracing::warn!(server = %server.name(), "language server request cancelled");
                PartialResult::failed(server, elapsed, "invocation cancelled")
            }
            InvocationOutcome::TimedOut => {
                tracing::warn!(
                    server = %server.name(),
                    elapsed_ms = elapsed.as_millis(),
                    "language server timed out"
                );
                PartialResult::timed_out(server, elapsed)
            }
        }
    }
}
