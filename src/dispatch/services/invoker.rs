//! Asynchronous invocation of a single language server.
//!
//! [`BackendInvoker::invoke`] spawns the transport call on the tokio runtime
//! and returns an [`InvocationHandle`] immediately. The handle is consumed by
//! whichever of `await_until`, `await_with_timeout` or `cancel` observes it,
//! so every invocation yields exactly one [`InvocationOutcome`]. Dropping a
//! handle aborts the call.

use crate::dispatch::ports::LanguageServerTransport;
use crate::language_server::domain::LanguageServerHandle;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;

/// Final outcome of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    /// The server answered with a result payload.
    Resolved(Value),
    /// The server, the channel or the task failed.
    Failed(String),
    /// The invocation was cancelled before it completed.
    Cancelled,
    /// The deadline passed before the server answered.
    TimedOut,
}

/// Starts transport calls as independent tasks.
#[derive(Debug)]
pub struct BackendInvoker<T> {
    transport: Arc<T>,
}

impl<T> Clone for BackendInvoker<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> BackendInvoker<T>
where
    T: LanguageServerTransport + 'static,
{
    /// Creates an invoker over `transport`.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Sends `method` to `server` on a spawned task.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn invoke(
        &self,
        server: LanguageServerHandle,
        method: &str,
        params: Value,
    ) -> InvocationHandle {
        let transport = Arc::clone(&self.transport);
        let method_name = method.to_owned();
        let task = tokio::spawn(async move {
            transport
                .request(&server, &method_name, params)
                .await
                .map_err(|err| err.to_string())
        });
        InvocationHandle {
            task,
            started_at: Instant::now(),
        }
    }
}

/// A pending invocation.
#[derive(Debug)]
pub struct InvocationHandle {
    task: JoinHandle<Result<Value, String>>,
    started_at: Instant,
}

impl InvocationHandle {
    /// Returns when the invocation was started.
    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Awaits the outcome until `deadline`.
    ///
    /// Once the deadline passes the task is aborted and
    /// [`InvocationOutcome::TimedOut`] is reported; a reply arriving later is
    /// discarded with the task.
    pub async fn await_until(mut self, deadline: Instant) -> InvocationOutcome {
        match tokio::time::timeout_at(deadline, &mut self.task).await {
            Ok(joined) => outcome_of(joined),
            Err(_elapsed) => {
                self.task.abort();
                InvocationOutcome::TimedOut
            }
        }
    }

    /// Awaits the outcome for at most `timeout`.
    pub async fn await_with_timeout(self, timeout: Duration) -> InvocationOutcome {
        let deadline = Instant::now() + timeout;
        self.await_until(deadline).await
    }

    /// Aborts the invocation.
    ///
    /// Best effort: a reply already produced is discarded.
    #[must_use]
    pub fn cancel(self) -> InvocationOutcome {
        self.task.abort();
        InvocationOutcome::Cancelled
    }
}

impl Drop for InvocationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn outcome_of(joined: Result<Result<Value, String>, JoinError>) -> InvocationOutcome {
    match joined {
        Ok(Ok(value)) => InvocationOutcome::Resolved(value),
        Ok(Err(reason)) => InvocationOutcome::Failed(reason),
        Err(err) if err.is_cancelled() => InvocationOutcome::Cancelled,
        Err(err) => InvocationOutcome::Failed(format!("invocation task failed: {err}")),
    }
}
