//! In-memory language server host for deterministic dispatch flows.

use crate::dispatch::ports::{LanguageServerTransport, TransportError, TransportResult};
use crate::language_server::domain::{LanguageServerHandle, LanguageServerId, LanguageServerName};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// JSON-RPC `MethodNotFound` error code.
const METHOD_NOT_FOUND: i64 = -32601;

/// Canned behaviour for one `(server, method)` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedResponse {
    /// Reply with `result` after `delay`.
    Reply {
        /// Result payload.
        result: Value,
        /// Simulated latency.
        delay: Duration,
    },
    /// Fail with a JSON-RPC error after `delay`.
    Fail {
        /// JSON-RPC error code.
        code: i64,
        /// Error message.
        message: String,
        /// Simulated latency.
        delay: Duration,
    },
    /// Never reply.
    Hang,
}

impl ScriptedResponse {
    /// Replies immediately.
    #[must_use]
    pub const fn reply(result: Value) -> Self {
        Self::reply_after(result, Duration::ZERO)
    }

    /// Replies after `delay`.
    #[must_use]
    pub const fn reply_after(result: Value, delay: Duration) -> Self {
        Self::Reply { result, delay }
    }

    /// Fails immediately with a JSON-RPC error.
    #[must_use]
    pub fn fail(code: i64, message: impl Into<String>) -> Self {
        Self::Fail {
            code,
            message: message.into(),
            delay: Duration::ZERO,
        }
    }
}

/// One request observed by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Target server.
    pub server: LanguageServerName,
    /// JSON-RPC method name.
    pub method: String,
    /// Request parameters as sent.
    pub params: Value,
}

/// In-memory language server host.
///
/// Models server replies without spawning processes, which makes it suitable
/// for unit and integration tests of the dispatch layer. Servers without a
/// script for a method answer with `MethodNotFound`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLanguageServerHost {
    state: Arc<RwLock<InMemoryHostState>>,
}

#[derive(Debug, Default)]
struct InMemoryHostState {
    scripts: HashMap<(LanguageServerName, String), ScriptedResponse>,
    terminated: HashSet<LanguageServerId>,
    requests: Vec<RecordedRequest>,
}

fn lock_error(err: impl std::fmt::Display) -> TransportError {
    TransportError::io(std::io::Error::other(err.to_string()))
}

impl InMemoryLanguageServerHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts how `server` answers `method`. Existing scripts are replaced.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn script(
        &self,
        server: LanguageServerName,
        method: impl Into<String>,
        response: ScriptedResponse,
    ) -> TransportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.scripts.insert((server, method.into()), response);
        Ok(())
    }

    /// Simulates the server process exiting.
    ///
    /// Requests in flight observe the termination once their scripted delay
    /// has elapsed.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn terminate(&self, server_id: LanguageServerId) -> TransportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.terminated.insert(server_id);
        Ok(())
    }

    /// Returns every request received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn recorded_requests(&self) -> TransportResult<Vec<RecordedRequest>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.requests.clone())
    }

    fn ensure_alive(&self, server_id: LanguageServerId) -> TransportResult<()> {
        let state = self.state.read().map_err(lock_error)?;
        if state.terminated.contains(&server_id) {
            return Err(TransportError::ServerTerminated(server_id));
        }
        Ok(())
    }
}

#[async_trait]
impl LanguageServerTransport for InMemoryLanguageServerHost {
    async fn request(
        &self,
        server: &LanguageServerHandle,
        method: &str,
        params: Value,
    ) -> TransportResult<Value> {
        let script = {
            let mut state = self.state.write().map_err(lock_error)?;
            if state.terminated.contains(&server.id()) {
                return Err(TransportError::ServerTerminated(server.id()));
            }
            state.requests.push(RecordedRequest {
                server: server.name().clone(),
                method: method.to_owned(),
                params,
            });
            state
                .scripts
                .get(&(server.name().clone(), method.to_owned()))
                .cloned()
        };

        match script {
            Some(ScriptedResponse::Reply { result, delay }) => {
                tokio::time::sleep(delay).await;
                self.ensure_alive(server.id())?;
                Ok(result)
            }
            Some(ScriptedResponse::Fail {
                code,
                message,
                delay,
            }) => {
                tokio::time::sleep(delay).await;
                self.ensure_alive(server.id())?;
                Err(TransportError::Rpc { code, message })
            }
            Some(ScriptedResponse::Hang) => std::future::pending().await,
            None => Err(TransportError::Rpc {
                code: METHOD_NOT_FOUND,
                message: format!("method not found: {method}"),
            }),
        }
    }
}
