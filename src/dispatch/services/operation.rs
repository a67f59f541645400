//! Per-kind query behaviour.
//!
//! [`QueryOperation`] is the closed set of query strategies the coordinator
//! fans out. Each variant knows its wire method, the capability gating it,
//! how to decode a server reply and how replies are merged.

use super::{BackendInvoker, InvocationHandle, MergePolicy};
use crate::dispatch::domain::{PayloadError, QueryItem, QueryKind};
use crate::dispatch::ports::LanguageServerTransport;
use crate::language_server::domain::{LanguageServerHandle, ServerCapabilities};
use crate::workspace::domain::{Hover, Location, NamespaceTranslator, SymbolInformation};
use serde_json::Value;

/// Strategy for one query kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperation {
    /// `workspace/symbol`.
    WorkspaceSymbol,
    /// `textDocument/references`.
    References,
    /// `textDocument/hover`.
    Hover,
}

impl QueryOperation {
    /// Selects the operation for a query kind.
    #[must_use]
    pub const fn for_kind(kind: QueryKind) -> Self {
        match kind {
            QueryKind::WorkspaceSymbol => Self::WorkspaceSymbol,
            QueryKind::References => Self::References,
            QueryKind::Hover => Self::Hover,
        }
    }

    /// Returns the query kind handled by this operation.
    #[must_use]
    pub const fn kind(self) -> QueryKind {
        match self {
            Self::WorkspaceSymbol => QueryKind::WorkspaceSymbol,
            Self::References => QueryKind::References,
            Self::Hover => QueryKind::Hover,
        }
    }

    /// Returns the JSON-RPC method sent to servers.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::WorkspaceSymbol => "workspace/symbol",
            Self::References => "textDocument/references",
            Self::Hover => "textDocument/hover",
        }
    }

    /// Returns the capability a server must advertise to be invoked.
    #[must_use]
    pub const fn capability(self) -> &'static str {
        match self {
            Self::WorkspaceSymbol => "workspaceSymbolProvider",
            Self::References => "referencesProvider",
            Self::Hover => "hoverProvider",
        }
    }

    /// Returns how `ok` payloads are combined.
    #[must_use]
    pub const fn merge_policy(self) -> MergePolicy {
        match self {
            Self::WorkspaceSymbol | Self::References => MergePolicy::Concatenate,
            Self::Hover => MergePolicy::FirstWins,
        }
    }

    /// Returns whether a server advertising `capabilities` may be invoked.
    #[must_use]
    pub fn is_eligible(self, capabilities: &ServerCapabilities) -> bool {
        capabilities.is_enabled(self.capability())
    }

    /// Starts the request against `server`.
    #[must_use]
    pub fn invoke<T>(
        self,
        invoker: &BackendInvoker<T>,
        server: &LanguageServerHandle,
        params: Value,
    ) -> InvocationHandle
    where
        T: LanguageServerTransport + 'static,
    {
        invoker.invoke(server.clone(), self.method(), params)
    }

    /// Decodes a server reply and translates it into the workspace
    /// namespace. A `null` reply is an empty answer.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Decode`] when the reply has the wrong shape
    /// and [`PayloadError::Translation`] when an embedded URI lies outside
    /// the workspace.
    pub fn on_result(
        self,
        result: Value,
        translator: &NamespaceTranslator,
    ) -> Result<Vec<QueryItem>, PayloadError> {
        if result.is_null() {
            return Ok(Vec::new());
        }
        let items = match self {
            Self::WorkspaceSymbol => serde_json::from_value::<Vec<SymbolInformation>>(result)?
                .into_iter()
                .map(QueryItem::Symbol)
                .collect(),
            Self::References => serde_json::from_value::<Vec<Location>>(result)?
                .into_iter()
                .map(QueryItem::Location)
                .collect(),
            Self::Hover => {
                let hover: Hover = serde_json::from_value(result)?;
                if has_contents(&hover.contents) {
                    vec![QueryItem::Hover(hover)]
                } else {
                    Vec::new()
                }
            }
        };
        items
            .into_iter()
            .map(|item| item.into_workspace_namespace(translator))
            .collect()
    }
}

fn has_contents(contents: &Value) -> bool {
    match contents {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        Value::Array(parts) => !parts.is_empty(),
        _ => true,
    }
}
