//! Dispatch requests and query kinds.

use super::DispatchError;
use crate::workspace::domain::{BackendUri, Position, WorkspacePath};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// The kinds of query the dispatcher fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Symbols matching a query string across the workspace.
    WorkspaceSymbol,
    /// References to the symbol at a position.
    References,
    /// Hover information for a position.
    Hover,
}

impl QueryKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorkspaceSymbol => "workspace_symbol",
            Self::References => "references",
            Self::Hover => "hover",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Kind-specific query payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPayload {
    /// `workspace/symbol` query.
    WorkspaceSymbol {
        /// Symbol name filter; may be empty.
        query: String,
    },
    /// `textDocument/references` query.
    References {
        /// Position of the symbol in the target resource.
        position: Position,
        /// Whether the declaration itself is included.
        include_declaration: bool,
    },
    /// `textDocument/hover` query.
    Hover {
        /// Position in the target resource.
        position: Position,
    },
}

impl QueryPayload {
    /// Returns the kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        match self {
            Self::WorkspaceSymbol { .. } => QueryKind::WorkspaceSymbol,
            Self::References { .. } => QueryKind::References,
            Self::Hover { .. } => QueryKind::Hover,
        }
    }

    /// Builds the outbound request parameters for a target already
    /// translated into the backend namespace.
    #[must_use]
    pub fn to_params(&self, target: &BackendUri) -> Value {
        match self {
            Self::WorkspaceSymbol { query } => json!({ "query": query }),
            Self::References {
                position,
                include_declaration,
            } => json!({
                "textDocument": { "uri": target.as_str() },
                "position": position,
                "context": { "includeDeclaration": include_declaration },
            }),
            Self::Hover { position } => json!({
                "textDocument": { "uri": target.as_str() },
                "position": position,
            }),
        }
    }
}

/// One caller query against the language servers applicable to a resource.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    target: WorkspacePath,
    payload: QueryPayload,
}

impl DispatchRequest {
    /// Creates a request from a raw workspace path.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedRequest`] when `target` is empty or
    /// not a valid workspace path.
    pub fn new(target: &str, payload: QueryPayload) -> Result<Self, DispatchError> {
        let path = WorkspacePath::new(target)
            .map_err(|err| DispatchError::MalformedRequest(err.to_string()))?;
        Ok(Self::from_parts(path, payload))
    }

    /// Creates a request from an already validated path.
    #[must_use]
    pub const fn from_parts(target: WorkspacePath, payload: QueryPayload) -> Self {
        Self { target, payload }
    }

    /// Returns the target resource.
    #[must_use]
    pub const fn target(&self) -> &WorkspacePath {
        &self.target
    }

    /// Returns the query payload.
    #[must_use]
    pub const fn payload(&self) -> &QueryPayload {
        &self.payload
    }

    /// Returns the query kind.
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        self.payload.kind()
    }
}
