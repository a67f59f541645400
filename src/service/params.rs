//! Parameter objects of the workspace methods.

use crate::workspace::domain::{Position, TextEdit};
use serde::{Deserialize, Serialize};

/// Parameters of `workspace/symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSymbolParams {
    /// Symbol name filter; may be empty.
    #[serde(default)]
    pub query: String,
    /// Workspace path selecting the applicable language servers.
    pub file_uri: String,
}

/// Parameters of `textDocument/references`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceParams {
    /// Workspace path of the document.
    pub file_uri: String,
    /// Position of the symbol.
    pub position: Position,
    /// Whether the declaration itself is included.
    #[serde(default)]
    pub include_declaration: bool,
}

/// Parameters of `textDocument/hover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverParams {
    /// Workspace path of the document.
    pub file_uri: String,
    /// Hovered position.
    pub position: Position,
}

/// Parameters of `workspace/editFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditFileParams {
    /// Workspace path of the file to edit.
    pub uri: String,
    /// Edits, with ranges in the coordinates of the current content.
    pub edits: Vec<TextEdit>,
}
