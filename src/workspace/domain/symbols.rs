//! LSP-shaped result items returned by language servers.

use super::Range;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A range inside a resource.
///
/// `uri` is a backend URI on the wire and a workspace path once translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Resource identifier.
    pub uri: String,
    /// Range inside the resource.
    pub range: Range,
}

/// A named program symbol and where it is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInformation {
    /// Symbol name.
    pub name: String,
    /// LSP `SymbolKind` number.
    pub kind: u32,
    /// Declaration site.
    pub location: Location,
    /// Enclosing symbol name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

/// Hover information for a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    /// Markup or marked-string contents, passed through unchanged.
    pub contents: Value,
    /// Range the hover applies to, if the server reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}
