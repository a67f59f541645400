//! Caller-facing workspace surface.
//!
//! [`WorkspaceService`] exposes the dispatch and edit operations as a method
//! table keyed by JSON-RPC method name, decoding camelCase parameters and
//! mapping failures to [`ServiceError`] codes. Transport framing is left to
//! the embedding server.

mod error;
mod params;
mod workspace_service;

pub use error::{INVALID_PARAMS, METHOD_NOT_FOUND, SERVER_ERROR, ServiceError};
pub use params::{EditFileParams, HoverParams, ReferenceParams, WorkspaceSymbolParams};
pub use workspace_service::{
    EDIT_FILE_METHOD, HOVER_METHOD, REFERENCES_METHOD, WORKSPACE_SYMBOL_METHOD, WorkspaceService,
};

#[cfg(test)]
mod tests;
