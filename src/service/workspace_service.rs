//! Method table of the workspace surface.

use super::{EditFileParams, HoverParams, ReferenceParams, ServiceError, WorkspaceSymbolParams};
use crate::config::{ConfigError, GropiusConfig};
use crate::dispatch::domain::{DispatchRequest, QueryItem, QueryPayload};
use crate::dispatch::ports::{BackendDiscovery, LanguageServerTransport};
use crate::dispatch::services::ScatterGatherCoordinator;
use crate::workspace::domain::{Hover, Location, SymbolInformation, TextEdit, WorkspacePath};
use crate::workspace::ports::WorkspaceFileStore;
use crate::workspace::services::FileEditService;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Method name of the workspace symbol search.
pub const WORKSPACE_SYMBOL_METHOD: &str = "workspace/symbol";
/// Method name of the reference search.
pub const REFERENCES_METHOD: &str = "textDocument/references";
/// Method name of the hover query.
pub const HOVER_METHOD: &str = "textDocument/hover";
/// Method name of the file edit operation.
pub const EDIT_FILE_METHOD: &str = "workspace/editFile";

/// Workspace operations exposed to callers.
pub struct WorkspaceService<D, T, S>
where
    S: WorkspaceFileStore,
{
    coordinator: ScatterGatherCoordinator<D, T>,
    editor: FileEditService<S>,
}

impl<D, T, S> WorkspaceService<D, T, S>
where
    D: BackendDiscovery,
    T: LanguageServerTransport + 'static,
    S: WorkspaceFileStore + 'static,
{
    /// Creates the service from its collaborators.
    #[must_use]
    pub const fn new(
        coordinator: ScatterGatherCoordinator<D, T>,
        editor: FileEditService<S>,
    ) -> Self {
        Self {
            coordinator,
            editor,
        }
    }

    /// Wires the service from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is invalid.
    pub fn from_config(
        config: &GropiusConfig,
        discovery: Arc<D>,
        transport: Arc<T>,
        store: Arc<S>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let coordinator = ScatterGatherCoordinator::new(
            discovery,
            transport,
            config.workspace.translator()?,
            config.dispatch,
        );
        Ok(Self::new(coordinator, FileEditService::new(store)))
    }

    /// Returns the coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &ScatterGatherCoordinator<D, T> {
        &self.coordinator
    }

    /// Handles one call by method name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with code `-32601` for unknown methods,
    /// `-32602` for undecodable parameters and `-27000` for failed
    /// operations.
    pub async fn handle(&self, method: &str, params: Value) -> Result<Value, ServiceError> {
        tracing::debug!(%method, "handling workspace call");
        match method {
            WORKSPACE_SYMBOL_METHOD => to_result(self.workspace_symbol(decode(params)?).await?),
            REFERENCES_METHOD => to_result(self.references(decode(params)?).await?),
            HOVER_METHOD => to_result(self.hover(decode(params)?).await?),
            EDIT_FILE_METHOD => to_result(self.edit_file(decode(params)?).await?),
            _ => Err(ServiceError::method_not_found(method)),
        }
    }

    /// Searches symbols across the servers applicable to `file_uri`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the request is invalid or discovery
    /// fails.
    pub async fn workspace_symbol(
        &self,
        params: WorkspaceSymbolParams,
    ) -> Result<Vec<SymbolInformation>, ServiceError> {
        let request = DispatchRequest::new(
            &params.file_uri,
            QueryPayload::WorkspaceSymbol {
                query: params.query,
            },
        )?;
        let result = self.coordinator.dispatch(&request).await?;
        Ok(result
            .into_merged()
            .into_iter()
            .filter_map(QueryItem::into_symbol)
            .collect())
    }

    /// Finds references to the symbol at a position.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the request is invalid or discovery
    /// fails.
    pub async fn references(&self, params: ReferenceParams) -> Result<Vec<Location>, ServiceError> {
        let request = DispatchRequest::new(
            &params.file_uri,
            QueryPayload::References {
                position: params.position,
                include_declaration: params.include_declaration,
            },
        )?;
        let result = self.coordinator.dispatch(&request).await?;
        Ok(result
            .into_merged()
            .into_iter()
            .filter_map(QueryItem::into_location)
            .collect())
    }

    /// Returns hover information, or `None` when no server supplied any.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the request is invalid or discovery
    /// fails.
    pub async fn hover(&self, params: HoverParams) -> Result<Option<Hover>, ServiceError> {
        let request = DispatchRequest::new(
            &params.file_uri,
            QueryPayload::Hover {
                position: params.position,
            },
        )?;
        let result = self.coordinator.dispatch(&request).await?;
        Ok(result
            .into_merged()
            .into_iter()
            .find_map(QueryItem::into_hover))
    }

    /// Applies edits to a file and returns the edits undoing them.
    ///
    /// The edit runs on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with code `-32602` for an invalid path and
    /// `-27000` when the edit is rejected or the file cannot be updated.
    pub async fn edit_file(&self, params: EditFileParams) -> Result<Vec<TextEdit>, ServiceError> {
        let EditFileParams { uri, edits } = params;
        let path = WorkspacePath::new(uri)?;
        let editor = self.editor.clone();
        tokio::task::spawn_blocking(move || editor.edit_file(&path, edits))
            .await
            .map_err(|err| ServiceError::server_error(format!("edit task failed: {err}")))?
            .map_err(|err| {
                tracing::warn!(error = %err, "file edit rejected");
                ServiceError::from(err)
            })
    }
}

fn decode<P: DeserializeOwned>(params: Value) -> Result<P, ServiceError> {
    Ok(serde_json::from_value(params)?)
}

fn to_result<R: Serialize>(result: R) -> Result<Value, ServiceError> {
    serde_json::to_value(result)
        .map_err(|err| ServiceError::server_error(format!("could not encode result: {err}")))
}
