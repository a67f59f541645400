//! Gropius: scatter-gather language intelligence for shared workspaces.
//!
//! Gropius fans one language query (workspace symbols, references, hover)
//! out to every language server applicable to a workspace resource, waits
//! for them concurrently under one deadline, and merges whatever arrives in
//! time. Slow or failing servers degrade to per-server diagnostics instead of
//! failing the query. It also applies text edits to workspace files and
//! returns the edits that undo them.
//!
//! # Architecture
//!
//! Gropius follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, filesystem)
//!
//! # Modules
//!
//! - [`language_server`]: Language server registration and discovery
//! - [`dispatch`]: Scatter-gather coordination of language queries
//! - [`workspace`]: Workspace paths, namespace translation and file edits
//! - [`service`]: Caller-facing method table
//! - [`config`]: Layered runtime configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod dispatch;
pub mod language_server;
pub mod service;
pub mod telemetry;
pub mod workspace;
