//! Workspace resources for Gropius.
//!
//! This module owns the caller-side view of workspace files: validated
//! workspace paths, the namespace translator between workspace paths and the
//! URIs language servers use, LSP-shaped text and symbol values, the
//! streaming transform-and-invert editor, file storage and media-type
//! exclusion. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
