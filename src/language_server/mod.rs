//! Language server registration and discovery for Gropius.
//!
//! This module tracks the language servers attached to a workspace, their
//! lifecycle (`starting`, `initialized`, `terminated`) and the capabilities
//! they advertised during the `initialize` handshake. Discovery hands the
//! dispatch layer an immutable snapshot of the servers applicable to one
//! workspace resource. The module follows hexagonal architecture:
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
