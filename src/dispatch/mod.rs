//! Scatter-gather dispatch of language queries for Gropius.
//!
//! A dispatch resolves the language servers applicable to a workspace
//! resource, filters them by advertised capability, invokes every eligible
//! server concurrently, and merges whatever arrives before the deadline.
//! Slow, failing or terminated servers degrade to per-server partial results
//! instead of failing the whole dispatch. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
