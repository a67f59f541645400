//! Step definitions for file edit scenarios.

mod given;
mod then;
mod when;
pub mod world;
