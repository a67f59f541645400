//! Step definitions for scatter-gather dispatch scenarios.

mod given;
mod then;
mod when;
pub mod world;
