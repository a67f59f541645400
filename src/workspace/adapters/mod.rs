//! Adapter implementations for workspace file storage.

mod cap_std_store;
mod memory;

pub use cap_std_store::CapStdFileStore;
pub use memory::InMemoryFileStore;
