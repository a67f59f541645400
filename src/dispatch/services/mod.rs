//! Dispatch services: invocation, per-kind strategies, merging and the
//! scatter-gather coordinator.

mod coordinator;
mod invoker;
mod merge;
mod operation;

pub use coordinator::ScatterGatherCoordinator;
pub use invoker::{BackendInvoker, InvocationHandle, InvocationOutcome};
pub use merge::MergePolicy;
pub use operation::QueryOperation;
