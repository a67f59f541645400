//! Domain model for scatter-gather dispatch.
//!
//! Requests, per-backend partial results and the aggregated answer. These
//! types carry no runtime machinery; invocation and merging live in
//! [`crate::dispatch::services`].

mod error;
mod item;
mod request;
mod result;

pub use error::{DispatchError, PayloadError};
pub use item::QueryItem;
pub use request::{DispatchRequest, QueryKind, QueryPayload};
pub use result::{AggregatedResult, PartialResult, PartialStatus};
