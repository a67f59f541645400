//! Per-backend partial results and the aggregated dispatch answer.

use super::{QueryItem, QueryKind};
use crate::language_server::domain::{LanguageServerHandle, LanguageServerId, LanguageServerName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How one backend took part in a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialStatus {
    /// The backend answered and its payload was usable.
    Ok,
    /// The backend does not advertise the capability; it was not invoked.
    Filtered,
    /// The backend did not answer before the deadline.
    TimedOut,
    /// The backend failed or its payload could not be used.
    Failed,
}

impl PartialStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Filtered => "filtered",
            Self::TimedOut => "timed_out",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PartialStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Outcome of one backend within one dispatch. Immutable once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialResult {
    server_id: LanguageServerId,
    server_name: LanguageServerName,
    status: PartialStatus,
    elapsed: Option<Duration>,
    reason: Option<String>,
    payload: Vec<QueryItem>,
}

impl PartialResult {
    fn from_parts(
        server: &LanguageServerHandle,
        status: PartialStatus,
        elapsed: Option<Duration>,
        reason: Option<String>,
        payload: Vec<QueryItem>,
    ) -> Self {
        Self {
            server_id: server.id(),
            server_name: server.name().clone(),
            status,
            elapsed,
            reason,
            payload,
        }
    }

    /// Records a usable, already translated answer.
    #[must_use]
    pub fn ok(server: &LanguageServerHandle, elapsed: Duration, payload: Vec<QueryItem>) -> Self {
        Self::from_parts(server, PartialStatus::Ok, Some(elapsed), None, payload)
    }

    /// Records a backend skipped by the capability check.
    #[must_use]
    pub fn filtered(server: &LanguageServerHandle) -> Self {
        Self::from_parts(server, PartialStatus::Filtered, None, None, Vec::new())
    }

    /// Records a backend cut off by the deadline.
    #[must_use]
    pub fn timed_out(server: &LanguageServerHandle, elapsed: Duration) -> Self {
        Self::from_parts(
            server,
            PartialStatus::TimedOut,
            Some(elapsed),
            None,
            Vec::new(),
        )
    }

    /// Records a failed backend.
    #[must_use]
    pub fn failed(
        server: &LanguageServerHandle,
        elapsed: Duration,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            server,
            PartialStatus::Failed,
            Some(elapsed),
            Some(reason.into()),
            Vec::new(),
        )
    }

    /// Returns the backend identifier.
    #[must_use]
    pub const fn server_id(&self) -> LanguageServerId {
        self.server_id
    }

    /// Returns the backend name.
    #[must_use]
    pub const fn server_name(&self) -> &LanguageServerName {
        &self.server_name
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> PartialStatus {
        self.status
    }

    /// Returns how long the backend was awaited; `None` when filtered.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Returns the failure reason for `failed` results.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the translated payload; empty unless `ok`.
    #[must_use]
    pub fn payload(&self) -> &[QueryItem] {
        &self.payload
    }

    /// Returns whether the status is `ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == PartialStatus::Ok
    }
}

/// Result of one complete dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    kind: QueryKind,
    merged: Vec<QueryItem>,
    partials: Vec<PartialResult>,
}

impl AggregatedResult {
    /// Creates an aggregated result.
    #[must_use]
    pub const fn new(
        kind: QueryKind,
        merged: Vec<QueryItem>,
        partials: Vec<PartialResult>,
    ) -> Self {
        Self {
            kind,
            merged,
            partials,
        }
    }

    /// Result of a dispatch with no applicable backends.
    #[must_use]
    pub const fn empty(kind: QueryKind) -> Self {
        Self::new(kind, Vec::new(), Vec::new())
    }

    /// Returns the query kind.
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Returns the merged payload.
    #[must_use]
    pub fn merged(&self) -> &[QueryItem] {
        &self.merged
    }

    /// Consumes the result, returning the merged payload.
    #[must_use]
    pub fn into_merged(self) -> Vec<QueryItem> {
        self.merged
    }

    /// Returns one partial result per resolved backend.
    #[must_use]
    pub fn partials(&self) -> &[PartialResult] {
        &self.partials
    }

    /// Returns the non-`ok` partial results.
    pub fn diagnostics(&self) -> impl Iterator<Item = &PartialResult> {
        self.partials.iter().filter(|partial| !partial.is_ok())
    }

    /// Counts partial results with `status`.
    #[must_use]
    pub fn count(&self, status: PartialStatus) -> usize {
        self.partials
            .iter()
            .filter(|partial| partial.status() == status)
            .count()
    }

    /// Returns the partial result recorded for `server`, if any.
    #[must_use]
    pub fn partial_for(&self, server: &LanguageServerName) -> Option<&PartialResult> {
        self.partials
            .iter()
            .find(|partial| partial.server_name() == server)
    }
}
