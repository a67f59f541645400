//! Policies combining backend payloads into one answer.

use crate::dispatch::domain::QueryItem;

/// How the `ok` payloads of a dispatch are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Union of every payload, in arrival order. Duplicates are kept.
    Concatenate,
    /// The first non-empty payload in arrival order is the whole answer.
    FirstWins,
}

impl MergePolicy {
    /// Merges `payloads`, which must be given in arrival order.
    #[must_use]
    pub fn merge<'a, I>(self, payloads: I) -> Vec<QueryItem>
    where
        I: IntoIterator<Item = &'a [QueryItem]>,
    {
        match self {
            Self::Concatenate => payloads.into_iter().flatten().cloned().collect(),
            Self::FirstWins => payloads
                .into_iter()
                .find(|payload| !payload.is_empty())
                .map(<[QueryItem]>::to_vec)
                .unwrap_or_default(),
        }
    }
}
