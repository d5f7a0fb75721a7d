use super::{FeedEntry, SourceKind};
use crate::errors::FeederResult;

/// Result of fetching one source. Failures are carried as data so each
/// pipeline can pick its own fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched(Vec<FeedEntry>),
    Failed(String),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn entries(&self) -> &[FeedEntry] {
        match self {
            FetchOutcome::Fetched(entries) => entries,
            FetchOutcome::Failed(_) => &[],
        }
    }

    /// Entries on success, nothing on failure
    pub fn into_entries(self) -> Vec<FeedEntry> {
        match self {
            FetchOutcome::Fetched(entries) => entries,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

impl From<FeederResult<Vec<FeedEntry>>> for FetchOutcome {
    fn from(result: FeederResult<Vec<FeedEntry>>) -> Self {
        match result {
            Ok(entries) => FetchOutcome::Fetched(entries),
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceFetch {
    pub source: SourceKind,
    pub outcome: FetchOutcome,
}
