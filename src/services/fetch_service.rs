use crate::domain::SourceFetch;
use crate::sources::SourceRegistry;

pub const DEFAULT_ENTRY_LIMIT: usize = 5;

pub struct FetchService {
    source_registry: SourceRegistry,
    limit: usize,
}

impl FetchService {
    pub fn new(source_registry: SourceRegistry, limit: usize) -> Self {
        Self {
            source_registry,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetch every configured source once. Never fails: a broken source
    /// shows up as a failed outcome.
    pub fn fetch_all(&self) -> Vec<SourceFetch> {
        let fetches = self.source_registry.fetch_all(self.limit);

        let failed = fetches.iter().filter(|f| f.outcome.is_failed()).count();
        if failed > 0 {
            tracing::warn!("{} of {} sources failed", failed, fetches.len());
        }

        fetches
    }
}
