use crate::domain::{FeedEntry, FetchOutcome, SourceKind};
use crate::errors::FeederResult;
use crate::sources::fetcher::FeedFetcher;
use crate::sources::parse::{parse_feed, RawItem};

pub trait FeedSource: Send + Sync {
    /// Identifies this source
    fn kind(&self) -> &SourceKind;

    /// URL of the upstream feed document
    fn feed_url(&self) -> &str;

    /// Turn one upstream item into a normalized entry
    fn to_entry(&self, item: RawItem) -> FeederResult<FeedEntry>;

    /// Fetch up to `limit` entries in upstream order. Items that can't form a
    /// valid entry are skipped.
    fn fetch_entries(&self, fetcher: &dyn FeedFetcher, limit: usize) -> FeederResult<Vec<FeedEntry>> {
        let bytes = fetcher.fetch(self.feed_url())?;
        let items = parse_feed(&bytes)?;

        let entries = items
            .into_iter()
            .take(limit)
            .filter_map(|item| match self.to_entry(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(source = %self.kind(), "skipping item: {}", e);
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    /// Best-effort fetch: errors are logged and returned as a failed outcome
    fn fetch(&self, fetcher: &dyn FeedFetcher, limit: usize) -> FetchOutcome {
        let result = self.fetch_entries(fetcher, limit);

        match &result {
            Ok(entries) => {
                tracing::debug!(source = %self.kind(), count = entries.len(), "fetched entries")
            }
            Err(e) => tracing::warn!(source = %self.kind(), "fetch failed: {}", e),
        }

        result.into()
    }
}
