use crate::config::DEFAULT_HN_FEED_URL;
use crate::domain::{FeedEntry, SourceKind};
use crate::errors::FeederResult;
use crate::sources::parse::RawItem;
use crate::sources::traits::FeedSource;

pub struct HackerNewsSource {
    kind: SourceKind,
    feed_url: String,
}

impl HackerNewsSource {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::HackerNews,
            feed_url: feed_url.into(),
        }
    }
}

impl Default for HackerNewsSource {
    fn default() -> Self {
        Self::new(DEFAULT_HN_FEED_URL)
    }
}

impl FeedSource for HackerNewsSource {
    fn kind(&self) -> &SourceKind {
        &self.kind
    }

    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    // HN descriptions only repeat the link, so no summary is kept
    fn to_entry(&self, item: RawItem) -> FeederResult<FeedEntry> {
        FeedEntry::new(
            &self.kind.tag(),
            item.title.unwrap_or_default(),
            item.link.unwrap_or_default(),
            item.published.unwrap_or_default(),
        )
    }
}
