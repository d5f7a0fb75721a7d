use url::Url;

use crate::config::DEFAULT_REDDIT_BASE_URL;
use crate::domain::{FeedEntry, SourceKind};
use crate::errors::{FeederError, FeederResult};
use crate::sources::parse::RawItem;
use crate::sources::sanitize::sanitize_title;
use crate::sources::traits::FeedSource;

/// Top-of-day feed for one subreddit
pub struct RedditSource {
    kind: SourceKind,
    feed_url: String,
}

impl RedditSource {
    pub fn new(base_url: &str, subreddit: &str) -> FeederResult<Self> {
        let kind = SourceKind::subreddit(subreddit)?;
        let feed_url = Self::top_of_day_url(base_url, &kind)?;

        Ok(Self { kind, feed_url })
    }

    pub fn with_default_base(subreddit: &str) -> FeederResult<Self> {
        Self::new(DEFAULT_REDDIT_BASE_URL, subreddit)
    }

    fn top_of_day_url(base_url: &str, kind: &SourceKind) -> FeederResult<String> {
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| FeederError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut url = base
            .join(&format!("{}/top.rss", kind))
            .map_err(|e| FeederError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("t", "day");

        Ok(url.into())
    }
}

impl FeedSource for RedditSource {
    fn kind(&self) -> &SourceKind {
        &self.kind
    }

    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn to_entry(&self, item: RawItem) -> FeederResult<FeedEntry> {
        let headline = sanitize_title(item.title.as_deref().unwrap_or_default());

        Ok(FeedEntry::new(
            &self.kind.tag(),
            headline,
            item.link.unwrap_or_default(),
            item.published.unwrap_or_default(),
        )?
        .with_summary(item.summary))
    }
}
