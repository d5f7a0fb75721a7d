use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::{merge_newest_first, FeedEntry, SourceFetch};
use crate::errors::FeederResult;
use crate::output::{render_rss, write_feed, ChannelInfo};

pub struct PublishService {
    channel: ChannelInfo,
}

impl PublishService {
    pub fn new(channel: ChannelInfo) -> Self {
        Self { channel }
    }

    /// Merged entries, newest first. Failed sources contribute nothing.
    pub fn collect_entries(fetches: Vec<SourceFetch>) -> Vec<FeedEntry> {
        merge_newest_first(fetches.into_iter().map(|f| f.outcome.into_entries()))
    }

    pub fn render(&self, fetches: Vec<SourceFetch>, built_at: DateTime<Utc>) -> FeederResult<String> {
        let entries = Self::collect_entries(fetches);
        tracing::debug!(count = entries.len(), "rendering feed");

        render_rss(&self.channel, &entries, built_at)
    }

    /// Render and write to `path`, returning the number of bytes written
    pub fn publish(&self, fetches: Vec<SourceFetch>, path: &Path) -> FeederResult<usize> {
        let xml = self.render(fetches, Utc::now())?;
        write_feed(path, &xml)?;

        Ok(xml.len())
    }
}

impl Default for PublishService {
    fn default() -> Self {
        Self::new(ChannelInfo::default())
    }
}
