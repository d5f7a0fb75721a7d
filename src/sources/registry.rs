use crate::config::Config;
use crate::domain::SourceFetch;
use crate::errors::FeederResult;
use crate::sources::fetcher::{FeedFetcher, HttpFetcher};
use crate::sources::traits::FeedSource;
use crate::sources::{hacker_news::HackerNewsSource, reddit::RedditSource};

pub struct SourceRegistry {
    fetcher: Box<dyn FeedFetcher>,
    sources: Vec<Box<dyn FeedSource>>,
}

impl SourceRegistry {
    pub fn new(fetcher: Box<dyn FeedFetcher>) -> Self {
        Self {
            fetcher,
            sources: Vec::new(),
        }
    }

    /// Hacker News first, then each subreddit in the given order.
    /// The order is kept in digests and in the merged feed's tie-breaks.
    pub fn from_config(config: &Config, subreddits: &[String]) -> FeederResult<Self> {
        Self::with_fetcher(Box::new(HttpFetcher::new()), config, subreddits)
    }

    pub fn with_fetcher(
        fetcher: Box<dyn FeedFetcher>,
        config: &Config,
        subreddits: &[String],
    ) -> FeederResult<Self> {
        let mut registry = Self::new(fetcher);

        registry.register(Box::new(HackerNewsSource::new(config.hn_feed_url.clone())));
        for name in subreddits {
            registry.register(Box::new(RedditSource::new(&config.reddit_base_url, name)?));
        }

        Ok(registry)
    }

    pub fn register(&mut self, source: Box<dyn FeedSource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> impl Iterator<Item = &dyn FeedSource> {
        self.sources.iter().map(|s| s.as_ref())
    }

    /// Fetch every source once, in registration order
    pub fn fetch_all(&self, limit: usize) -> Vec<SourceFetch> {
        self.sources
            .iter()
            .map(|source| SourceFetch {
                source: source.kind().clone(),
                outcome: source.fetch(self.fetcher.as_ref(), limit),
            })
            .collect()
    }
}
