use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::FeederResult;

pub const USER_AGENT: &str = concat!("technews/", env!("CARGO_PKG_VERSION"));

/// Transport used by sources to download raw feed documents
#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> FeederResult<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FeederResult<Vec<u8>> {
        tracing::debug!(url, "fetching feed");

        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("technews/"));
    }

    #[test]
    fn test_unreachable_host_is_error() {
        let fetcher = HttpFetcher::new();
        assert!(fetcher.fetch("http://127.0.0.1:9/feed.xml").is_err());
    }
}
