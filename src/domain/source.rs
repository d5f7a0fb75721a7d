use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{FeederError, FeederResult};

fn subreddit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{2,21}$").expect("valid subreddit regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    HackerNews,
    Subreddit(String),
}

impl SourceKind {
    /// Subreddit source; accepts `rust`, `r/rust` and `/r/rust`
    pub fn subreddit(name: &str) -> FeederResult<Self> {
        let name = name.trim().trim_start_matches('/');
        let name = name.strip_prefix("r/").unwrap_or(name);

        if !subreddit_pattern().is_match(name) {
            return Err(FeederError::InvalidInput(format!(
                "Invalid subreddit name: '{}'",
                name
            )));
        }

        Ok(SourceKind::Subreddit(name.to_string()))
    }

    /// Human-readable name used in digests and log lines
    pub fn label(&self) -> String {
        match self {
            SourceKind::HackerNews => "Hacker News".to_string(),
            SourceKind::Subreddit(name) => format!("Reddit r/{}", name),
        }
    }

    /// Prefix added to every entry title from this source
    pub fn tag(&self) -> String {
        match self {
            SourceKind::HackerNews => "[HN]".to_string(),
            SourceKind::Subreddit(name) => format!("[r/{}]", name),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SourceKind::HackerNews => "🔥",
            SourceKind::Subreddit(_) => "🌐",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::HackerNews => write!(f, "hn"),
            SourceKind::Subreddit(name) => write!(f, "r/{}", name),
        }
    }
}
