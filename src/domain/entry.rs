use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{FeederError, FeederResult};

/// One normalized news item. Fields are private so an entry can't be
/// changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    title: String,
    headline: String,
    link: String,
    published: String,
    published_at: Option<DateTime<Utc>>,
    summary: String,
}

impl FeedEntry {
    /// `tag` is the source prefix (e.g. `[HN]`), `headline` the cleaned
    /// upstream title. Headline and link must be non-empty.
    pub fn new(
        tag: &str,
        headline: impl Into<String>,
        link: impl Into<String>,
        published: impl Into<String>,
    ) -> FeederResult<Self> {
        let headline = headline.into().trim().to_string();
        let link = link.into().trim().to_string();
        let published = published.into().trim().to_string();

        if headline.is_empty() {
            return Err(FeederError::InvalidEntry(format!("empty title for {}", link)));
        }
        if link.is_empty() {
            return Err(FeederError::InvalidEntry(format!("empty link for '{}'", headline)));
        }

        let title = if tag.is_empty() {
            headline.clone()
        } else {
            format!("{} {}", tag, headline)
        };

        Ok(Self {
            title,
            headline,
            published_at: parse_published(&published),
            link,
            published,
            summary: String::new(),
        })
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary.map(|s| s.trim().to_string()).unwrap_or_default();
        self
    }

    /// Display title including the source tag
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Raw timestamp as provided by the source, possibly empty
    pub fn published(&self) -> &str {
        &self.published
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Newest-first ordering: dated entries by time, then undated ones by
    /// their raw string, both descending.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        match (self.published_at, other.published_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => other.published.cmp(&self.published),
        }
    }
}

fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}
