use feed_rs::parser;

use crate::errors::{FeederError, FeederResult};

/// Item as it comes out of the upstream feed, before any source-specific
/// cleanup or validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub summary: Option<String>,
}

/// Parse RSS, Atom or JSON Feed bytes into raw items, in document order
pub fn parse_feed(bytes: &[u8]) -> FeederResult<Vec<RawItem>> {
    let parsed = parser::parse(bytes).map_err(|e| FeederError::FeedParse(e.to_string()))?;

    let items = parsed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry.title.map(|t| t.content);
            let link = entry.links.into_iter().next().map(|l| l.href);

            // RSS pubDate format, whichever date the feed provides
            let published = entry
                .published
                .or(entry.updated)
                .map(|dt| dt.to_rfc2822());

            let summary = entry
                .summary
                .map(|t| t.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .filter(|s| !s.trim().is_empty());

            RawItem {
                title,
                link,
                published,
                summary,
            }
        })
        .collect();

    Ok(items)
}
