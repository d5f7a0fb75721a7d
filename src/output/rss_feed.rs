use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rss::{Channel, Guid, Item};

use crate::domain::FeedEntry;
use crate::errors::{FeederError, FeederResult};

pub const DEFAULT_OUTPUT_PATH: &str = "docs/feed.xml";

/// Fixed metadata of the published channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub title: String,
    pub link: String,
    pub description: String,
    pub generator: String,
}

impl Default for ChannelInfo {
    fn default() -> Self {
        Self {
            title: "Daily Tech Digest".to_string(),
            link: "https://github.com/edwardhanhk/daily-tech-news".to_string(),
            description: "Top Hacker News and Reddit tech posts, fetched daily".to_string(),
            generator: concat!("technews ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn entry_to_item(entry: &FeedEntry) -> Item {
    let mut guid = Guid::default();
    guid.set_value(entry.link());
    guid.set_permalink(true);

    let mut item = Item::default();
    item.set_title(entry.title().to_string());
    item.set_link(entry.link().to_string());
    item.set_guid(guid);

    // pubDate is passed through exactly as the source gave it
    if !entry.published().is_empty() {
        item.set_pub_date(entry.published().to_string());
    }
    if !entry.summary().is_empty() {
        item.set_description(entry.summary().to_string());
    }

    item
}

/// Render entries (already in output order) as a pretty-printed RSS 2.0
/// document with 2-space indentation
pub fn render_rss(
    info: &ChannelInfo,
    entries: &[FeedEntry],
    built_at: DateTime<Utc>,
) -> FeederResult<String> {
    let mut channel = Channel::default();
    channel.set_title(info.title.as_str());
    channel.set_link(info.link.as_str());
    channel.set_description(info.description.as_str());
    channel.set_last_build_date(built_at.to_rfc2822());
    channel.set_generator(info.generator.clone());
    channel.set_items(entries.iter().map(entry_to_item).collect::<Vec<_>>());

    let buffer = channel.pretty_write_to(Vec::new(), b' ', 2)?;

    String::from_utf8(buffer).map_err(|e| FeederError::Rss(e.to_string()))
}

/// Write the document, creating missing parent directories. The file is
/// overwritten in place.
pub fn write_feed(path: &Path, xml: &str) -> FeederResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, xml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn built_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 0).unwrap()
    }

    fn entry(title: &str, link: &str, published: &str, summary: Option<&str>) -> FeedEntry {
        FeedEntry::new("[HN]", title, link, published)
            .unwrap()
            .with_summary(summary.map(str::to_string))
    }

    #[test]
    fn test_empty_feed_has_channel_and_no_items() {
        let xml = render_rss(&ChannelInfo::default(), &[], built_at()).unwrap();

        assert!(xml.contains("<rss"));
        assert!(xml.contains("version=\"2.0\""));
        assert!(xml.contains("<channel>"));
        assert!(!xml.contains("<item>"));

        let parsed = Channel::read_from(xml.as_bytes()).unwrap();
        assert_eq!(parsed.title(), "Daily Tech Digest");
        assert!(parsed.items().is_empty());
    }

    #[test]
    fn test_channel_metadata() {
        let xml = render_rss(&ChannelInfo::default(), &[], built_at()).unwrap();
        let parsed = Channel::read_from(xml.as_bytes()).unwrap();

        assert_eq!(parsed.link(), "https://github.com/edwardhanhk/daily-tech-news");
        assert_eq!(
            parsed.last_build_date(),
            Some(built_at().to_rfc2822().as_str())
        );
        assert!(parsed.generator().is_some_and(|g| g.starts_with("technews ")));
    }

    #[test]
    fn test_items_keep_order_and_fields() {
        let entries = vec![
            entry("Newer", "https://a.example/1", "Tue, 02 Jan 2024 10:00:00 +0000", None),
            entry("Older", "https://a.example/2", "not-a-date", Some("Some summary")),
        ];

        let xml = render_rss(&ChannelInfo::default(), &entries, built_at()).unwrap();
        let parsed = Channel::read_from(xml.as_bytes()).unwrap();
        let items = parsed.items();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), Some("[HN] Newer"));
        assert_eq!(items[0].link(), Some("https://a.example/1"));
        assert_eq!(items[0].pub_date(), Some("Tue, 02 Jan 2024 10:00:00 +0000"));

        let guid = items[0].guid().unwrap();
        assert_eq!(guid.value(), "https://a.example/1");
        assert!(guid.is_permalink());

        assert_eq!(items[1].pub_date(), Some("not-a-date"));
    }

    #[test]
    fn test_description_only_when_summary_present() {
        let entries = vec![
            entry("No summary", "https://a.example/1", "", None),
            entry("Summary", "https://a.example/2", "", Some("Details")),
        ];

        let xml = render_rss(&ChannelInfo::default(), &entries, built_at()).unwrap();
        let parsed = Channel::read_from(xml.as_bytes()).unwrap();

        assert!(parsed.items()[0].description().is_none());
        assert_eq!(parsed.items()[1].description(), Some("Details"));
        assert!(parsed.items()[0].pub_date().is_none());
    }

    #[test]
    fn test_pretty_printed_with_two_spaces() {
        let entries = vec![entry("T", "https://a.example", "", None)];
        let xml = render_rss(&ChannelInfo::default(), &entries, built_at()).unwrap();

        assert!(xml.contains("\n  <channel>"));
        assert!(xml.contains("\n    <item>"));
    }

    #[test]
    fn test_write_feed_creates_directory_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs").join("feed.xml");

        write_feed(&path, "first").unwrap();
        write_feed(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
