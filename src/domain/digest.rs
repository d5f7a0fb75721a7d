use chrono::NaiveDateTime;

use super::{FeedEntry, FetchOutcome, SourceFetch, SourceKind};

pub const DIGEST_TITLE: &str = "📰 Daily Tech Digest";
pub const DIGEST_FOOTER: &str = "---\n🤖 Sent automatically by technews";

/// Numbered Markdown list: "{n}. [{headline}]({link})", one line per entry.
/// Markdown characters in titles are passed through as-is.
pub fn render_list(entries: &[FeedEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. [{}]({})", i + 1, entry.headline(), entry.link()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text used in place of a source's list when its fetch failed
pub fn failure_placeholder(source: &SourceKind) -> String {
    format!("❌ {} fetch failed", source.label())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSection {
    pub heading: String,
    pub body: String,
}

impl DigestSection {
    pub fn from_fetch(fetch: &SourceFetch, limit: usize) -> Self {
        let body = match &fetch.outcome {
            FetchOutcome::Fetched(entries) => render_list(entries),
            FetchOutcome::Failed(_) => failure_placeholder(&fetch.source),
        };

        Self {
            heading: format!("{} {} Top {}:", fetch.source.icon(), fetch.source.label(), limit),
            body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Digest {
    pub generated_at: NaiveDateTime,
    pub sections: Vec<DigestSection>,
}

impl Digest {
    pub fn from_fetches(generated_at: NaiveDateTime, fetches: &[SourceFetch], limit: usize) -> Self {
        Self {
            generated_at,
            sections: fetches
                .iter()
                .map(|fetch| DigestSection::from_fetch(fetch, limit))
                .collect(),
        }
    }

    /// Format: header with minute-precision timestamp, one block per
    /// source, then the footer
    pub fn format(&self) -> String {
        let mut message = format!(
            "{} ⏰ {}\n\n",
            DIGEST_TITLE,
            self.generated_at.format("%Y-%m-%d %H:%M")
        );

        for section in &self.sections {
            message.push_str(&section.heading);
            message.push('\n');
            message.push_str(&section.body);
            message.push_str("\n\n");
        }

        message.push_str(DIGEST_FOOTER);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(tag: &str, title: &str, link: &str) -> FeedEntry {
        FeedEntry::new(tag, title, link, "").unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, 42)
            .unwrap()
    }

    #[test]
    fn test_render_list_numbered_in_order() {
        let entries = vec![
            entry("[HN]", "First", "https://one.example"),
            entry("[HN]", "Second", "https://two.example"),
            entry("[HN]", "Third", "https://three.example"),
        ];

        let rendered = render_list(&entries);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "1. [First](https://one.example)",
                "2. [Second](https://two.example)",
                "3. [Third](https://three.example)",
            ]
        );
    }

    #[test]
    fn test_render_list_empty() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn test_render_list_passes_markdown_through() {
        let entries = vec![entry("", "Use *bold* and _it_", "https://x.example")];
        assert_eq!(render_list(&entries), "1. [Use *bold* and _it_](https://x.example)");
    }

    #[test]
    fn test_digest_format() {
        let fetches = vec![
            SourceFetch {
                source: SourceKind::HackerNews,
                outcome: FetchOutcome::Fetched(vec![entry("[HN]", "Rust 2.0", "https://hn.example/1")]),
            },
            SourceFetch {
                source: SourceKind::Subreddit("technology".to_string()),
                outcome: FetchOutcome::Fetched(vec![entry(
                    "[r/technology]",
                    "Chips",
                    "https://reddit.example/1",
                )]),
            },
        ];

        let digest = Digest::from_fetches(at(8, 5), &fetches, 5);

        assert_eq!(
            digest.format(),
            "📰 Daily Tech Digest ⏰ 2024-01-02 08:05\n\
             \n\
             🔥 Hacker News Top 5:\n\
             1. [Rust 2.0](https://hn.example/1)\n\
             \n\
             🌐 Reddit r/technology Top 5:\n\
             1. [Chips](https://reddit.example/1)\n\
             \n\
             ---\n\
             🤖 Sent automatically by technews"
        );
    }

    #[test]
    fn test_failed_source_uses_placeholder() {
        let fetches = vec![
            SourceFetch {
                source: SourceKind::HackerNews,
                outcome: FetchOutcome::Failed("connection refused".to_string()),
            },
            SourceFetch {
                source: SourceKind::Subreddit("rust".to_string()),
                outcome: FetchOutcome::Fetched(vec![entry("[r/rust]", "Ok", "https://r.example")]),
            },
        ];

        let digest = Digest::from_fetches(at(23, 59), &fetches, 3);

        assert_eq!(digest.sections[0].heading, "🔥 Hacker News Top 3:");
        assert_eq!(digest.sections[0].body, "❌ Hacker News fetch failed");
        assert_eq!(digest.sections[1].body, "1. [Ok](https://r.example)");
        assert!(!digest.format().contains("connection refused"));
    }
}
