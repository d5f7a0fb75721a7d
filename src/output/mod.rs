pub mod rss_feed;

pub use rss_feed::{render_rss, write_feed, ChannelInfo, DEFAULT_OUTPUT_PATH};
