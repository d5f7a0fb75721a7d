pub mod traits;
pub mod fetcher;
pub mod parse;
pub mod sanitize;
pub mod hacker_news;
pub mod reddit;
pub mod registry;

pub use traits::FeedSource;
pub use fetcher::{FeedFetcher, HttpFetcher};
pub use registry::SourceRegistry;
