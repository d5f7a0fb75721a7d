//! Fetches the Hacker News front page and Reddit top-of-day feeds, then either
//! pushes a Markdown digest to Telegram or publishes a merged RSS feed.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod output;
pub mod services;
pub mod sources;
