use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "technews")]
#[command(about = "Daily Hacker News and Reddit tech digest: Telegram notifier and RSS publisher")]
#[command(version)]
pub struct Cli {
    /// Subreddits to include, top posts of the day (repeat or comma-separate)
    #[arg(
        long = "subreddit",
        global = true,
        env = "TECHNEWS_SUBREDDITS",
        value_delimiter = ',',
        default_value = "technology"
    )]
    pub subreddits: Vec<String>,

    /// Maximum number of entries taken from each source
    #[arg(
        long,
        global = true,
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(1..=100)
    )]
    pub limit: u16,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch headlines and send a digest to Telegram
    Notify {
        /// Print the digest instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Fetch headlines and write a merged RSS feed
    Publish {
        /// Output file path
        #[arg(short, long, env = "TECHNEWS_OUTPUT", default_value = "docs/feed.xml")]
        output: PathBuf,

        /// Print the feed to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}
