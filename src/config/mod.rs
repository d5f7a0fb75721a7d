use url::Url;

use crate::errors::{FeederError, FeederResult};

pub const DEFAULT_HN_FEED_URL: &str = "https://hnrss.org/frontpage";
pub const DEFAULT_REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// Credentials for the notifier. Both are optional here: a missing value
/// only fails the send, not the whole run.
#[derive(Debug, Clone, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub hn_feed_url: String,
    pub reddit_base_url: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeederResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> FeederResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let telegram = TelegramConfig {
            bot_token: get("TELEGRAM_BOT_TOKEN"),
            chat_id: get("TELEGRAM_CHAT_ID"),
            api_base: validated_url(
                "TELEGRAM_API_BASE",
                get("TELEGRAM_API_BASE")
                    .unwrap_or_else(|| telegram::DEFAULT_API_BASE.to_string()),
            )?,
        };

        let hn_feed_url = validated_url(
            "TECHNEWS_HN_FEED_URL",
            get("TECHNEWS_HN_FEED_URL").unwrap_or_else(|| DEFAULT_HN_FEED_URL.to_string()),
        )?;

        let reddit_base_url = validated_url(
            "TECHNEWS_REDDIT_BASE_URL",
            get("TECHNEWS_REDDIT_BASE_URL")
                .unwrap_or_else(|| DEFAULT_REDDIT_BASE_URL.to_string()),
        )?;

        Ok(Self {
            telegram,
            hn_feed_url,
            reddit_base_url,
        })
    }
}

fn validated_url(key: &str, value: String) -> FeederResult<String> {
    Url::parse(&value)
        .map_err(|e| FeederError::Config(format!("{} is not a valid URL ({}): {}", key, e, value)))?;
    Ok(value)
}
