use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Source errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Notification errors from the telegram library
    #[error("Telegram error: {0}")]
    Telegram(String),

    // Output errors
    #[error("RSS generation failed: {0}")]
    Rss(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<telegram::TelegramError> for FeederError {
    fn from(err: telegram::TelegramError) -> Self {
        FeederError::Telegram(err.to_string())
    }
}

impl From<rss::Error> for FeederError {
    fn from(err: rss::Error) -> Self {
        FeederError::Rss(err.to_string())
    }
}

pub type FeederResult<T> = Result<T, FeederError>;
