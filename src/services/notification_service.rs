use telegram::{SendOptions, TelegramClient};

use crate::config::TelegramConfig;
use crate::domain::Digest;
use crate::errors::{FeederError, FeederResult};

pub struct NotificationService {
    client: TelegramClient,
    chat_id: String,
    options: SendOptions,
}

impl NotificationService {
    /// Fails when the bot token or chat id is missing
    pub fn new(config: &TelegramConfig) -> FeederResult<Self> {
        let token = config
            .bot_token
            .as_deref()
            .ok_or_else(|| FeederError::MissingEnvVar("TELEGRAM_BOT_TOKEN".to_string()))?;

        let chat_id = config
            .chat_id
            .clone()
            .ok_or_else(|| FeederError::MissingEnvVar("TELEGRAM_CHAT_ID".to_string()))?;

        let client = TelegramClient::with_api_base(&config.api_base, token)?;

        Ok(Self {
            client,
            chat_id,
            options: SendOptions::default(),
        })
    }

    /// Send the digest once, Markdown enabled, link previews on. No retry.
    pub fn send(&self, digest: &Digest) -> FeederResult<()> {
        let message = self
            .client
            .send_message(&self.chat_id, &digest.format(), &self.options)?;

        tracing::debug!(message_id = message.message_id, "digest delivered");
        Ok(())
    }
}

/// Build the service and send in one step, so missing credentials are
/// reported the same way as transport failures
pub fn send_digest(config: &TelegramConfig, digest: &Digest) -> FeederResult<()> {
    NotificationService::new(config)?.send(digest)
}
