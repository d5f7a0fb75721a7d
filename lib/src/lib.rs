//! Telegram Bot API bindings for Rust
//! Provides a blocking client for sending text messages to a chat

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Bot token is empty")]
    EmptyToken,
    #[error("Chat id is empty")]
    EmptyChatId,
    #[error("Telegram API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Formatting mode applied by Telegram to the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOptions {
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: bool,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            parse_mode: Some(ParseMode::Markdown),
            disable_web_page_preview: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
    disable_web_page_preview: bool,
}

/// Subset of the message object returned by `sendMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

pub struct TelegramClient {
    api_base: String,
    token: String,
    client: Client,
}

impl TelegramClient {
    pub fn new(token: &str) -> Result<Self, TelegramError> {
        Self::with_api_base(DEFAULT_API_BASE, token)
    }

    /// Client against a custom Bot API server (self-hosted or a proxy)
    pub fn with_api_base(api_base: &str, token: &str) -> Result<Self, TelegramError> {
        if token.trim().is_empty() {
            return Err(TelegramError::EmptyToken);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Send a text message to a chat
    pub fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        options: &SendOptions,
    ) -> Result<Message, TelegramError> {
        if chat_id.trim().is_empty() {
            return Err(TelegramError::EmptyChatId);
        }

        let payload = build_payload(chat_id, text, options);

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ApiResponse<Message> =
            serde_json::from_str(&body).map_err(|_| TelegramError::Api {
                status: status.as_u16(),
                body: body.clone(),
            })?;

        match parsed {
            ApiResponse {
                ok: true,
                result: Some(message),
                ..
            } => Ok(message),
            ApiResponse { description, .. } => Err(TelegramError::Api {
                status: status.as_u16(),
                body: description.unwrap_or(body),
            }),
        }
    }
}

fn build_payload<'a>(
    chat_id: &'a str,
    text: &'a str,
    options: &SendOptions,
) -> SendMessagePayload<'a> {
    SendMessagePayload {
        chat_id,
        text,
        parse_mode: options.parse_mode,
        disable_web_page_preview: options.disable_web_page_preview,
    }
}

/// Send a message with default options (Markdown, link previews enabled)
pub fn send_message(token: &str, chat_id: &str, text: &str) -> Result<Message, TelegramError> {
    TelegramClient::new(token)?.send_message(chat_id, text, &SendOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_payload_shape() {
        let payload = build_payload("42", "hello", &SendOptions::default());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "chat_id": "42",
                "text": "hello",
                "parse_mode": "Markdown",
                "disable_web_page_preview": false
            })
        );
    }

    #[test]
    fn test_payload_without_parse_mode() {
        let options = SendOptions {
            parse_mode: None,
            disable_web_page_preview: true,
        };
        let value = serde_json::to_value(build_payload("1", "x", &options)).unwrap();

        assert!(value.get("parse_mode").is_none());
        assert_eq!(value["disable_web_page_preview"], json!(true));
    }

    #[test]
    fn test_html_parse_mode_name() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
    }

    #[test]
    fn test_method_url_trims_trailing_slash() {
        let client = TelegramClient::with_api_base("http://localhost:8081/", "123:abc").unwrap();
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:8081/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            TelegramClient::new("  "),
            Err(TelegramError::EmptyToken)
        ));
    }

    #[test]
    fn test_empty_chat_id_rejected_before_request() {
        let client = TelegramClient::new("123:abc").unwrap();
        let result = client.send_message("", "hi", &SendOptions::default());
        assert!(matches!(result, Err(TelegramError::EmptyChatId)));
    }

    #[test]
    fn test_api_response_error_description() {
        let parsed: ApiResponse<Message> = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();
        assert!(!parsed.ok);
        assert_eq!(
            parsed.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
