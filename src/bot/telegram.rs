//! Telegram Bot API — wire types, the [`ChatTransport`] seam and a
//! `reqwest` client implementing it.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::TELEGRAM_API_URL;
use crate::error::{NseError, Result};

// ---------------------------------------------------------------------------
// Incoming types
// ---------------------------------------------------------------------------

/// One incoming update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// A Telegram user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

/// A press on an inline keyboard button.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// The message carrying the keyboard; absent if it is too old.
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub data: Option<String>,
}

// ---------------------------------------------------------------------------
// Keyboards
// ---------------------------------------------------------------------------

/// Inline keyboard attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// A button that reports `callback_data` back when pressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

// ---------------------------------------------------------------------------
// Outgoing
// ---------------------------------------------------------------------------

/// Text and optional keyboard to send or edit in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
    /// Send with `parse_mode = "HTML"`.
    pub html: bool,
}

impl Reply {
    /// Plain-text reply without a keyboard.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            html: false,
        }
    }

    /// HTML reply without a keyboard.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            html: true,
            ..Self::text(text)
        }
    }

    /// Attach an inline keyboard.
    pub fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Outgoing side of a chat platform.
pub trait ChatTransport {
    /// Post a new message to `chat_id`.
    fn send_message(&self, chat_id: i64, reply: &Reply) -> impl Future<Output = Result<()>> + Send;

    /// Replace the text (and keyboard) of an existing message.
    fn edit_message(
        &self,
        chat_id: i64,
        message_id: i64,
        reply: &Reply,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Acknowledge a button press, optionally with a toast.
    fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> impl Future<Output = Result<()>> + Send;
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GetUpdates<'a> {
    offset: i64,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct EditMessageText<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct AnswerCallbackQuery<'a> {
    callback_query_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

/// Envelope wrapping every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

impl<T> ApiResponse<T> {
    /// The result on `ok: true`, the API description otherwise.
    pub fn into_result(self) -> Result<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(NseError::Telegram("response without result".into())),
            (false, _) => Err(NseError::Telegram(
                self.description.unwrap_or_else(|| "unknown error".into()),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    /// `<api>/bot<token>`; never logged.
    endpoint: String,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient").finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a client for `token` against `https://api.telegram.org`.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, TELEGRAM_API_URL)
    }

    /// Create a client against a custom Bot API server.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/bot{}", base_url.trim_end_matches('/'), token),
        }
    }

    /// Long-poll for updates with `update_id >= offset`.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let body = GetUpdates {
            offset,
            timeout: timeout_secs,
            allowed_updates: &["message", "callback_query"],
        };
        // The HTTP timeout must outlive the server-side long poll.
        self.call_with_timeout("getUpdates", &body, Duration::from_secs(timeout_secs + 10))
            .await
    }

    /// Invoke a Bot API method.
    pub async fn call<B: Serialize, R: DeserializeOwned>(&self, method: &str, body: &B) -> Result<R> {
        self.call_with_timeout(method, body, Duration::from_secs(30)).await
    }

    async fn call_with_timeout<B: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<R> {
        tracing::debug!(method, "telegram call");
        let resp = self
            .http
            .post(format!("{}/{}", self.endpoint, method))
            .timeout(timeout)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;
        match serde_json::from_slice::<ApiResponse<R>>(&bytes) {
            Ok(envelope) => envelope.into_result(),
            Err(_) if !status.is_success() => Err(NseError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(e) => Err(NseError::Json(e)),
        }
    }
}

fn parse_mode(reply: &Reply) -> Option<&'static str> {
    reply.html.then_some("HTML")
}

impl ChatTransport for TelegramClient {
    async fn send_message(&self, chat_id: i64, reply: &Reply) -> Result<()> {
        let body = SendMessage {
            chat_id,
            text: &reply.text,
            parse_mode: parse_mode(reply),
            reply_markup: reply.keyboard.as_ref(),
        };
        let _: serde_json::Value = self.call("sendMessage", &body).await?;
        Ok(())
    }

    async fn edit_message(&self, chat_id: i64, message_id: i64, reply: &Reply) -> Result<()> {
        let body = EditMessageText {
            chat_id,
            message_id,
            text: &reply.text,
            parse_mode: parse_mode(reply),
            reply_markup: reply.keyboard.as_ref(),
        };
        let _: serde_json::Value = self.call("editMessageText", &body).await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let body = AnswerCallbackQuery {
            callback_query_id: callback_id,
            text,
        };
        let _: bool = self.call("answerCallbackQuery", &body).await?;
        Ok(())
    }
}
