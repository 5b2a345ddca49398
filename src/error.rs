//! Error types for the `nse-chain-bot` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, NseError>`.
//!
//! [`NseError`] covers:
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **Snapshot errors** — Option chain payloads that are not shaped like a chain
//! - **Telegram errors** — Bot API envelopes with `ok: false`
//! - **Configuration errors** — Missing or malformed environment variables
//!
//! The activity ranker and the open-interest aggregate never fail; only the
//! I/O surfaces around them produce these errors.

/// All possible errors produced by the `nse-chain-bot` crate.
#[derive(Debug, thiserror::Error)]
pub enum NseError {
    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The option chain payload is structurally invalid (as opposed to a
    /// legitimately empty chain).
    #[error("Invalid option chain snapshot: {0}")]
    InvalidSnapshot(String),

    /// The Telegram Bot API answered with `ok: false`.
    #[error("Telegram API error: {0}")]
    Telegram(String),

    /// An expected entry was absent from an otherwise valid response.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NseError>;
