//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `NSE_BOT_TOKEN` | *(required)* | Telegram bot token |
//! | `NSE_BASE_URL` | `https://www.nseindia.com` | NSE site / API root |
//! | `TELEGRAM_API_URL` | `https://api.telegram.org` | Bot API root |
//! | `NSE_BOT_SESSION_TTL_SECS` | `1800` | Idle time before a session is dropped |
//! | `NSE_BOT_POLL_TIMEOUT_SECS` | `30` | `getUpdates` long-poll timeout |

use std::env;
use std::fmt;

use chrono::TimeDelta;

use crate::constants::{
    DEFAULT_POLL_TIMEOUT_SECS, DEFAULT_SESSION_TTL_SECS, NSE_BASE_URL, TELEGRAM_API_URL,
};
use crate::error::{NseError, Result};

/// Settings for the bot binary.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub telegram_token: String,
    pub nse_base_url: String,
    pub telegram_api_url: String,
    pub session_ttl_secs: u64,
    pub poll_timeout_secs: u64,
}

// The token is a credential; keep it out of logs.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"<redacted>")
            .field("nse_base_url", &self.nse_base_url)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .finish()
    }
}

impl BotConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_token = lookup("NSE_BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| NseError::Config("NSE_BOT_TOKEN is not set".into()))?;

        let number = |key: &str, default: u64| -> Result<u64> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| NseError::Config(format!("{key} is not a number: {raw:?}"))),
            }
        };

        Ok(Self {
            telegram_token,
            nse_base_url: lookup("NSE_BASE_URL").unwrap_or_else(|| NSE_BASE_URL.into()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| TELEGRAM_API_URL.into()),
            session_ttl_secs: number("NSE_BOT_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?,
            poll_timeout_secs: number("NSE_BOT_POLL_TIMEOUT_SECS", DEFAULT_POLL_TIMEOUT_SECS)?,
        })
    }

    /// Session inactivity timeout.
    pub fn session_ttl(&self) -> Result<TimeDelta> {
        i64::try_from(self.session_ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| {
                NseError::Config(format!(
                    "NSE_BOT_SESSION_TTL_SECS out of range: {}",
                    self.session_ttl_secs
                ))
            })
    }
}
