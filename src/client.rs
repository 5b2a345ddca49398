//! Core HTTP client for the NSE India JSON API.
//!
//! The [`NseClient`] struct is the entry point for every NSE endpoint. It
//! wraps [`reqwest::Client`] with browser-like headers and a cookie store,
//! and provides a typed `get` method.
//!
//! Endpoint methods are added to `NseClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::constants::{NSE_BASE_URL, NSE_USER_AGENT};
use crate::error::{NseError, Result};

/// Core HTTP client for the NSE India JSON API.
///
/// NSE only answers API calls that carry the cookies handed out by its web
/// pages, so the first request through a client visits the home page to
/// prime the cookie store. Those cookies expire: a request rejected with
/// 401 or 403 re-primes the session and is sent once more. Clones share
/// both the connection pool and the session.
///
/// # Example
///
/// ```no_run
/// use nse_chain_bot::client::NseClient;
/// use nse_chain_bot::types::InstrumentClass;
///
/// # #[tokio::main]
/// # async fn main() -> nse_chain_bot::error::Result<()> {
/// let client = NseClient::new();
/// let expiries = client.get_expiries("NIFTY").await?;
/// let chain = client
///     .get_option_chain("NIFTY", &expiries[0], InstrumentClass::Index)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NseClient {
    http: reqwest::Client,
    /// Base URL for API requests (defaults to [`NSE_BASE_URL`]).
    base_url: String,
    /// `true` while the cookie store holds a session NSE has not rejected.
    session: Arc<Mutex<bool>>,
}

impl Default for NseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NseClient {
    /// Create a new `NseClient` against `https://www.nseindia.com`.
    pub fn new() -> Self {
        Self::with_base_url(NSE_BASE_URL)
    }

    /// Create a new `NseClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers(&base_url))
            .cookie_store(true)
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            base_url,
            session: Arc::new(Mutex::new(false)),
        }
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request with query parameters and deserialize the JSON
    /// response.
    ///
    /// A 401 or 403 answer re-primes the session and retries once; a second
    /// rejection is returned as [`NseError::HttpStatus`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<R> {
        let url = self.url(path, query)?;
        self.ensure_session().await?;
        tracing::debug!(%url, "GET");

        let mut resp = self.http.get(url.clone()).send().await?;
        if session_rejected(resp.status()) {
            tracing::info!(status = %resp.status(), "NSE session rejected, re-priming");
            self.reset_session().await;
            self.ensure_session().await?;
            resp = self.http.get(url).send().await?;
        }
        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Visit the home page unless the cookie store already holds a session.
    async fn ensure_session(&self) -> Result<()> {
        let mut primed = self.session.lock().await;
        if *primed {
            return Ok(());
        }

        tracing::debug!(url = %self.base_url, "priming NSE session");
        let resp = self
            .http
            .get(&self.base_url)
            .header(header::ACCEPT, "text/html")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NseError::HttpStatus { status, body });
        }
        *primed = true;
        Ok(())
    }

    /// Forget the current session so the next request primes a new one.
    async fn reset_session(&self) {
        *self.session.lock().await = false;
    }

    /// Build the full URL from a path segment and query parameters.
    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<url::Url> {
        let full = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Ok(url::Url::parse_with_params(&full, query)?)
    }

    /// Default headers applied to every request.
    fn default_headers(base_url: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(NSE_USER_AGENT));
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        if let Ok(referer) = HeaderValue::from_str(&format!("{base_url}/option-chain")) {
            headers.insert(header::REFERER, referer);
        }
        headers
    }

    /// Read a response, returning either the deserialized body or an
    /// [`NseError`].
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(NseError::Json)
        } else {
            Err(NseError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}

/// Status codes NSE answers with once its session cookies have expired.
fn session_rejected(status: reqwest::StatusCode) -> bool {
    matches!(
        status,
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN
    )
}
