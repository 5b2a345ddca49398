//! Constants for the NSE data API, the Telegram Bot API and the bot itself.
//!
//! Contains base URLs, endpoint paths, index tables and display limits.
//! These are used internally by [`NseClient`](crate::client::NseClient),
//! [`TelegramClient`](crate::bot::telegram::TelegramClient) and the
//! conversation handlers, but are also exported for advanced usage.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the NSE India website and its JSON API.
pub const NSE_BASE_URL: &str = "https://www.nseindia.com";

/// Base URL for the Telegram Bot API.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Browser user agent sent to NSE; the API rejects unknown clients.
pub const NSE_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

// ---------------------------------------------------------------------------
// NSE endpoints
// ---------------------------------------------------------------------------

/// NSE JSON API paths.
pub mod endpoints {
    /// Expiry dates for an underlying.
    pub const CONTRACT_INFO: &str = "/api/option-chain-contract-info";
    /// Full option chain for an underlying and expiry.
    pub const OPTION_CHAIN: &str = "/api/option-chain-v3";
    /// Most active securities.
    pub const MOST_ACTIVE: &str = "/api/live-analysis-most-active-securities";
    /// Pre-open market session.
    pub const PRE_OPEN: &str = "/api/market-data-pre-open";
    /// Provisional FII / DII cash market activity.
    pub const FII_DII: &str = "/api/fiidiiTradeReact";
    /// Block and bulk deal snapshot.
    pub const LARGE_DEALS: &str = "/api/snapshot-capital-market-largedeal";
    /// Every NSE index, including INDIA VIX.
    pub const ALL_INDICES: &str = "/api/allIndices";
    /// Constituents of an index with day change.
    pub const INDEX_CONSTITUENTS: &str = "/api/equity-stockIndices";
}

/// Index whose constituents are ranked for top gainers / losers.
pub const FNO_UNIVERSE: &str = "SECURITIES IN F&O";

/// Key of the pre-open market used for the movers report.
pub const PRE_OPEN_KEY: &str = "NIFTY";

/// Name of the volatility index row in `allIndices`.
pub const VIX_INDEX_NAME: &str = "INDIA VIX";

// ---------------------------------------------------------------------------
// Indices
// ---------------------------------------------------------------------------

/// Index underlyings offered in the index menu, as `(symbol, display name)`.
pub const INDICES: &[(&str, &str)] = &[
    ("NIFTY", "NIFTY 50"),
    ("BANKNIFTY", "Bank Nifty"),
    ("FINNIFTY", "Fin Nifty"),
    ("MIDCPNIFTY", "Nifty Midcap 50"),
];

/// Display name for an index symbol, or the symbol itself for equities.
pub fn display_name(symbol: &str) -> &str {
    INDICES
        .iter()
        .find(|(sym, _)| *sym == symbol)
        .map_or(symbol, |(_, name)| name)
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Number of strikes shown in an option chain summary.
pub const TOP_STRIKES: usize = 5;

/// Number of expiries offered in the expiry menu.
pub const MAX_EXPIRIES_SHOWN: usize = 5;

/// Number of rows kept for tabular market reports.
pub const REPORT_ROW_LIMIT: usize = 10;

/// Accepted length range of a stock symbol typed by the user.
pub const SYMBOL_LEN: std::ops::RangeInclusive<usize> = 2..=10;

/// Default inactivity timeout for a conversation, in seconds.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

/// Default long-poll timeout for `getUpdates`, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
