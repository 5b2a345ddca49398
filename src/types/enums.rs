//! Shared enum types used across the NSE client, the analytics and the bot.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Instrument Class
// ---------------------------------------------------------------------------

/// Class of underlying an option chain is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentClass {
    /// Index options (NIFTY, BANKNIFTY, ...).
    Index,
    /// Single-stock options.
    Equity,
}

impl InstrumentClass {
    /// Value of the `type` query parameter of the option chain endpoint.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Index => "Indices",
            Self::Equity => "Equity",
        }
    }
}

// ---------------------------------------------------------------------------
// Option Side
// ---------------------------------------------------------------------------

/// Call (CE) or put (PE) leg of a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    #[serde(rename = "CE")]
    Call,
    #[serde(rename = "PE")]
    Put,
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Call => "CE",
            Self::Put => "PE",
        })
    }
}

// ---------------------------------------------------------------------------
// Market Report
// ---------------------------------------------------------------------------

/// Market-summary reports available from the market data menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketReport {
    MostActive,
    PreopenMovers,
    FiiDii,
    BlockDeals,
    BulkDeals,
    IndiaVix,
    TopGainers,
    TopLosers,
}

impl MarketReport {
    /// Every report, in menu order.
    pub const ALL: [MarketReport; 8] = [
        Self::MostActive,
        Self::PreopenMovers,
        Self::FiiDii,
        Self::BlockDeals,
        Self::BulkDeals,
        Self::IndiaVix,
        Self::TopGainers,
        Self::TopLosers,
    ];

    /// Callback key used in inline keyboards.
    pub fn key(self) -> &'static str {
        match self {
            Self::MostActive => "most_active",
            Self::PreopenMovers => "preopen_movers",
            Self::FiiDii => "fiidii",
            Self::BlockDeals => "block_deals",
            Self::BulkDeals => "bulk_deals",
            Self::IndiaVix => "indiavix",
            Self::TopGainers => "top_gainers",
            Self::TopLosers => "top_losers",
        }
    }

    /// Parse a callback key back into a report.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// Button label in the market data menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::MostActive => "🔥 Most Active",
            Self::PreopenMovers => "🕒 Preopen Movers",
            Self::FiiDii => "🏦 FII / DII",
            Self::BlockDeals => "📦 Block Deals",
            Self::BulkDeals => "📊 Bulk Deals",
            Self::IndiaVix => "⚡ India VIX",
            Self::TopGainers => "📈 Top Gainers",
            Self::TopLosers => "📉 Top Losers",
        }
    }
}
