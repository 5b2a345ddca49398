#![allow(missing_docs)]
//! Market report types — most active, pre-open, FII/DII, deals, VIX, movers.

use serde::{Deserialize, Serialize};

use crate::types::de;
use crate::types::enums::MarketReport;

// ---------------------------------------------------------------------------
// Most Active
// ---------------------------------------------------------------------------

/// Response from `GET /api/live-analysis-most-active-securities`.
#[derive(Debug, Clone, Deserialize)]
pub struct MostActiveResponse {
    #[serde(default)]
    pub data: Vec<MostActiveRow>,
}

/// One security ranked by traded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostActiveRow {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub last_price: f64,
    /// Turnover, in lakhs as reported by NSE.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub total_traded_value: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub quantity_traded: f64,
}

// ---------------------------------------------------------------------------
// Pre-open
// ---------------------------------------------------------------------------

/// Response from `GET /api/market-data-pre-open`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreOpenResponse {
    #[serde(default)]
    pub data: Vec<PreOpenEntry>,
}

/// Envelope around a pre-open row.
#[derive(Debug, Clone, Deserialize)]
pub struct PreOpenEntry {
    pub metadata: PreOpenRow,
}

/// Indicative opening of one security in the pre-open session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreOpenRow {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub previous_close: f64,
    /// Indicative equilibrium (opening) price.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub last_price: f64,
    /// Percent change versus previous close.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub p_change: f64,
}

// ---------------------------------------------------------------------------
// FII / DII
// ---------------------------------------------------------------------------

/// One category row of `GET /api/fiidiiTradeReact`.
///
/// Values are kept as NSE formats them (crores, two decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiiDiiRow {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub buy_value: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub sell_value: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub net_value: String,
}

// ---------------------------------------------------------------------------
// Block / Bulk Deals
// ---------------------------------------------------------------------------

/// Response from `GET /api/snapshot-capital-market-largedeal`.
#[derive(Debug, Clone, Deserialize)]
pub struct LargeDealsResponse {
    #[serde(default, rename = "BLOCK_DEALS_DATA")]
    pub block_deals: Vec<DealRow>,
    #[serde(default, rename = "BULK_DEALS_DATA")]
    pub bulk_deals: Vec<DealRow>,
}

/// A single block or bulk deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRow {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub client_name: String,
    /// `"BUY"` or `"SELL"`; may be empty for block deals.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub buy_sell: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub qty: f64,
    /// Trade price / weighted average price.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub watp: f64,
}

/// Direction of a deal as far as it can be told from `buy_sell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealSide {
    Buy,
    Sell,
    Unknown,
}

impl DealRow {
    pub fn side(&self) -> DealSide {
        let side = self.buy_sell.to_ascii_uppercase();
        if side.contains("BUY") {
            DealSide::Buy
        } else if side.contains("SELL") {
            DealSide::Sell
        } else {
            DealSide::Unknown
        }
    }
}

// ---------------------------------------------------------------------------
// Indices (VIX)
// ---------------------------------------------------------------------------

/// Response from `GET /api/allIndices`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllIndicesResponse {
    #[serde(default)]
    pub data: Vec<IndexQuote>,
}

/// Day quote of one index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub index: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub last: f64,
    /// Absolute change versus previous close.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub variation: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub percent_change: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub open: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub high: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub low: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub previous_close: f64,
}

// ---------------------------------------------------------------------------
// Index constituents (gainers / losers)
// ---------------------------------------------------------------------------

/// Response from `GET /api/equity-stockIndices`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConstituentsResponse {
    #[serde(default)]
    pub data: Vec<ConstituentRow>,
}

/// One constituent of an index with its day change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituentRow {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub last_price: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub p_change: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub total_traded_volume: f64,
}

// ---------------------------------------------------------------------------
// Report Table
// ---------------------------------------------------------------------------

/// A fetched, trimmed and ordered market report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReportTable {
    MostActive(Vec<MostActiveRow>),
    PreopenMovers(Vec<PreOpenRow>),
    FiiDii(Vec<FiiDiiRow>),
    BlockDeals(Vec<DealRow>),
    BulkDeals(Vec<DealRow>),
    IndiaVix(IndexQuote),
    TopGainers(Vec<ConstituentRow>),
    TopLosers(Vec<ConstituentRow>),
}

impl ReportTable {
    /// Which report this table answers.
    pub fn report(&self) -> MarketReport {
        match self {
            Self::MostActive(_) => MarketReport::MostActive,
            Self::PreopenMovers(_) => MarketReport::PreopenMovers,
            Self::FiiDii(_) => MarketReport::FiiDii,
            Self::BlockDeals(_) => MarketReport::BlockDeals,
            Self::BulkDeals(_) => MarketReport::BulkDeals,
            Self::IndiaVix(_) => MarketReport::IndiaVix,
            Self::TopGainers(_) => MarketReport::TopGainers,
            Self::TopLosers(_) => MarketReport::TopLosers,
        }
    }
}
