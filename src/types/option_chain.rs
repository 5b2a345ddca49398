//! Option Chain types — strike rows, CE/PE legs, snapshots, expiry list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NseError, Result};
use crate::types::de;

// ---------------------------------------------------------------------------
// Option Leg (per CE/PE)
// ---------------------------------------------------------------------------

/// Data for a single call or put at a given strike.
///
/// Every numeric field is normalised on deserialization: absent, `null` or
/// non-numeric values become `0.0`, and the four activity inputs are clamped
/// to be non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLeg {
    /// Outstanding contracts at this strike.
    #[serde(default, deserialize_with = "de::lenient_non_negative")]
    pub open_interest: f64,
    /// Contracts traded today.
    #[serde(default, deserialize_with = "de::lenient_non_negative")]
    pub total_traded_volume: f64,
    /// Quantity resting on the bid side.
    #[serde(default, deserialize_with = "de::lenient_non_negative")]
    pub total_buy_quantity: f64,
    /// Quantity resting on the ask side.
    #[serde(default, deserialize_with = "de::lenient_non_negative")]
    pub total_sell_quantity: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub last_price: f64,
    /// Implied volatility in percent.
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub implied_volatility: f64,
    /// Day change in open interest (may be negative).
    #[serde(
        default,
        rename = "changeinOpenInterest",
        deserialize_with = "de::lenient_f64"
    )]
    pub change_in_open_interest: f64,
}

// ---------------------------------------------------------------------------
// Strike Record
// ---------------------------------------------------------------------------

/// Call and Put data at a given strike price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrikeRecord {
    #[serde(
        default,
        rename = "strikePrice",
        deserialize_with = "de::lenient_f64"
    )]
    pub strike_price: f64,
    /// Call leg (absent if no CE trades at this strike).
    #[serde(default, rename = "CE")]
    pub ce: Option<OptionLeg>,
    /// Put leg (absent if no PE trades at this strike).
    #[serde(default, rename = "PE")]
    pub pe: Option<OptionLeg>,
}

impl StrikeRecord {
    /// A strike with no legs.
    pub fn new(strike_price: f64) -> Self {
        Self {
            strike_price,
            ce: None,
            pe: None,
        }
    }

    /// Attach a call leg.
    pub fn with_ce(mut self, leg: OptionLeg) -> Self {
        self.ce = Some(leg);
        self
    }

    /// Attach a put leg.
    pub fn with_pe(mut self, leg: OptionLeg) -> Self {
        self.pe = Some(leg);
        self
    }

    /// Iterate over the legs that are present.
    pub fn legs(&self) -> impl Iterator<Item = &OptionLeg> {
        self.ce.iter().chain(self.pe.iter())
    }
}

// ---------------------------------------------------------------------------
// Chain Snapshot
// ---------------------------------------------------------------------------

/// All strikes of one (symbol, expiry) option chain at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChainSnapshot {
    pub symbol: String,
    pub expiry: String,
    /// Strike rows in the order the source returned them.
    pub strikes: Vec<StrikeRecord>,
    /// Spot value of the underlying, when reported.
    pub underlying_value: Option<f64>,
    /// Source timestamp, verbatim (e.g. `"17-Oct-2026 15:30:00"`).
    pub timestamp: Option<String>,
}

impl ChainSnapshot {
    /// Build a snapshot from already-typed strikes.
    pub fn new(
        symbol: impl Into<String>,
        expiry: impl Into<String>,
        strikes: Vec<StrikeRecord>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            expiry: expiry.into(),
            strikes,
            underlying_value: None,
            timestamp: None,
        }
    }

    /// Build a snapshot from the `records` object of an option chain payload.
    ///
    /// `records` must be a mapping whose `data` key holds a sequence of
    /// mappings. Anything else is [`NseError::InvalidSnapshot`], so a failed
    /// upstream fetch is never mistaken for an empty chain. Missing or `null`
    /// numeric fields inside the rows are accepted and read as zero.
    pub fn from_value(
        symbol: impl Into<String>,
        expiry: impl Into<String>,
        records: Value,
    ) -> Result<Self> {
        let Value::Object(mut records) = records else {
            return Err(NseError::InvalidSnapshot(
                "records is not a mapping".into(),
            ));
        };

        let rows = match records.remove("data") {
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                return Err(NseError::InvalidSnapshot(format!(
                    "`data` is not a sequence (found {})",
                    kind_of(&other)
                )));
            }
            None => return Err(NseError::InvalidSnapshot("missing `data`".into())),
        };

        let strikes = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                if !row.is_object() {
                    return Err(NseError::InvalidSnapshot(format!(
                        "row {i} is not a mapping (found {})",
                        kind_of(&row)
                    )));
                }
                serde_json::from_value::<StrikeRecord>(row)
                    .map_err(|e| NseError::InvalidSnapshot(format!("row {i}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let underlying_value = records
            .get("underlyingValue")
            .filter(|v| !v.is_null())
            .map(de::number_or_zero);
        let timestamp = records
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self {
            symbol: symbol.into(),
            expiry: expiry.into(),
            strikes,
            underlying_value,
            timestamp,
        })
    }

    /// Number of strikes.
    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    /// `true` if the chain has no strikes.
    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

// ---------------------------------------------------------------------------
// Derived results
// ---------------------------------------------------------------------------

/// A strike paired with its activity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredStrike {
    pub record: StrikeRecord,
    /// Weighted activity of both legs; never negative.
    pub activity_score: f64,
}

/// Open-interest totals across every strike of a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OpenInterestSummary {
    pub total_call_oi: f64,
    pub total_put_oi: f64,
    /// `total_put_oi / total_call_oi`, or `0.0` when there is no call OI.
    /// A zero ratio therefore does not imply zero put OI.
    pub put_call_ratio: f64,
}

// ---------------------------------------------------------------------------
// Contract Info Response
// ---------------------------------------------------------------------------

/// Response from `GET /api/option-chain-contract-info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfoResponse {
    /// Expiry dates, nearest first (e.g. `"27-Jan-2026"`).
    #[serde(default)]
    pub expiry_dates: Vec<String>,
}
