//! Option Chain endpoints — expiry list, full chain snapshot.

use serde_json::Value;

use crate::client::NseClient;
use crate::constants::endpoints;
use crate::error::{NseError, Result};
use crate::types::InstrumentClass;
use crate::types::option_chain::*;

impl NseClient {
    /// Retrieve the active expiry dates for an underlying, nearest first.
    ///
    /// **Endpoint:** `GET /api/option-chain-contract-info?symbol=S`
    pub async fn get_expiries(&self, symbol: &str) -> Result<Vec<String>> {
        let symbol = normalize_symbol(symbol)?;
        let resp: ContractInfoResponse = self
            .get(endpoints::CONTRACT_INFO, &[("symbol", symbol.as_str())])
            .await?;
        if resp.expiry_dates.is_empty() {
            tracing::warn!(%symbol, "no expiry dates found");
        }
        Ok(resp.expiry_dates)
    }

    /// Retrieve the option chain of one underlying and expiry.
    ///
    /// Returns [`NseError::InvalidSnapshot`] when the payload carries no
    /// `records.data` sequence.
    ///
    /// **Endpoint:** `GET /api/option-chain-v3?type=T&symbol=S&expiry=E`
    pub async fn get_option_chain(
        &self,
        symbol: &str,
        expiry: &str,
        class: InstrumentClass,
    ) -> Result<ChainSnapshot> {
        let symbol = normalize_symbol(symbol)?;
        let mut payload: Value = self
            .get(
                endpoints::OPTION_CHAIN,
                &[
                    ("type", class.query_value()),
                    ("symbol", symbol.as_str()),
                    ("expiry", expiry),
                ],
            )
            .await?;

        let records = payload
            .get_mut("records")
            .map(Value::take)
            .ok_or_else(|| NseError::InvalidSnapshot("missing `records`".into()))?;
        let chain = ChainSnapshot::from_value(symbol, expiry, records)?;
        tracing::debug!(symbol = %chain.symbol, expiry, strikes = chain.len(), "option chain");
        Ok(chain)
    }
}

/// Trim and upper-case a user supplied symbol; reject empty input.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(NseError::InvalidArgument("symbol must not be empty".into()));
    }
    Ok(symbol)
}
