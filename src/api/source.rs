//! The [`QuoteSource`] seam between the bot and the market data provider.

use std::future::Future;

use crate::client::NseClient;
use crate::error::Result;
use crate::types::option_chain::ChainSnapshot;
use crate::types::reports::ReportTable;
use crate::types::{InstrumentClass, MarketReport};

/// Anything that can supply expiries, option chains and market reports.
///
/// [`NseClient`] is the production implementation; tests substitute an
/// in-memory source.
pub trait QuoteSource {
    /// Active expiries for `symbol`, nearest first.
    fn expiries(
        &self,
        symbol: &str,
        class: InstrumentClass,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Option chain snapshot for `symbol` at `expiry`.
    fn option_chain(
        &self,
        symbol: &str,
        expiry: &str,
        class: InstrumentClass,
    ) -> impl Future<Output = Result<ChainSnapshot>> + Send;

    /// A market report ready for rendering.
    fn market_report(
        &self,
        report: MarketReport,
    ) -> impl Future<Output = Result<ReportTable>> + Send;
}

impl QuoteSource for NseClient {
    // Contract info is keyed by symbol only; the class does not change it.
    async fn expiries(&self, symbol: &str, _class: InstrumentClass) -> Result<Vec<String>> {
        self.get_expiries(symbol).await
    }

    async fn option_chain(
        &self,
        symbol: &str,
        expiry: &str,
        class: InstrumentClass,
    ) -> Result<ChainSnapshot> {
        self.get_option_chain(symbol, expiry, class).await
    }

    async fn market_report(&self, report: MarketReport) -> Result<ReportTable> {
        self.get_report(report).await
    }
}
