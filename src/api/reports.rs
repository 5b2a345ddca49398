//! Market report endpoints — most active, pre-open, FII/DII, deals, VIX,
//! gainers and losers.

use crate::analytics::movers;
use crate::client::NseClient;
use crate::constants::{FNO_UNIVERSE, PRE_OPEN_KEY, REPORT_ROW_LIMIT, VIX_INDEX_NAME, endpoints};
use crate::error::{NseError, Result};
use crate::types::MarketReport;
use crate::types::reports::*;

impl NseClient {
    /// Fetch any market report, trimmed and ordered for display.
    pub async fn get_report(&self, report: MarketReport) -> Result<ReportTable> {
        Ok(match report {
            MarketReport::MostActive => ReportTable::MostActive(self.get_most_active().await?),
            MarketReport::PreopenMovers => {
                ReportTable::PreopenMovers(self.get_preopen_movers().await?)
            }
            MarketReport::FiiDii => ReportTable::FiiDii(self.get_fii_dii().await?),
            MarketReport::BlockDeals => {
                let mut deals = self.get_large_deals().await?.block_deals;
                deals.truncate(REPORT_ROW_LIMIT);
                ReportTable::BlockDeals(deals)
            }
            MarketReport::BulkDeals => {
                let mut deals = self.get_large_deals().await?.bulk_deals;
                deals.truncate(REPORT_ROW_LIMIT);
                ReportTable::BulkDeals(deals)
            }
            MarketReport::IndiaVix => ReportTable::IndiaVix(self.get_india_vix().await?),
            MarketReport::TopGainers => {
                ReportTable::TopGainers(movers::top_gainers(self.get_fno_constituents().await?))
            }
            MarketReport::TopLosers => {
                ReportTable::TopLosers(movers::top_losers(self.get_fno_constituents().await?))
            }
        })
    }

    /// Top securities by traded value.
    ///
    /// **Endpoint:** `GET /api/live-analysis-most-active-securities?index=value`
    pub async fn get_most_active(&self) -> Result<Vec<MostActiveRow>> {
        let resp: MostActiveResponse = self
            .get(endpoints::MOST_ACTIVE, &[("index", "value")])
            .await?;
        let mut rows = resp.data;
        rows.truncate(REPORT_ROW_LIMIT);
        Ok(rows)
    }

    /// Largest indicative moves of the NIFTY pre-open session.
    ///
    /// **Endpoint:** `GET /api/market-data-pre-open?key=NIFTY`
    pub async fn get_preopen_movers(&self) -> Result<Vec<PreOpenRow>> {
        let resp: PreOpenResponse = self
            .get(endpoints::PRE_OPEN, &[("key", PRE_OPEN_KEY)])
            .await?;
        Ok(movers::preopen_movers(
            resp.data.into_iter().map(|e| e.metadata).collect(),
        ))
    }

    /// Provisional FII and DII cash market activity.
    ///
    /// **Endpoint:** `GET /api/fiidiiTradeReact`
    pub async fn get_fii_dii(&self) -> Result<Vec<FiiDiiRow>> {
        self.get(endpoints::FII_DII, &[]).await
    }

    /// Today's block and bulk deals.
    ///
    /// **Endpoint:** `GET /api/snapshot-capital-market-largedeal`
    pub async fn get_large_deals(&self) -> Result<LargeDealsResponse> {
        self.get(endpoints::LARGE_DEALS, &[]).await
    }

    /// Day quote of INDIA VIX.
    ///
    /// **Endpoint:** `GET /api/allIndices`
    pub async fn get_india_vix(&self) -> Result<IndexQuote> {
        let resp: AllIndicesResponse = self.get(endpoints::ALL_INDICES, &[]).await?;
        resp.data
            .into_iter()
            .find(|q| q.index.eq_ignore_ascii_case(VIX_INDEX_NAME))
            .ok_or_else(|| NseError::NotFound(format!("{VIX_INDEX_NAME} in allIndices")))
    }

    /// Every F&O security with its day change, unordered.
    ///
    /// **Endpoint:** `GET /api/equity-stockIndices?index=SECURITIES IN F&O`
    pub async fn get_fno_constituents(&self) -> Result<Vec<ConstituentRow>> {
        let resp: IndexConstituentsResponse = self
            .get(endpoints::INDEX_CONSTITUENTS, &[("index", FNO_UNIVERSE)])
            .await?;
        Ok(resp.data)
    }
}
