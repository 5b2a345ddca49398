//! Chain-wide open interest totals and the put/call ratio.

use std::ops::Add;

use crate::types::option_chain::{ChainSnapshot, OpenInterestSummary};

impl OpenInterestSummary {
    /// Summary for the given totals; the ratio is `0.0` without call OI.
    pub fn from_totals(total_call_oi: f64, total_put_oi: f64) -> Self {
        let put_call_ratio = if total_call_oi != 0.0 {
            total_put_oi / total_call_oi
        } else {
            0.0
        };
        Self {
            total_call_oi,
            total_put_oi,
            put_call_ratio,
        }
    }
}

/// Component-wise totals; the ratio is recomputed from the new totals.
impl Add for OpenInterestSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_totals(
            self.total_call_oi + rhs.total_call_oi,
            self.total_put_oi + rhs.total_put_oi,
        )
    }
}

/// Total call and put open interest of `chain` and their ratio.
pub fn aggregate(chain: &ChainSnapshot) -> OpenInterestSummary {
    let (calls, puts) = chain
        .strikes
        .iter()
        .fold((0.0, 0.0), |(calls, puts), record| {
            (
                calls + record.ce.as_ref().map_or(0.0, |leg| leg.open_interest),
                puts + record.pe.as_ref().map_or(0.0, |leg| leg.open_interest),
            )
        });
    OpenInterestSummary::from_totals(calls, puts)
}
