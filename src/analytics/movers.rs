//! Ordering and trimming of market report rows.

use crate::constants::{FNO_UNIVERSE, REPORT_ROW_LIMIT};
use crate::types::reports::{ConstituentRow, PreOpenRow};

/// Advancing constituents, largest percent gain first.
pub fn top_gainers(rows: Vec<ConstituentRow>) -> Vec<ConstituentRow> {
    let mut rows: Vec<_> = constituents(rows).filter(|r| r.p_change > 0.0).collect();
    rows.sort_by(|a, b| b.p_change.total_cmp(&a.p_change));
    rows.truncate(REPORT_ROW_LIMIT);
    rows
}

/// Declining constituents, largest percent loss first.
pub fn top_losers(rows: Vec<ConstituentRow>) -> Vec<ConstituentRow> {
    let mut rows: Vec<_> = constituents(rows).filter(|r| r.p_change < 0.0).collect();
    rows.sort_by(|a, b| a.p_change.total_cmp(&b.p_change));
    rows.truncate(REPORT_ROW_LIMIT);
    rows
}

/// Pre-open rows with the largest absolute move first.
pub fn preopen_movers(mut rows: Vec<PreOpenRow>) -> Vec<PreOpenRow> {
    rows.sort_by(|a, b| b.p_change.abs().total_cmp(&a.p_change.abs()));
    rows.truncate(REPORT_ROW_LIMIT);
    rows
}

// The constituents payload leads with a row for the index itself.
fn constituents(rows: Vec<ConstituentRow>) -> impl Iterator<Item = ConstituentRow> {
    rows.into_iter().filter(|r| r.symbol != FNO_UNIVERSE)
}
