//! Activity ranking of option-chain strikes.
//!
//! Each leg is scored as a weighted sum of open interest, traded volume and
//! resting order-book quantity; a strike's score is the sum over its legs.

use crate::types::option_chain::{ChainSnapshot, OptionLeg, ScoredStrike, StrikeRecord};

/// Weights applied to the inputs of a leg's activity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityWeights {
    pub open_interest: f64,
    pub traded_volume: f64,
    /// Applied to `total_buy_quantity + total_sell_quantity`.
    pub order_quantity: f64,
}

/// Open interest dominates, then volume, then book quantity.
pub const ACTIVITY_WEIGHTS: ActivityWeights = ActivityWeights {
    open_interest: 0.5,
    traded_volume: 0.3,
    order_quantity: 0.2,
};

/// Activity score of one leg.
pub fn leg_score(leg: &OptionLeg) -> f64 {
    let w = ACTIVITY_WEIGHTS;
    leg.open_interest * w.open_interest
        + leg.total_traded_volume * w.traded_volume
        + (leg.total_buy_quantity + leg.total_sell_quantity) * w.order_quantity
}

/// Activity score of a strike: the sum of its present legs, `0.0` if none.
pub fn activity_score(record: &StrikeRecord) -> f64 {
    record.legs().map(leg_score).sum()
}

/// The `top_n` most active strikes of `chain`, most active first.
///
/// Equal scores are ordered by ascending strike price, then by position in
/// the snapshot. Returns `min(top_n, chain.len())` entries.
pub fn rank(chain: &ChainSnapshot, top_n: usize) -> Vec<ScoredStrike> {
    let mut scored: Vec<(f64, &StrikeRecord)> = chain
        .strikes
        .iter()
        .map(|record| (activity_score(record), record))
        .collect();

    // `sort_by` is stable, which keeps snapshot order for identical strikes.
    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .total_cmp(score_a)
            .then_with(|| a.strike_price.total_cmp(&b.strike_price))
    });

    scored
        .into_iter()
        .take(top_n)
        .map(|(activity_score, record)| ScoredStrike {
            record: record.clone(),
            activity_score,
        })
        .collect()
}

