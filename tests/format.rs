//! Option chain summaries rendered as Telegram HTML.

use nse_chain_bot::format::{option_chain_message, strike_block};
use nse_chain_bot::types::option_chain::{ChainSnapshot, OptionLeg, ScoredStrike, StrikeRecord};

fn leg(oi: f64, volume: f64, ltp: f64, iv: f64) -> OptionLeg {
    OptionLeg {
        open_interest: oi,
        total_traded_volume: volume,
        last_price: ltp,
        implied_volatility: iv,
        ..OptionLeg::default()
    }
}

#[test]
fn test_empty_chain_message() {
    let chain = ChainSnapshot::new("RELIANCE", "30-Oct-2026", vec![]);
    assert_eq!(
        option_chain_message(&chain),
        "❌ No active strikes found for RELIANCE 30-Oct-2026"
    );
}

#[test]
fn test_chain_header_uses_index_display_name() {
    let chain = ChainSnapshot::new(
        "BANKNIFTY",
        "28-Oct-2026",
        vec![
            StrikeRecord::new(56_000.0).with_ce(leg(1000.0, 10.0, 310.5, 14.2)),
            StrikeRecord::new(56_500.0).with_pe(leg(2000.0, 10.0, 95.25, 15.0)),
        ],
    );
    let text = option_chain_message(&chain);

    assert!(text.starts_with("<b>🎯 Bank Nifty</b> | Expiry: <b>28-Oct-2026</b>\n"));
    assert!(text.contains("PCR: <code>2.00</code>"));
    assert!(text.contains("Total CE OI: <code>1000.00</code>"));
    assert!(text.contains("Total PE OI: <code>2000.00</code>"));
    assert!(text.contains(&"=".repeat(50)));
    assert!(text.contains("<b>Top 5 Most Active Strikes:</b>"));

    // Higher activity first.
    let first = text.find("Strike: 56500.00").unwrap();
    let second = text.find("Strike: 56000.00").unwrap();
    assert!(first < second);
}

#[test]
fn test_chain_shows_at_most_five_strikes() {
    let strikes = (0..12)
        .map(|i| StrikeRecord::new(100.0 * i as f64).with_ce(leg(i as f64, 0.0, 1.0, 1.0)))
        .collect();
    let text = option_chain_message(&ChainSnapshot::new("INFY", "30-Oct-2026", strikes));
    assert_eq!(text.matches("<b>Strike: ").count(), 5);
    assert!(text.starts_with("<b>🎯 INFY</b>"));
}

#[test]
fn test_strike_block_with_missing_leg() {
    let scored = ScoredStrike {
        record: StrikeRecord::new(24_950.0).with_ce(leg(1500.0, 200.0, 88.4, 12.5)),
        activity_score: 810.0,
    };
    assert_eq!(
        strike_block(&scored),
        "\n<b>Strike: 24950.00</b>\n\
         📈 <b>CE:</b> LTP <code>88.40</code> | OI <code>1500.00</code> | IV <code>12.50%</code>\n\
         📉 PE: No data\n"
    );
}

#[test]
fn test_symbol_is_escaped() {
    let chain = ChainSnapshot::new("M&M", "30-Oct-2026", vec![]);
    assert!(option_chain_message(&chain).contains("M&amp;M"));
}
