//! Integration tests against the live NSE India site.
//!
//! # Running
//!
//! These tests hit `https://www.nseindia.com` and depend on market hours
//! and NSE's bot protection, so they are opt-in:
//!
//! ```sh
//! NSE_LIVE=1 cargo test --test live -- --nocapture
//! ```
//!
//! Without `NSE_LIVE=1`, every test is silently skipped.
//!
//! # What is tested
//!
//! - **Expiries** — contract info for an index and a stock
//! - **Option chain** — snapshot decoding, ranking and aggregation
//! - **Market reports** — every report through `QuoteSource`
//! - **Error handling** — an unknown endpoint produces `NseError::HttpStatus`

use nse_chain_bot::analytics::{aggregate, rank};
use nse_chain_bot::api::QuoteSource;
use nse_chain_bot::client::NseClient;
use nse_chain_bot::error::NseError;
use nse_chain_bot::format::{option_chain_message, report_message};
use nse_chain_bot::types::{InstrumentClass, MarketReport};

/// Helper: create a live client or skip the test.
fn live_client() -> Option<NseClient> {
    let enabled = std::env::var("NSE_LIVE").ok()?;
    if enabled != "1" {
        return None;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Some(NseClient::new())
}

/// Macro to skip a test when live access is not enabled.
macro_rules! require_client {
    () => {
        match live_client() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (NSE_LIVE not set)");
                return;
            }
        }
    };
}

// ===================================================================
// Expiries
// ===================================================================

#[tokio::test]
async fn test_index_expiries() {
    let client = require_client!();
    let expiries = client
        .get_expiries("NIFTY")
        .await
        .expect("get_expiries failed");
    assert!(!expiries.is_empty(), "NIFTY should have expiries");
    println!("✔ NIFTY expiries: {:?}", &expiries[..expiries.len().min(5)]);
}

#[tokio::test]
async fn test_stock_expiries() {
    let client = require_client!();
    let expiries = client
        .expiries("reliance", InstrumentClass::Equity)
        .await
        .expect("expiries failed");
    println!("✔ RELIANCE expiries: {}", expiries.len());
}

// ===================================================================
// Option chain
// ===================================================================

#[tokio::test]
async fn test_option_chain_summary() {
    let client = require_client!();
    let expiries = client
        .get_expiries("BANKNIFTY")
        .await
        .expect("get_expiries failed");
    let Some(expiry) = expiries.first() else {
        eprintln!("⏭  No BANKNIFTY expiries listed");
        return;
    };

    let chain = client
        .get_option_chain("BANKNIFTY", expiry, InstrumentClass::Index)
        .await
        .expect("get_option_chain failed");
    let top = rank(&chain, 5);
    let oi = aggregate(&chain);

    assert!(top.len() <= 5);
    assert!(top.windows(2).all(|w| w[0].activity_score >= w[1].activity_score));
    assert!(oi.total_call_oi >= 0.0 && oi.total_put_oi >= 0.0);
    println!(
        "✔ BANKNIFTY {expiry}: {} strikes, PCR {:.2}",
        chain.len(),
        oi.put_call_ratio
    );
    println!("{}", option_chain_message(&chain));
}

// ===================================================================
// Market reports
// ===================================================================

#[tokio::test]
async fn test_market_reports() {
    let client = require_client!();
    for report in MarketReport::ALL {
        match client.market_report(report).await {
            Ok(table) => {
                assert_eq!(table.report(), report);
                println!("✔ {}:\n{}", report.key(), report_message(&table));
            }
            // Pre-open and deal snapshots are empty or absent outside sessions.
            Err(e) => println!("⚠ {}: {e}", report.key()),
        }
    }
}

// ===================================================================
// Error handling
// ===================================================================

#[tokio::test]
async fn test_unknown_endpoint() {
    let client = require_client!();
    let result: nse_chain_bot::Result<serde_json::Value> =
        client.get("/api/no-such-endpoint", &[]).await;
    match result {
        Err(NseError::HttpStatus { status, .. }) => {
            println!("✔ Unknown endpoint: HTTP {status}");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}
