//! Market report payload decoding, ordering and rendering.

use nse_chain_bot::analytics::movers::{preopen_movers, top_gainers, top_losers};
use nse_chain_bot::format::{escape_html, report_message};
use nse_chain_bot::types::MarketReport;
use nse_chain_bot::types::reports::*;
use serde_json::json;

fn constituent(symbol: &str, p_change: f64) -> ConstituentRow {
    ConstituentRow {
        symbol: symbol.into(),
        last_price: 100.0,
        p_change,
        total_traded_volume: 1_000.0,
    }
}

fn preopen(symbol: &str, p_change: f64) -> PreOpenRow {
    PreOpenRow {
        symbol: symbol.into(),
        previous_close: 100.0,
        last_price: 100.0 + p_change,
        p_change,
    }
}

fn symbols<'a>(rows: impl IntoIterator<Item = &'a ConstituentRow>) -> Vec<&'a str> {
    rows.into_iter().map(|r| r.symbol.as_str()).collect()
}

// ===================================================================
// Keys
// ===================================================================

#[test]
fn test_report_keys_roundtrip() {
    for report in MarketReport::ALL {
        assert_eq!(MarketReport::from_key(report.key()), Some(report));
    }
    assert_eq!(MarketReport::from_key("nope"), None);
}

// ===================================================================
// Decoding
// ===================================================================

#[test]
fn test_decode_most_active() {
    let resp: MostActiveResponse = serde_json::from_value(json!({
        "data": [
            { "symbol": "HDFCBANK", "lastPrice": 1720.4, "totalTradedValue": "2,345.67", "quantityTraded": 1_234_567 },
            { "symbol": "RELIANCE", "lastPrice": null }
        ]
    }))
    .unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].total_traded_value, 2345.67);
    assert_eq!(resp.data[0].quantity_traded, 1_234_567.0);
    assert_eq!(resp.data[1].last_price, 0.0);
}

#[test]
fn test_decode_preopen() {
    let resp: PreOpenResponse = serde_json::from_value(json!({
        "declines": 20,
        "data": [{
            "metadata": { "symbol": "TCS", "previousClose": 3900, "lastPrice": 3951.5, "pChange": "1.32" },
            "detail": {}
        }]
    }))
    .unwrap();
    let row = &resp.data[0].metadata;
    assert_eq!(row.symbol, "TCS");
    assert_eq!(row.p_change, 1.32);
}

#[test]
fn test_decode_fii_dii_keeps_strings() {
    let rows: Vec<FiiDiiRow> = serde_json::from_value(json!([
        { "category": "DII **", "date": "16-Oct-2026", "buyValue": "12345.67", "sellValue": "11000.00", "netValue": "1345.67" },
        { "category": "FII/FPI *", "date": "16-Oct-2026", "buyValue": 9000.5, "sellValue": null, "netValue": "-50.25" }
    ]))
    .unwrap();
    assert_eq!(rows[0].net_value, "1345.67");
    assert_eq!(rows[1].buy_value, "9000.5");
    assert_eq!(rows[1].sell_value, "");
}

#[test]
fn test_decode_large_deals() {
    let resp: LargeDealsResponse = serde_json::from_value(json!({
        "as_on_date": "16-Oct-2026",
        "BULK_DEALS_DATA": [
            { "date": "16-Oct-2026", "symbol": "XYZ", "clientName": "ALPHA FUND", "buySell": "BUY", "qty": "250000", "watp": "12.35" },
            { "date": "16-Oct-2026", "symbol": "XYZ", "clientName": "BETA LLP", "buySell": "SELL", "qty": 250000, "watp": 12.4 }
        ],
        "BLOCK_DEALS_DATA": []
    }))
    .unwrap();
    assert!(resp.block_deals.is_empty());
    assert_eq!(resp.bulk_deals.len(), 2);
    assert_eq!(resp.bulk_deals[0].qty, 250_000.0);
    assert_eq!(resp.bulk_deals[0].side(), DealSide::Buy);
    assert_eq!(resp.bulk_deals[1].side(), DealSide::Sell);
}

#[test]
fn test_deal_side_unknown() {
    let row: DealRow = serde_json::from_value(json!({ "symbol": "ABC", "buySell": null })).unwrap();
    assert_eq!(row.side(), DealSide::Unknown);
}

#[test]
fn test_decode_all_indices() {
    let resp: AllIndicesResponse = serde_json::from_value(json!({
        "data": [
            { "index": "NIFTY 50", "last": 25_000.1 },
            { "index": "INDIA VIX", "last": 12.34, "variation": -0.4, "percentChange": -3.14,
              "open": 12.9, "high": 13.1, "low": 12.2, "previousClose": 12.74 }
        ]
    }))
    .unwrap();
    let vix = resp.data.iter().find(|q| q.index == "INDIA VIX").unwrap();
    assert_eq!(vix.last, 12.34);
    assert_eq!(vix.percent_change, -3.14);
    assert_eq!(vix.previous_close, 12.74);
}

// ===================================================================
// Ordering
// ===================================================================

#[test]
fn test_top_gainers_order_and_filter() {
    let rows = vec![
        constituent("SECURITIES IN F&O", 0.8),
        constituent("AAA", 1.5),
        constituent("BBB", -2.0),
        constituent("CCC", 4.2),
        constituent("DDD", 0.0),
    ];
    let gainers = top_gainers(rows);
    assert_eq!(symbols(&gainers), vec!["CCC", "AAA"]);
}

#[test]
fn test_top_losers_order_and_filter() {
    let rows = vec![
        constituent("AAA", 1.5),
        constituent("BBB", -2.0),
        constituent("CCC", -0.3),
        constituent("DDD", -7.1),
    ];
    let losers = top_losers(rows);
    assert_eq!(symbols(&losers), vec!["DDD", "BBB", "CCC"]);
}

#[test]
fn test_movers_limited_to_ten_rows() {
    let rows: Vec<_> = (1..=25)
        .map(|i| constituent(&format!("S{i:02}"), i as f64))
        .collect();
    let gainers = top_gainers(rows);
    assert_eq!(gainers.len(), 10);
    assert_eq!(gainers[0].symbol, "S25");
    assert_eq!(gainers[9].symbol, "S16");
}

#[test]
fn test_preopen_movers_by_absolute_change() {
    let movers = preopen_movers(vec![
        preopen("UP", 2.0),
        preopen("DOWN", -5.0),
        preopen("FLAT", 0.1),
    ]);
    let order: Vec<_> = movers.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, vec!["DOWN", "UP", "FLAT"]);
}

// ===================================================================
// Rendering
// ===================================================================

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("M&M <b>"), "M&amp;M &lt;b&gt;");
    assert_eq!(escape_html("NIFTY"), "NIFTY");
}

#[test]
fn test_empty_report_says_no_data() {
    let text = report_message(&ReportTable::MostActive(vec![]));
    assert!(text.starts_with("🔥 <b>Most Active (By Value)</b>"));
    assert!(text.ends_with("No data available right now."));
}

#[test]
fn test_render_movers() {
    let text = report_message(&ReportTable::TopLosers(vec![constituent("M&M", -3.256)]));
    assert!(text.starts_with("📉 <b>Top Losers</b>"));
    assert!(text.contains("1 <b>M&amp;M</b>"));
    assert!(text.contains("Chg <code>-3.26%</code>"));
}

#[test]
fn test_render_bulk_deals_marks_side() {
    let buy = DealRow {
        date: "16-Oct-2026".into(),
        symbol: "XYZ".into(),
        client_name: "ALPHA FUND".into(),
        buy_sell: "BUY".into(),
        qty: 1000.0,
        watp: 12.5,
    };
    let sell = DealRow {
        client_name: "BETA <LLP>".into(),
        buy_sell: "SELL".into(),
        ..buy.clone()
    };
    let text = report_message(&ReportTable::BulkDeals(vec![buy, sell]));
    assert!(text.starts_with("📊 <b>Recent Bulk Deals</b>"));
    assert!(text.contains("🟢 BUYER: ALPHA FUND"));
    assert!(text.contains("🔴 SELLER: BETA &lt;LLP&gt;"));
    assert!(text.contains("Qty <code>1000.00</code> | Price <code>12.50</code>"));
}

#[test]
fn test_render_fii_dii_header_has_date() {
    let row = FiiDiiRow {
        category: "FII/FPI *".into(),
        date: "16-Oct-2026".into(),
        buy_value: "9000.50".into(),
        sell_value: "9050.75".into(),
        net_value: "-50.25".into(),
    };
    let text = report_message(&ReportTable::FiiDii(vec![row]));
    assert!(text.starts_with("🏦 <b>FII / DII Activity</b> (16-Oct-2026)"));
    assert!(text.contains("Net <code>-50.25</code>"));
}

#[test]
fn test_render_india_vix() {
    let quote = IndexQuote {
        index: "INDIA VIX".into(),
        last: 12.34,
        variation: -0.4,
        percent_change: -3.14,
        open: 12.9,
        high: 13.1,
        low: 12.2,
        previous_close: 12.74,
    };
    let table = ReportTable::IndiaVix(quote);
    assert_eq!(table.report(), MarketReport::IndiaVix);
    let text = report_message(&table);
    assert!(text.starts_with("⚡ <b>India VIX</b>"));
    assert!(text.contains("LTP: <code>12.34</code>"));
    assert!(text.contains("(<code>-3.14%</code>)"));
}
