//! Rendering of option chain summaries and market reports as Telegram HTML.
//!
//! Every string that originates upstream (symbols, client names, NSE
//! categories) goes through [`escape_html`] before it is embedded.

use std::fmt::Write;

use crate::analytics::{aggregate, rank};
use crate::constants::{TOP_STRIKES, display_name};
use crate::types::OptionSide;
use crate::types::option_chain::{ChainSnapshot, OptionLeg, ScoredStrike};
use crate::types::reports::*;

/// Escape the three characters Telegram's HTML parse mode reserves.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Option chain
// ---------------------------------------------------------------------------

/// Summary of a chain: PCR, total OI and the most active strikes.
pub fn option_chain_message(chain: &ChainSnapshot) -> String {
    let top = rank(chain, TOP_STRIKES);
    if top.is_empty() {
        return format!(
            "❌ No active strikes found for {} {}",
            escape_html(&chain.symbol),
            escape_html(&chain.expiry)
        );
    }

    let oi = aggregate(chain);
    let mut message = format!(
        "<b>🎯 {}</b> | Expiry: <b>{}</b>\n\
         PCR: <code>{:.2}</code> | \
         Total CE OI: <code>{:.2}</code> | \
         Total PE OI: <code>{:.2}</code>\n\
         {}\n\
         <b>Top {} Most Active Strikes:</b>\n",
        escape_html(display_name(&chain.symbol)),
        escape_html(&chain.expiry),
        oi.put_call_ratio,
        oi.total_call_oi,
        oi.total_put_oi,
        "=".repeat(50),
        TOP_STRIKES,
    );
    for strike in &top {
        message.push_str(&strike_block(strike));
    }
    message
}

/// One strike: its price followed by a CE line and a PE line.
pub fn strike_block(strike: &ScoredStrike) -> String {
    let record = &strike.record;
    let mut out = format!("\n<b>Strike: {:.2}</b>\n", record.strike_price);
    out.push_str(&leg_line(OptionSide::Call, record.ce.as_ref()));
    out.push_str(&leg_line(OptionSide::Put, record.pe.as_ref()));
    out
}

fn leg_line(side: OptionSide, leg: Option<&OptionLeg>) -> String {
    let icon = match side {
        OptionSide::Call => "📈",
        OptionSide::Put => "📉",
    };
    match leg {
        Some(leg) => format!(
            "{icon} <b>{side}:</b> LTP <code>{:.2}</code> | OI <code>{:.2}</code> | IV <code>{:.2}%</code>\n",
            leg.last_price, leg.open_interest, leg.implied_volatility
        ),
        None => format!("{icon} {side}: No data\n"),
    }
}

// ---------------------------------------------------------------------------
// Market reports
// ---------------------------------------------------------------------------

/// Render any market report.
pub fn report_message(table: &ReportTable) -> String {
    match table {
        ReportTable::MostActive(rows) => most_active(rows),
        ReportTable::PreopenMovers(rows) => preopen_movers(rows),
        ReportTable::FiiDii(rows) => fii_dii(rows),
        ReportTable::BlockDeals(rows) => deals("📦 <b>Recent Block Deals</b>", rows),
        ReportTable::BulkDeals(rows) => deals("📊 <b>Recent Bulk Deals</b>", rows),
        ReportTable::IndiaVix(quote) => india_vix(quote),
        ReportTable::TopGainers(rows) => movers("📈 <b>Top Gainers</b>", rows),
        ReportTable::TopLosers(rows) => movers("📉 <b>Top Losers</b>", rows),
    }
}

fn with_header(header: &str, lines: Vec<String>) -> String {
    if lines.is_empty() {
        return format!("{header}\n\nNo data available right now.");
    }
    let mut out = format!("{header}\n");
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

fn most_active(rows: &[MostActiveRow]) -> String {
    let lines = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{} <b>{}</b> | LTP <code>{:.2}</code> | Turnover <code>{:.2}</code> | Vol <code>{:.2}</code>",
                i + 1,
                escape_html(&r.symbol),
                r.last_price,
                r.total_traded_value,
                r.quantity_traded
            )
        })
        .collect();
    with_header("🔥 <b>Most Active (By Value)</b>", lines)
}

fn preopen_movers(rows: &[PreOpenRow]) -> String {
    let lines = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{} <b>{}</b> | Prev <code>{:.2}</code> | Open <code>{:.2}</code> | Chg <code>{:.2}%</code>",
                i + 1,
                escape_html(&r.symbol),
                r.previous_close,
                r.last_price,
                r.p_change
            )
        })
        .collect();
    with_header("🕒 <b>Preopen Movers</b>", lines)
}

fn fii_dii(rows: &[FiiDiiRow]) -> String {
    let mut header = String::from("🏦 <b>FII / DII Activity</b>");
    if let Some(date) = rows.first().map(|r| r.date.as_str()).filter(|d| !d.is_empty()) {
        let _ = write!(header, " ({})", escape_html(date));
    }
    let lines = rows
        .iter()
        .map(|r| {
            format!(
                "<b>{}</b> | Buy <code>{}</code> | Sell <code>{}</code> | Net <code>{}</code>",
                escape_html(&r.category),
                escape_html(&r.buy_value),
                escape_html(&r.sell_value),
                escape_html(&r.net_value)
            )
        })
        .collect();
    with_header(&header, lines)
}

fn deals(header: &str, rows: &[DealRow]) -> String {
    let lines = rows
        .iter()
        .map(|r| {
            let client = escape_html(&r.client_name);
            let party = match r.side() {
                DealSide::Buy => format!("🟢 BUYER: {client}"),
                DealSide::Sell => format!("🔴 SELLER: {client}"),
                DealSide::Unknown => format!("👤 Client: {client}"),
            };
            format!(
                "<b>{}</b> | Qty <code>{:.2}</code> | Price <code>{:.2}</code>\n   {party}",
                escape_html(&r.symbol),
                r.qty,
                r.watp
            )
        })
        .collect();
    with_header(header, lines)
}

fn india_vix(q: &IndexQuote) -> String {
    format!(
        "⚡ <b>India VIX</b>\n\n\
         LTP: <code>{:.2}</code> | Chg <code>{:.2}</code> (<code>{:.2}%</code>)\n\
         Open <code>{:.2}</code> | High <code>{:.2}</code> | Low <code>{:.2}</code> | Prev <code>{:.2}</code>",
        q.last, q.variation, q.percent_change, q.open, q.high, q.low, q.previous_close
    )
}

fn movers(header: &str, rows: &[ConstituentRow]) -> String {
    let lines = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{} <b>{}</b> | LTP <code>{:.2}</code> | Chg <code>{:.2}%</code> | Vol <code>{:.2}</code>",
                i + 1,
                escape_html(&r.symbol),
                r.last_price,
                r.p_change,
                r.total_traded_volume
            )
        })
        .collect();
    with_header(header, lines)
}
