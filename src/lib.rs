//! # nse-chain-bot
//!
//! A Telegram bot for browsing NSE India option chains and market reports.
//!
//! The core is two pure computations over an option chain snapshot:
//! [`analytics::rank`] picks the most active strikes by a weighted score of
//! open interest, volume and book quantity, and [`analytics::aggregate`]
//! totals call/put open interest into a put/call ratio. Around them sit an
//! NSE HTTP client, Telegram-HTML rendering and the conversation layer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nse_chain_bot::analytics::{aggregate, rank};
//! use nse_chain_bot::client::NseClient;
//! use nse_chain_bot::types::InstrumentClass;
//!
//! #[tokio::main]
//! async fn main() -> nse_chain_bot::error::Result<()> {
//!     let client = NseClient::new();
//!     let expiries = client.get_expiries("NIFTY").await?;
//!     let chain = client
//!         .get_option_chain("NIFTY", &expiries[0], InstrumentClass::Index)
//!         .await?;
//!     let top = rank(&chain, 5);
//!     let oi = aggregate(&chain);
//!     println!("PCR {:.2}, most active strike {:?}", oi.put_call_ratio, top.first());
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod bot;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::NseClient;
/// Re-export the error type and Result alias.
pub use error::{NseError, Result};
