//! NSE endpoint implementations and the [`QuoteSource`] trait.
//!
//! Each sub-module adds high-level `async` methods to
//! [`NseClient`](crate::client::NseClient) via `impl` blocks. All methods
//! handle JSON decoding, HTTP transport, and error mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use nse_chain_bot::NseClient;
//! use nse_chain_bot::types::MarketReport;
//!
//! # #[tokio::main]
//! # async fn main() -> nse_chain_bot::Result<()> {
//! let client = NseClient::new();
//! let expiries = client.get_expiries("BANKNIFTY").await?;
//! let vix = client.get_report(MarketReport::IndiaVix).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`option_chain`] | 2 | Expiry list, option chain snapshot |
//! | [`reports`] | 6 | Most active, pre-open, FII/DII, deals, VIX, movers |
//! | [`source`] | — | `QuoteSource` trait implemented by `NseClient` |

pub mod option_chain;
pub mod reports;
pub mod source;

pub use source::QuoteSource;
