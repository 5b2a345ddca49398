//! Request and response types for the NSE data API and the derived results.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (instrument class, option side, reports)
//! - [`option_chain`] — Strike rows, CE/PE legs, chain snapshots, scored strikes
//! - [`reports`] — Most active, pre-open, FII/DII, deals, VIX and movers rows
//! - [`de`] — Lenient numeric deserializers applied at ingestion
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod de;
pub mod enums;
pub mod option_chain;
pub mod reports;

pub use enums::*;
