//! Pure computations over already-fetched market data.
//!
//! Nothing here performs I/O or fails: every function is total over its
//! input and safe to call concurrently on independent snapshots.
//!
//! - [`ranker`] — activity score per strike and top-N selection
//! - [`aggregate`] — call/put open interest totals and PCR
//! - [`movers`] — ordering of gainers, losers and pre-open movers

pub mod aggregate;
pub mod movers;
pub mod ranker;

pub use aggregate::aggregate;
pub use ranker::{ACTIVITY_WEIGHTS, activity_score, leg_score, rank};
