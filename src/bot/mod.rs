//! Telegram conversation layer.
//!
//! - [`telegram`] — Bot API wire types, the `ChatTransport` trait and its
//!   `reqwest` client
//! - [`menu`] — callback actions, inline keyboards and fixed texts
//! - [`session`] — per-user conversation state with inactivity expiry
//! - [`handler`] — the [`Bot`] dispatcher and its polling loop

pub mod handler;
pub mod menu;
pub mod session;
pub mod telegram;

pub use handler::Bot;
pub use session::{ConversationState, Session, SessionStore};
pub use telegram::{ChatTransport, Reply, TelegramClient};
