//! Update dispatch: turns Telegram updates into menu navigation, data
//! fetches and rendered replies.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::api::QuoteSource;
use crate::bot::menu::{self, Action};
use crate::bot::session::{ConversationState, SessionStore};
use crate::bot::telegram::{CallbackQuery, ChatTransport, Message, Reply, TelegramClient, Update};
use crate::constants::SYMBOL_LEN;
use crate::error::Result;
use crate::format;
use crate::types::{InstrumentClass, MarketReport};

/// `true` if `symbol` looks like an NSE stock symbol (`M&M`, `BAJAJ-AUTO`).
pub fn is_valid_stock_symbol(symbol: &str) -> bool {
    SYMBOL_LEN.contains(&symbol.len())
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '&' || c == '-')
}

/// Where a callback's reply goes: the message that carried the keyboard.
#[derive(Debug, Clone, Copy)]
struct Target {
    chat_id: i64,
    message_id: i64,
}

/// The conversational front-end.
///
/// Generic over where quotes come from and where replies go so the whole
/// flow can be driven in memory.
#[derive(Debug)]
pub struct Bot<S, T> {
    source: S,
    transport: T,
    sessions: SessionStore,
}

impl<S: QuoteSource, T: ChatTransport> Bot<S, T> {
    pub fn new(source: S, transport: T, sessions: SessionStore) -> Self {
        Self {
            source,
            transport,
            sessions,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionStore {
        &mut self.sessions
    }

    /// Handle one update at the current time.
    pub async fn handle_update(&mut self, update: Update) -> Result<()> {
        self.handle_update_at(update, Utc::now()).await
    }

    /// Handle one update as if received at `now`.
    pub async fn handle_update_at(&mut self, update: Update, now: DateTime<Utc>) -> Result<()> {
        if let Some(query) = update.callback_query {
            self.on_callback(query, now).await
        } else if let Some(message) = update.message {
            self.on_message(message, now).await
        } else {
            Ok(())
        }
    }

    // -----------------------------------------------------------------------
    // Text messages
    // -----------------------------------------------------------------------

    async fn on_message(&mut self, message: Message, now: DateTime<Utc>) -> Result<()> {
        let Some(text) = message.text else {
            return Ok(());
        };
        let chat_id = message.chat.id;
        let user = message.from.map_or(chat_id, |u| u.id);
        let text = text.trim();

        if let Some(command) = text.strip_prefix('/') {
            // `/start@SomeBot args` → `start`
            let command = command
                .split_whitespace()
                .next()
                .and_then(|c| c.split('@').next())
                .unwrap_or_default();
            return match command {
                "start" => self.start(chat_id, user, now).await,
                "cancel" => {
                    self.sessions.clear(user);
                    self.reply(chat_id, Reply::text(menu::CANCELLED_TEXT)).await
                }
                _ => self.reply(chat_id, Reply::text(menu::START_HINT_TEXT)).await,
            };
        }

        // A stock user looking at the expiry menu may retype the symbol.
        let awaiting_symbol = self
            .sessions
            .get_mut(user, now)
            .is_some_and(|s| match s.state {
                ConversationState::ChoosingStock => true,
                ConversationState::ChoosingExpiry => {
                    s.instrument_class == Some(InstrumentClass::Equity)
                }
                _ => false,
            });
        if awaiting_symbol {
            self.on_stock_symbol(chat_id, user, text, now).await
        } else {
            self.reply(chat_id, Reply::text(menu::START_HINT_TEXT)).await
        }
    }

    async fn start(&mut self, chat_id: i64, user: i64, now: DateTime<Utc>) -> Result<()> {
        self.sessions.start(user, now);
        tracing::info!(user, "session started");
        self.reply(
            chat_id,
            Reply::text(menu::WELCOME_TEXT).with_keyboard(menu::main_menu()),
        )
        .await
    }

    async fn on_stock_symbol(
        &mut self,
        chat_id: i64,
        user: i64,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let symbol = text.to_ascii_uppercase();
        if !is_valid_stock_symbol(&symbol) {
            return self.reply(chat_id, Reply::text(menu::INVALID_SYMBOL_TEXT)).await;
        }

        if let Some(session) = self.sessions.get_mut(user, now) {
            session.instrument_class = Some(InstrumentClass::Equity);
            session.symbol = Some(symbol.clone());
        }
        self.reply(chat_id, Reply::text(menu::FETCHING_EXPIRIES_TEXT)).await?;

        let expiries = self.fetch_expiries(&symbol, InstrumentClass::Equity).await;
        match expiries {
            Some(expiries) => {
                self.set_state(user, now, ConversationState::ChoosingExpiry);
                self.reply(
                    chat_id,
                    Reply::text(menu::expiry_prompt(&symbol))
                        .with_keyboard(menu::expiry_menu(&expiries)),
                )
                .await
            }
            None => {
                let text = format!(
                    "❌ Could not fetch expiries for {symbol}. \
                     Please check the symbol and try again."
                );
                self.reply(chat_id, Reply::text(text)).await
            }
        }
    }

    // -----------------------------------------------------------------------
    // Button presses
    // -----------------------------------------------------------------------

    async fn on_callback(&mut self, query: CallbackQuery, now: DateTime<Utc>) -> Result<()> {
        let user = query.from.id;
        let action = query.data.as_deref().and_then(Action::parse);

        let toast = match &action {
            Some(Action::Restart) => Some("🔄 Restarting..."),
            None => Some(menu::UNKNOWN_SELECTION_TEXT),
            Some(_) => None,
        };
        self.transport.answer_callback(&query.id, toast).await?;

        let (Some(action), Some(message)) = (action, query.message) else {
            tracing::debug!(user, data = ?query.data, "ignoring callback");
            return Ok(());
        };
        let target = Target {
            chat_id: message.chat.id,
            message_id: message.message_id,
        };
        tracing::debug!(user, ?action, "callback");

        match action {
            Action::Restart => {
                self.sessions.start(user, now);
                self.edit(
                    target,
                    Reply::text(menu::RESTARTED_TEXT).with_keyboard(menu::main_menu()),
                )
                .await
            }
            Action::BackToStart => self.start(target.chat_id, user, now).await,
            Action::OptionChainMenu => {
                self.sessions.get_or_start(user, now).state = ConversationState::ChoosingType;
                self.edit(
                    target,
                    Reply::text(menu::OPTION_TYPE_TEXT).with_keyboard(menu::option_type_menu()),
                )
                .await
            }
            Action::IndexOptions => {
                let session = self.sessions.get_or_start(user, now);
                session.instrument_class = Some(InstrumentClass::Index);
                session.state = ConversationState::ChoosingIndex;
                self.edit(
                    target,
                    Reply::text(menu::INDEX_TEXT).with_keyboard(menu::index_menu()),
                )
                .await
            }
            Action::StockOptions => {
                let session = self.sessions.get_or_start(user, now);
                session.instrument_class = Some(InstrumentClass::Equity);
                session.state = ConversationState::ChoosingStock;
                self.edit(target, Reply::text(menu::STOCK_PROMPT_TEXT)).await
            }
            Action::SelectIndex(symbol) => self.on_index(target, user, symbol, now).await,
            Action::SelectExpiry(expiry) => self.on_expiry(target, user, expiry, now).await,
            Action::MarketMenu => {
                if let Some(session) = self.sessions.get_mut(user, now) {
                    session.state = ConversationState::ChoosingType;
                }
                self.edit(
                    target,
                    Reply::text(menu::MARKET_TEXT).with_keyboard(menu::market_menu()),
                )
                .await
            }
            Action::Report(report) => self.on_report(target, report).await,
        }
    }

    async fn on_index(
        &mut self,
        target: Target,
        user: i64,
        symbol: String,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let session = self.sessions.get_or_start(user, now);
        session.instrument_class = Some(InstrumentClass::Index);
        session.symbol = Some(symbol.clone());
        session.state = ConversationState::ChoosingIndex;

        self.edit(target, Reply::text(menu::FETCHING_EXPIRIES_TEXT)).await?;

        let expiries = self.fetch_expiries(&symbol, InstrumentClass::Index).await;
        match expiries {
            Some(expiries) => {
                self.set_state(user, now, ConversationState::ChoosingExpiry);
                self.edit(
                    target,
                    Reply::text(menu::expiry_prompt(&symbol))
                        .with_keyboard(menu::expiry_menu(&expiries)),
                )
                .await
            }
            None => {
                let text = format!("❌ Could not fetch expiries for {symbol}. Please try again.");
                self.edit(target, Reply::text(text).with_keyboard(menu::index_menu()))
                    .await
            }
        }
    }

    async fn on_expiry(
        &mut self,
        target: Target,
        user: i64,
        expiry: String,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let selection = self
            .sessions
            .get_mut(user, now)
            .and_then(|s| Some((s.symbol.clone()?, s.instrument_class?)));
        let Some((symbol, class)) = selection else {
            return self.edit(target, Reply::text(menu::SESSION_EXPIRED_TEXT)).await;
        };

        self.edit(target, Reply::text(menu::FETCHING_CHAIN_TEXT)).await?;

        let fetched = self.source.option_chain(&symbol, &expiry, class).await;
        let reply = match fetched {
            Ok(chain) => {
                tracing::info!(%symbol, %expiry, strikes = chain.len(), "option chain served");
                self.set_state(user, now, ConversationState::ShowChain);
                Reply::html(format::option_chain_message(&chain))
            }
            Err(e) => {
                tracing::error!(%symbol, %expiry, error = %e, "error fetching option chain");
                Reply::text(format!("❌ Error fetching option chain: {e}\n\nPlease try again."))
            }
        };
        self.edit(target, reply.with_keyboard(menu::after_chain_menu()))
            .await
    }

    async fn on_report(&mut self, target: Target, report: MarketReport) -> Result<()> {
        self.edit(target, Reply::text(menu::FETCHING_DATA_TEXT)).await?;

        let reply = match self.source.market_report(report).await {
            Ok(table) => Reply::html(format::report_message(&table)),
            Err(e) => {
                tracing::error!(report = report.key(), error = %e, "error fetching market data");
                Reply::text(format!("❌ Error fetching data: {e}\n\nPlease try again."))
            }
        };
        self.edit(target, reply.with_keyboard(menu::after_report_menu()))
            .await
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Non-empty expiry list, or `None` after logging why there is none.
    async fn fetch_expiries(&self, symbol: &str, class: InstrumentClass) -> Option<Vec<String>> {
        match self.source.expiries(symbol, class).await {
            Ok(expiries) if !expiries.is_empty() => Some(expiries),
            Ok(_) => {
                tracing::warn!(%symbol, "no expiries");
                None
            }
            Err(e) => {
                tracing::error!(%symbol, error = %e, "error fetching expiries");
                None
            }
        }
    }

    fn set_state(&mut self, user: i64, now: DateTime<Utc>, state: ConversationState) {
        if let Some(session) = self.sessions.get_mut(user, now) {
            session.state = state;
        }
    }

    async fn reply(&self, chat_id: i64, reply: Reply) -> Result<()> {
        self.transport.send_message(chat_id, &reply).await
    }

    async fn edit(&self, target: Target, reply: Reply) -> Result<()> {
        self.transport
            .edit_message(target.chat_id, target.message_id, &reply)
            .await
    }
}

impl<S: QuoteSource> Bot<S, TelegramClient> {
    /// Long-poll Telegram and handle updates until `shutdown` resolves.
    ///
    /// A failing update is logged and skipped; it never stops the loop.
    pub async fn run_polling(
        &mut self,
        poll_timeout_secs: u64,
        shutdown: impl Future<Output = ()>,
    ) -> Result<()> {
        tokio::pin!(shutdown);
        let mut offset = 0;
        tracing::info!("polling for updates");

        loop {
            let batch = tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested, stopping");
                    return Ok(());
                }
                batch = self.transport.get_updates(offset, poll_timeout_secs) => batch,
            };

            match batch {
                Ok(updates) => {
                    for update in updates {
                        offset = update.update_id + 1;
                        let update_id = update.update_id;
                        if let Err(e) = self.handle_update(update).await {
                            tracing::error!(update_id, error = %e, "failed to handle update");
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "getUpdates failed");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }

            let purged = self.sessions.purge_expired(Utc::now());
            if purged > 0 {
                tracing::debug!(purged, "expired sessions dropped");
            }
        }
    }
}
