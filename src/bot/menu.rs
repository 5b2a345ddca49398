//! Inline menus: callback actions and the keyboards that emit them.

use crate::bot::telegram::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::constants::{INDICES, MAX_EXPIRIES_SHOWN};
use crate::types::MarketReport;

pub const WELCOME_TEXT: &str = "👋 Welcome to NSE Option Chain Bot!\n\nChoose an option below:";
pub const RESTARTED_TEXT: &str = "✅ Bot restarted! Choose an option:";
pub const OPTION_TYPE_TEXT: &str = "Choose option type:";
pub const INDEX_TEXT: &str = "Select an Index:";
pub const STOCK_PROMPT_TEXT: &str =
    "📝 Enter stock symbol (e.g., RELIANCE, TCS, INFY):\n\n(Type /cancel to go back)";
pub const MARKET_TEXT: &str = "Select Market Data:";
pub const CANCELLED_TEXT: &str = "👋 Cancelled. Type /start to begin again.";
pub const START_HINT_TEXT: &str = "Type /start to open the menu.";
pub const SESSION_EXPIRED_TEXT: &str = "⌛ Session expired. Type /start to begin again.";
pub const INVALID_SYMBOL_TEXT: &str =
    "❌ Invalid symbol. Please enter a valid stock symbol (e.g., RELIANCE)";
pub const FETCHING_EXPIRIES_TEXT: &str = "⏳ Fetching expiry dates...";
pub const FETCHING_CHAIN_TEXT: &str =
    "⏳ Fetching option chain data...\n(This may take a few seconds)";
pub const FETCHING_DATA_TEXT: &str = "⏳ Fetching data...";
pub const UNKNOWN_SELECTION_TEXT: &str = "❌ Unknown selection.";

/// What an inline button asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Restart,
    OptionChainMenu,
    IndexOptions,
    StockOptions,
    SelectIndex(String),
    SelectExpiry(String),
    BackToStart,
    MarketMenu,
    Report(MarketReport),
}

impl Action {
    /// Decode callback data; `None` for anything this bot never emitted.
    pub fn parse(data: &str) -> Option<Self> {
        let action = match data {
            "restart" => Self::Restart,
            "option_chain" => Self::OptionChainMenu,
            "index_options" => Self::IndexOptions,
            "stock_options" => Self::StockOptions,
            "back_to_start" => Self::BackToStart,
            "market_menu" => Self::MarketMenu,
            _ => {
                if let Some(symbol) = data.strip_prefix("idx_") {
                    Self::SelectIndex(symbol.to_owned())
                } else if let Some(expiry) = data.strip_prefix("exp_") {
                    Self::SelectExpiry(expiry.to_owned())
                } else {
                    Self::Report(MarketReport::from_key(data)?)
                }
            }
        };
        match &action {
            Self::SelectIndex(s) | Self::SelectExpiry(s) if s.is_empty() => None,
            _ => Some(action),
        }
    }

    /// Encode as callback data.
    pub fn callback_data(&self) -> String {
        match self {
            Self::Restart => "restart".into(),
            Self::OptionChainMenu => "option_chain".into(),
            Self::IndexOptions => "index_options".into(),
            Self::StockOptions => "stock_options".into(),
            Self::SelectIndex(symbol) => format!("idx_{symbol}"),
            Self::SelectExpiry(expiry) => format!("exp_{expiry}"),
            Self::BackToStart => "back_to_start".into(),
            Self::MarketMenu => "market_menu".into(),
            Self::Report(report) => report.key().into(),
        }
    }
}

fn row(text: &str, action: Action) -> Vec<InlineKeyboardButton> {
    vec![InlineKeyboardButton {
        text: text.to_owned(),
        callback_data: action.callback_data(),
    }]
}

fn keyboard(rows: Vec<Vec<InlineKeyboardButton>>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: rows,
    }
}

/// Home menu.
pub fn main_menu() -> InlineKeyboardMarkup {
    keyboard(vec![
        row("📊 Option Chain", Action::OptionChainMenu),
        row("📈 Market Data", Action::MarketMenu),
        row("🔄 Restart", Action::Restart),
    ])
}

/// Index or stock options.
pub fn option_type_menu() -> InlineKeyboardMarkup {
    keyboard(vec![
        row("📈 Index Options", Action::IndexOptions),
        row("📉 Stock Options", Action::StockOptions),
        row("🧮 Market Data", Action::MarketMenu),
        row("🏠 Home", Action::BackToStart),
        row("🔄 Restart", Action::Restart),
    ])
}

/// One button per supported index.
pub fn index_menu() -> InlineKeyboardMarkup {
    let mut rows: Vec<_> = INDICES
        .iter()
        .map(|(symbol, name)| row(name, Action::SelectIndex((*symbol).to_owned())))
        .collect();
    rows.push(row("🔙 Back", Action::OptionChainMenu));
    keyboard(rows)
}

/// The nearest expiries, one per row.
pub fn expiry_menu(expiries: &[String]) -> InlineKeyboardMarkup {
    let mut rows: Vec<_> = expiries
        .iter()
        .take(MAX_EXPIRIES_SHOWN)
        .map(|expiry| row(expiry, Action::SelectExpiry(expiry.clone())))
        .collect();
    rows.push(row("🔙 Back", Action::OptionChainMenu));
    keyboard(rows)
}

/// Every market report.
pub fn market_menu() -> InlineKeyboardMarkup {
    let mut rows: Vec<_> = MarketReport::ALL
        .into_iter()
        .map(|report| row(report.label(), Action::Report(report)))
        .collect();
    rows.push(row("🏠 Home", Action::BackToStart));
    rows.push(row("🔄 Restart", Action::Restart));
    keyboard(rows)
}

/// Navigation under an option chain summary.
pub fn after_chain_menu() -> InlineKeyboardMarkup {
    keyboard(vec![
        row("📊 New Query", Action::OptionChainMenu),
        row("📈 Market Data", Action::MarketMenu),
        row("🏠 Home", Action::BackToStart),
        row("🔄 Restart", Action::Restart),
    ])
}

/// Navigation under a market report.
pub fn after_report_menu() -> InlineKeyboardMarkup {
    keyboard(vec![
        row("🔁 Market Menu", Action::MarketMenu),
        row("📊 Option Chain", Action::OptionChainMenu),
        row("🏠 Home", Action::BackToStart),
        row("🔄 Restart", Action::Restart),
    ])
}

/// Title of the expiry menu.
pub fn expiry_prompt(symbol: &str) -> String {
    format!("Select Expiry for {symbol}:")
}
