//! Telegram bot serving NSE option chains and market reports.
//!
//! # Usage
//!
//! ```sh
//! export NSE_BOT_TOKEN="123456:telegram-bot-token"
//! RUST_LOG=nse_chain_bot=debug cargo run --bin nse_bot --features cli
//! ```
//!
//! Stops on Ctrl-C.

use nse_chain_bot::bot::{Bot, SessionStore, TelegramClient};
use nse_chain_bot::client::NseClient;
use nse_chain_bot::config::BotConfig;

#[tokio::main]
async fn main() -> nse_chain_bot::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = BotConfig::from_env()?;
    tracing::info!(?config, "starting nse_bot");

    let source = NseClient::with_base_url(&config.nse_base_url);
    let transport = TelegramClient::with_base_url(&config.telegram_token, &config.telegram_api_url);
    let sessions = SessionStore::new(config.session_ttl()?);
    let mut bot = Bot::new(source, transport, sessions);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };
    bot.run_polling(config.poll_timeout_secs, shutdown).await?;

    println!("Done.");
    Ok(())
}
