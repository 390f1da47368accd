use std::io::BufRead;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};

use soquy_store::LedgerStore;

mod config;
mod reply;
mod router;
mod state;
mod telegram;

#[derive(Parser, Debug)]
#[command(name = "soquy", version, about = "Chat-driven personal finance ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Long-poll Telegram and answer chat messages
    Run,

    /// Drive the ledger from stdin, no bot token needed
    Repl,

    /// Write the default config to ~/.soquy/config.toml
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run => run_bot().await,
        Command::Repl => run_repl(),
        Command::InitConfig => config::init_config(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soquy=info"));
    fmt().with_env_filter(filter).init();
}

/// The single-consumer message loop: updates are handled one at a time, so
/// all ledger mutations are serialized without extra locking.
async fn run_bot() -> Result<()> {
    let cfg = config::load_config()?;
    let token = cfg.bot_token()?;
    let tz = cfg.tz()?;
    let mut store = LedgerStore::open(cfg.ledger_file()?)?;
    let client = telegram::TelegramClient::new(&token);

    info!(ledger = %store.path().display(), "soquy is running");

    let mut offset = 0i64;
    loop {
        let updates = match client.get_updates(offset, cfg.telegram.poll_timeout_secs).await {
            Ok(u) => u,
            Err(e) => {
                warn!("poll failed: {e:#}");
                tokio::time::sleep(Duration::from_secs(2)).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(msg) = update.message else { continue };
            let Some(text) = msg.text.as_deref() else { continue };
            debug!(chat = msg.chat.id, "inbound: {text}");

            let outbound = match router::route_message(&mut store, tz, text) {
                Ok(r) => r,
                Err(e) => {
                    error!("handler failed: {e:#}");
                    Some(reply::INTERNAL_ERROR.to_string())
                }
            };

            if let Some(outbound) = outbound {
                if let Err(e) = client.send_message(msg.chat.id, &outbound).await {
                    warn!(chat = msg.chat.id, "send failed: {e:#}");
                }
            }
        }
    }
}

fn run_repl() -> Result<()> {
    let cfg = config::load_config()?;
    let tz = cfg.tz()?;
    let mut store = LedgerStore::open(cfg.ledger_file()?)?;

    println!("{}", reply::HELP);
    println!("(gõ 'exit' để thoát)\n");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "exit" || text == "quit" {
            break;
        }
        if let Some(outbound) = router::route_message(&mut store, tz, text)? {
            println!("{outbound}");
        }
    }

    Ok(())
}
