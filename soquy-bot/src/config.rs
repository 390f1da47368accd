use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_soquy_home, ledger_path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub telegram: TelegramSection,
    pub ledger: LedgerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramSection {
    /// Bot token. Empty means: read BOT_TOKEN from the environment.
    pub token: String,
    /// Server-side long-poll timeout for getUpdates, in seconds.
    pub poll_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSection {
    /// Ledger file; None means ~/.soquy/ledger.json.
    pub path: Option<PathBuf>,
    /// IANA timezone used for "this month" in summaries.
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram: TelegramSection {
                token: String::new(),
                poll_timeout_secs: 50,
            },
            ledger: LedgerSection {
                path: None,
                timezone: "Asia/Ho_Chi_Minh".to_string(),
            },
        }
    }
}

impl Config {
    pub fn bot_token(&self) -> Result<String> {
        if !self.telegram.token.is_empty() {
            return Ok(self.telegram.token.clone());
        }
        std::env::var("BOT_TOKEN")
            .context("BOT_TOKEN is not set and config has no telegram.token")
    }

    pub fn ledger_file(&self) -> Result<PathBuf> {
        match &self.ledger.path {
            Some(p) => Ok(p.clone()),
            None => ledger_path(),
        }
    }

    pub fn tz(&self) -> Result<Tz> {
        soquy_core::time::parse_tz(&self.ledger.timezone)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_soquy_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
