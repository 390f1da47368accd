use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn soquy_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".soquy"))
}

pub fn ensure_soquy_home() -> Result<PathBuf> {
    let dir = soquy_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn ledger_path() -> Result<PathBuf> {
    Ok(ensure_soquy_home()?.join("ledger.json"))
}
