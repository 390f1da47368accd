//! Minimal Telegram Bot API client: long-poll getUpdates + sendMessage.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

pub struct TelegramClient {
    http: reqwest::Client,
    base: String,
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: format!("https://api.telegram.org/bot{token}"),
        }
    }

    /// Long-poll for new updates. `offset` should be one past the highest
    /// update_id already handled.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        #[derive(Serialize)]
        struct Req {
            offset: i64,
            timeout: u64,
            allowed_updates: [&'static str; 1],
        }

        let resp = self
            .http
            .post(format!("{}/getUpdates", self.base))
            .json(&Req {
                offset,
                timeout: timeout_secs,
                allowed_updates: ["message"],
            })
            .send()
            .await
            .context("getUpdates request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("telegram error: {status} {txt}");
        }

        let out: ApiResponse<Vec<Update>> =
            resp.json().await.context("parse getUpdates response")?;
        if !out.ok {
            bail!("getUpdates failed: {}", out.description.unwrap_or_default());
        }
        Ok(out.result.unwrap_or_default())
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Req<'a> {
            chat_id: i64,
            text: &'a str,
        }

        let resp = self
            .http
            .post(format!("{}/sendMessage", self.base))
            .json(&Req { chat_id, text })
            .send()
            .await
            .context("sendMessage request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("telegram error: {status} {txt}");
        }

        let out: ApiResponse<serde_json::Value> =
            resp.json().await.context("parse sendMessage response")?;
        if !out.ok {
            bail!("sendMessage failed: {}", out.description.unwrap_or_default());
        }
        Ok(())
    }
}
