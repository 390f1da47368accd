//! Stateless message dispatch: each inbound text is handled on its own,
//! either as a /command or as a free-text transaction.

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;

use soquy_core::{categorize, parse_amount, time};
use soquy_store::LedgerStore;

use crate::reply;

/// Handle one inbound message and produce the reply, if any.
///
/// `None` means stay silent: free text without a recognizable amount, and
/// unknown /commands, get no response.
pub fn route_message(store: &mut LedgerStore, tz: Tz, text: &str) -> Result<Option<String>> {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        // group chats address commands as /cmd@botname
        let name = head.split('@').next().unwrap_or(head);
        let args: Vec<&str> = parts.collect();

        return match name {
            "start" => Ok(Some(reply::HELP.to_string())),
            "setbalance" => set_balance_cmd(store, &args),
            "balance" => Ok(Some(reply::balance_reply(store.balance()))),
            "thang" => month_summary_cmd(store, tz),
            "undo" => undo_cmd(store),
            "ls" => Ok(Some(reply::recent_listing(&store.recent(10), tz))),
            _ => Ok(None),
        };
    }

    free_text(store, trimmed)
}

fn set_balance_cmd(store: &mut LedgerStore, args: &[&str]) -> Result<Option<String>> {
    let Some(raw) = args.first() else {
        return Ok(Some(reply::SETBALANCE_USAGE.to_string()));
    };
    let Some(amount) = parse_amount(raw) else {
        return Ok(Some(reply::UNPARSEABLE_AMOUNT.to_string()));
    };
    store.set_balance(amount)?;
    Ok(Some(reply::balance_set(amount)))
}

fn month_summary_cmd(store: &mut LedgerStore, tz: Tz) -> Result<Option<String>> {
    let (year, month) = time::current_month(Utc::now(), tz);
    let summary = store.monthly_summary(year, month, tz)?;
    Ok(Some(reply::monthly_summary(&summary)))
}

fn undo_cmd(store: &mut LedgerStore) -> Result<Option<String>> {
    match store.undo_last()? {
        Some(_) => Ok(Some(reply::UNDO_DONE.to_string())),
        None => Ok(Some(reply::UNDO_EMPTY.to_string())),
    }
}

fn free_text(store: &mut LedgerStore, text: &str) -> Result<Option<String>> {
    let Some(amount) = parse_amount(text) else {
        return Ok(None);
    };
    let category = categorize(text);
    let tx = store.record(amount, category.direction(), category, text, Utc::now())?;
    Ok(Some(reply::recorded(&tx, store.balance())))
}
