//! soquy-store: durable transaction log + running balance.
//!
//! One JSON document holds the balance, the id counter, and the log.
//! Every mutation serializes the next state, writes it to a temp file, and
//! renames it over the live file before the in-memory state is replaced, so
//! the balance and the log always move together or not at all.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use soquy_core::category::Category;
use soquy_core::ledger::{Direction, MonthlySummary, Transaction};
use soquy_core::time::month_window;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Ledger {
    balance: i64,
    next_id: i64,
    transactions: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            balance: 0,
            next_id: 1,
            transactions: Vec::new(),
        }
    }
}

/// File-backed ledger store.
///
/// Opened once at process start and passed by reference to handlers; the
/// single-consumer message loop serializes all mutations.
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    ledger: Ledger,
}

impl LedgerStore {
    /// Open the ledger at `path`, initializing an empty one (balance 0) if
    /// the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let ledger =
                serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
            Ok(Self { path, ledger })
        } else {
            let mut store = Self {
                path,
                ledger: Ledger::default(),
            };
            store.commit(Ledger::default())?;
            Ok(store)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn balance(&self) -> i64 {
        self.ledger.balance
    }

    pub fn len(&self) -> usize {
        self.ledger.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.transactions.is_empty()
    }

    /// Overwrite the balance. No transaction row is created.
    pub fn set_balance(&mut self, amount: i64) -> Result<()> {
        let mut next = self.ledger.clone();
        next.balance = amount;
        self.commit(next)
    }

    /// Apply the signed delta to the balance and append a row with a fresh
    /// id, as one durable step.
    pub fn record(
        &mut self,
        amount: i64,
        direction: Direction,
        category: Category,
        note: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Transaction> {
        let mut next = self.ledger.clone();
        let tx = Transaction {
            id: next.next_id,
            amount,
            direction,
            category,
            note: note.into(),
            created_at,
        };
        next.next_id += 1;
        next.balance += tx.signed_amount();
        next.transactions.push(tx.clone());
        self.commit(next)?;
        Ok(tx)
    }

    /// Reverse the most recently created transaction: invert its balance
    /// delta and delete its row. Returns `Ok(None)` without mutating when
    /// the log is empty.
    pub fn undo_last(&mut self) -> Result<Option<Transaction>> {
        let mut next = self.ledger.clone();
        let Some(tx) = next.transactions.pop() else {
            return Ok(None);
        };
        next.balance -= tx.signed_amount();
        self.commit(next)?;
        Ok(Some(tx))
    }

    /// Income/expense totals and top expenses for one calendar month of the
    /// given timezone.
    pub fn monthly_summary(&self, year: i32, month: u32, tz: Tz) -> Result<MonthlySummary> {
        let (start, end) = month_window(year, month, tz)?;
        let in_window: Vec<&Transaction> = self
            .ledger
            .transactions
            .iter()
            .filter(|tx| tx.created_at >= start && tx.created_at < end)
            .collect();

        let total_income = in_window
            .iter()
            .filter(|tx| tx.direction == Direction::Income)
            .map(|tx| tx.amount)
            .sum();
        let total_expense = in_window
            .iter()
            .filter(|tx| tx.direction == Direction::Expense)
            .map(|tx| tx.amount)
            .sum();

        let mut top_expenses: Vec<Transaction> = in_window
            .iter()
            .filter(|tx| tx.direction == Direction::Expense)
            .map(|tx| (*tx).clone())
            .collect();
        // largest first; equal amounts by ascending id
        top_expenses.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.id.cmp(&b.id)));
        top_expenses.truncate(5);

        Ok(MonthlySummary {
            year,
            month,
            total_income,
            total_expense,
            top_expenses,
        })
    }

    /// Most recent transactions, newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<Transaction> {
        self.ledger
            .transactions
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    fn commit(&mut self, next: Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(&next).context("serialize ledger")?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        self.ledger = next;
        Ok(())
    }
}
