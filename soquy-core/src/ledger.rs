//! Ledger record types shared across the workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Whether a transaction increases or decreases the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "thu")]
    Income,
    #[serde(rename = "chi")]
    Expense,
}

impl Direction {
    /// Apply this direction's sign to a positive amount.
    pub fn signed(&self, amount: i64) -> i64 {
        match self {
            Direction::Income => amount,
            Direction::Expense => -amount,
        }
    }

    /// The word used in chat confirmations ("thu"/"chi").
    pub fn word(&self) -> &'static str {
        match self {
            Direction::Income => "thu",
            Direction::Expense => "chi",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            Direction::Income => '+',
            Direction::Expense => '-',
        }
    }
}

/// A single recorded income/expense entry.
///
/// Immutable once created; the only deletion path is the most-recent-first
/// undo in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id, assigned monotonically by the store.
    pub id: i64,
    /// Positive, whole currency units.
    pub amount: i64,
    pub direction: Direction,
    pub category: Category,
    /// The original chat text that produced this entry.
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// The balance delta this transaction applied (+ for income, − for expense).
    pub fn signed_amount(&self) -> i64 {
        self.direction.signed(self.amount)
    }
}

/// Aggregates for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_income: i64,
    pub total_expense: i64,
    /// Up to 5 expenses, largest first; equal amounts ordered by id.
    pub top_expenses: Vec<Transaction>,
}

impl MonthlySummary {
    pub fn net(&self) -> i64 {
        self.total_income - self.total_expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_signed_amount() {
        let at = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
        let tx = Transaction {
            id: 1,
            amount: 30_000,
            direction: Direction::Expense,
            category: Category::Food,
            note: "ăn sáng 30k".to_string(),
            created_at: at,
        };
        assert_eq!(tx.signed_amount(), -30_000);
        assert_eq!(Direction::Income.signed(500), 500);
    }

    #[test]
    fn test_serialized_form_uses_labels() {
        let at = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
        let tx = Transaction {
            id: 7,
            amount: 8_000_000,
            direction: Direction::Income,
            category: Category::Income,
            note: "lương 8tr".to_string(),
            created_at: at,
        };
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"thu\""));
        assert!(json.contains("Thu nhập"));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_net() {
        let s = MonthlySummary {
            year: 2025,
            month: 8,
            total_income: 8_000_000,
            total_expense: 30_000,
            top_expenses: Vec::new(),
        };
        assert_eq!(s.net(), 7_970_000);
    }
}
