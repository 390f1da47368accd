//! User-visible reply texts and currency formatting.

use chrono_tz::Tz;
use soquy_core::{MonthlySummary, Transaction};

pub const HELP: &str = "🤖 Bot ghi thu chi đã sẵn sàng.\n\n\
Ví dụ:\n\
- ăn sáng 30k\n\
- cf 45k\n\
- lương 8tr\n\n\
Lệnh:\n\
/setbalance – set số dư ban đầu\n\
/balance – xem số dư\n\
/thang – tổng kết tháng\n\
/undo – hoàn tác giao dịch";

pub const SETBALANCE_USAGE: &str = "Dùng: /setbalance 5tr";
pub const UNPARSEABLE_AMOUNT: &str = "Không đọc được số tiền.";
pub const UNDO_DONE: &str = "✅ Đã hoàn tác giao dịch gần nhất.";
pub const UNDO_EMPTY: &str = "❌ Không có giao dịch để hoàn tác.";
pub const NO_TRANSACTIONS: &str = "📭 Chưa có giao dịch nào.";
pub const INTERNAL_ERROR: &str = "⚠️ Có lỗi xảy ra, thử lại sau.";

/// Thousands-separated amount with the currency glyph: 8000000 → "8,000,000đ".
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }
    grouped.push('đ');
    grouped
}

pub fn balance_set(amount: i64) -> String {
    format!("✅ Đã set số dư: {}", format_amount(amount))
}

pub fn balance_reply(balance: i64) -> String {
    format!("💰 Số dư hiện tại: {}", format_amount(balance))
}

pub fn recorded(tx: &Transaction, balance: i64) -> String {
    format!(
        "📌 Đã ghi {} {} ({})\n💰 Số dư còn: {}",
        tx.direction.word(),
        format_amount(tx.amount),
        tx.category.label(),
        format_amount(balance),
    )
}

pub fn monthly_summary(summary: &MonthlySummary) -> String {
    let mut msg = format!(
        "📊 TỔNG KẾT THÁNG {}/{}\n\n\
💰 Thu: {}\n\
💸 Chi: {}\n\
📉 Net: {}\n",
        summary.month,
        summary.year,
        format_amount(summary.total_income),
        format_amount(summary.total_expense),
        format_amount(summary.net()),
    );

    if !summary.top_expenses.is_empty() {
        msg.push_str("\n🔥 Chi nhiều nhất:\n");
        for tx in &summary.top_expenses {
            msg.push_str(&format!("- {}: {}\n", tx.note, format_amount(tx.amount)));
        }
    }

    msg
}

pub fn recent_listing(txs: &[Transaction], tz: Tz) -> String {
    if txs.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let mut msg = String::from("📜 10 giao dịch gần nhất:\n\n");
    for tx in txs {
        let day = tx.created_at.with_timezone(&tz).format("%Y-%m-%d");
        msg.push_str(&format!(
            "#{} | {}\n{}{} | {}\n{}\n\n",
            tx.id,
            day,
            tx.direction.sign(),
            format_amount(tx.amount),
            tx.category.label(),
            tx.note,
        ));
    }
    msg
}
