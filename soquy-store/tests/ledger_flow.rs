use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use tempfile::TempDir;

use soquy_core::{Category, Direction, categorize, parse_amount};
use soquy_store::LedgerStore;

fn hcm() -> Tz {
    "Asia/Ho_Chi_Minh".parse().unwrap()
}

/// Drive the store the way the chat frontend does: parse + categorize the
/// raw message, then record with the category-derived direction.
#[test]
fn test_chat_messages_to_monthly_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    let mut store = LedgerStore::open(&path).unwrap();

    store.set_balance(2_000_000).unwrap();

    let messages = [
        ("ăn sáng 30k", 1u32),
        ("cf 45k", 3),
        ("grab về nhà 60k", 7),
        ("lương tháng 8tr", 10),
        ("netflix 120k", 15),
    ];
    for (text, day) in messages {
        let amount = parse_amount(text).unwrap();
        let category = categorize(text);
        let created_at = Utc.with_ymd_and_hms(2025, 8, day, 5, 0, 0).unwrap();
        store
            .record(amount, category.direction(), category, text, created_at)
            .unwrap();
    }

    // 2tr start + 8tr income - (30k + 45k + 60k + 120k)
    assert_eq!(store.balance(), 9_745_000);

    let summary = store.monthly_summary(2025, 8, hcm()).unwrap();
    assert_eq!(summary.total_income, 8_000_000);
    assert_eq!(summary.total_expense, 255_000);
    assert_eq!(summary.net(), 7_745_000);
    assert_eq!(summary.top_expenses.len(), 4);
    assert_eq!(summary.top_expenses[0].note, "netflix 120k");
    assert_eq!(summary.top_expenses[0].category, Category::Leisure);

    // undo removes the newest entry and restores its delta
    let undone = store.undo_last().unwrap().unwrap();
    assert_eq!(undone.note, "netflix 120k");
    assert_eq!(store.balance(), 9_865_000);

    // everything above survives a reopen
    drop(store);
    let store = LedgerStore::open(&path).unwrap();
    assert_eq!(store.balance(), 9_865_000);
    assert_eq!(store.len(), 4);
    let recent = store.recent(10);
    assert_eq!(recent[0].note, "lương tháng 8tr");
    assert_eq!(recent[0].direction, Direction::Income);
}
