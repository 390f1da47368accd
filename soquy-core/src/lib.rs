//! soquy-core: domain logic for the chat ledger — amount parsing, keyword
//! categorization, record types, and month windows.

pub mod amount;
pub mod category;
pub mod ledger;
pub mod time;

pub use amount::parse_amount;
pub use category::{categorize, Category};
pub use ledger::{Direction, MonthlySummary, Transaction};
