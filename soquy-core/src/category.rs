//! Keyword categorization: lower-case the text, walk the rule table in
//! declared order, first keyword hit wins.

use serde::{Deserialize, Serialize};

use crate::ledger::Direction;

/// Transaction categories matched deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Đồ ăn")]
    Food,
    #[serde(rename = "Giải trí")]
    Leisure,
    #[serde(rename = "Đi lại")]
    Transport,
    #[serde(rename = "Mua sắm")]
    Shopping,
    #[serde(rename = "Thu nhập")]
    Income,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Đồ ăn",
            Category::Leisure => "Giải trí",
            Category::Transport => "Đi lại",
            Category::Shopping => "Mua sắm",
            Category::Income => "Thu nhập",
            Category::Other => "Other",
        }
    }

    /// Income is the only category that increases the balance.
    pub fn direction(&self) -> Direction {
        match self {
            Category::Income => Direction::Income,
            _ => Direction::Expense,
        }
    }
}

/// Rule table. Order matters: the first category with a matching keyword
/// wins, not the longest or most specific match.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Food, &["ăn", "cf", "cafe", "trà sữa", "bún", "phở"]),
    (Category::Leisure, &["phim", "game", "netflix", "spotify"]),
    (Category::Transport, &["grab", "xăng", "xe", "bus"]),
    (Category::Shopping, &["shopee", "áo", "giày", "lazada"]),
    (Category::Income, &["lương", "thưởng", "freelance", "job"]),
];

/// Map free text to a category by substring keyword matching.
pub fn categorize(text: &str) -> Category {
    let lowered = text.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_food() {
        assert_eq!(categorize("ăn sáng 30k"), Category::Food);
        assert_eq!(categorize("cf 45k"), Category::Food);
        assert_eq!(categorize("trà sữa 25k"), Category::Food);
    }

    #[test]
    fn test_categorize_income() {
        assert_eq!(categorize("lương tháng 8tr"), Category::Income);
        assert_eq!(categorize("job freelance 2tr"), Category::Income);
        assert_eq!(Category::Income.direction(), Direction::Income);
    }

    #[test]
    fn test_categorize_fallback() {
        assert_eq!(categorize("abc123"), Category::Other);
        assert_eq!(categorize("abc123").label(), "Other");
        assert_eq!(Category::Other.direction(), Direction::Expense);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(categorize("NETFLIX 120k"), Category::Leisure);
        assert_eq!(categorize("Grab về nhà 60k"), Category::Transport);
    }

    #[test]
    fn test_declaration_order_wins() {
        // Both "phim" (Giải trí) and "xe" (Đi lại) appear; the earlier
        // category in the table takes it.
        assert_eq!(categorize("đi xe ra rạp xem phim 90k"), Category::Leisure);
    }

    #[test]
    fn test_all_expense_categories_decrease_balance() {
        for cat in [
            Category::Food,
            Category::Leisure,
            Category::Transport,
            Category::Shopping,
            Category::Other,
        ] {
            assert_eq!(cat.direction(), Direction::Expense);
        }
    }
}
