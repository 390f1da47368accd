//! Calendar-month windows, timezone-aware.
//!
//! Timestamps are stored in UTC; "this month" is whatever month it is on
//! the user's local calendar, so the window bounds come from the configured
//! IANA timezone.

use anyhow::Result;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse an IANA timezone name like "Asia/Ho_Chi_Minh".
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

/// UTC bounds of `[first-of-month, first-of-next-month)` for (year, month)
/// on the local calendar of `tz`.
pub fn month_window(year: i32, month: u32, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = tz
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid month start: {year}-{month:02}"))?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = tz
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid month start: {next_year}-{next_month:02}"))?;

    Ok((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

/// The (year, month) of `now` on the local calendar of `tz`.
pub fn current_month(now: DateTime<Utc>, tz: Tz) -> (i32, u32) {
    let local = now.with_timezone(&tz);
    (local.year(), local.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_window_hcm() {
        // Asia/Ho_Chi_Minh is UTC+7 year-round
        let tz = parse_tz("Asia/Ho_Chi_Minh").unwrap();
        let (start, end) = month_window(2025, 8, tz).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-07-31T17:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-08-31T17:00:00+00:00");
    }

    #[test]
    fn test_month_window_december_rolls_over() {
        let tz = parse_tz("Asia/Ho_Chi_Minh").unwrap();
        let (start, end) = month_window(2025, 12, tz).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-11-30T17:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-12-31T17:00:00+00:00");
    }

    #[test]
    fn test_window_boundaries_are_half_open() {
        let tz = parse_tz("Asia/Ho_Chi_Minh").unwrap();
        let (start, end) = month_window(2025, 8, tz).unwrap();

        // 00:00 local on Aug 1 is in; 00:00 local on Sep 1 is out
        let first_instant = tz.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        let next_month = tz.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
        assert!(first_instant.with_timezone(&Utc) >= start);
        assert!(next_month.with_timezone(&Utc) >= end);
    }

    #[test]
    fn test_current_month_crosses_date_line() {
        let tz = parse_tz("Asia/Ho_Chi_Minh").unwrap();
        // 2025-07-31T20:00Z is already Aug 1 in Vietnam
        let now = Utc.with_ymd_and_hms(2025, 7, 31, 20, 0, 0).unwrap();
        assert_eq!(current_month(now, tz), (2025, 8));
    }

    #[test]
    fn test_invalid_timezone() {
        assert!(parse_tz("Not/AZone").is_err());
    }
}
