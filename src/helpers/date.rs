//! Date helper functions
//!
//! Content dates are stored as ISO `YYYY-MM-DD` strings. Anything that does
//! not parse renders as "Invalid Date", which is what a browser shows for
//! the same input.

use chrono::{Datelike, Local, NaiveDate};

const INVALID_DATE: &str = "Invalid Date";

/// Parse an ISO calendar date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Format a date in long form
///
/// # Examples
/// ```ignore
/// format_date("2024-01-01") // -> "January 1, 2024"
/// ```
pub fn format_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Format a date the way post cards show it (`M/D/YYYY`)
pub fn short_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Year used in the footer copyright line
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_date("2024-12-25"), "December 25, 2024");
    }

    #[test]
    fn test_format_date_leap_day() {
        assert_eq!(format_date("2024-02-29"), "February 29, 2024");
    }

    #[test]
    fn test_format_date_no_padding() {
        assert_eq!(format_date("2024-01-01"), "January 1, 2024");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-01-05"), "1/5/2024");
        assert_eq!(short_date("2023-12-28"), "12/28/2023");
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(format_date("not a date"), "Invalid Date");
        assert_eq!(short_date("2023-02-29"), "Invalid Date");
    }
}
