/// Utilities for date formatting and parsing
///
/// Provides consistent date formatting across the booking pages
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Short card format
/// Example: 2024-03-05T00:00:00Z -> "Mar 5, 2024"
pub fn format_short_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Long detail-page format
/// Example: 2024-03-05T00:00:00Z -> "Tuesday, March 5, 2024"
pub fn format_long_date(dt: DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y").to_string()
}

/// Parse the value of an `<input type="date">` ("YYYY-MM-DD").
/// An empty or malformed value means "not selected".
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a date for an `<input type="date">` value attribute
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// The user's local calendar date, for the `min` attribute of date inputs.
/// Picked dates are calendar days, so near midnight this can differ from
/// the UTC date by one.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_short_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(format_short_date(dt), "Mar 5, 2024");
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_short_date(dt), "Dec 31, 2024");
    }

    #[test]
    fn test_format_long_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_long_date(dt), "Tuesday, March 5, 2024");
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = parse_date_input("2024-01-04");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 4));
        assert_eq!(format_date_input(date), "2024-01-04");
    }

    #[test]
    fn test_invalid_date_input() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("invalid"), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
        assert_eq!(format_date_input(None), "");
    }

    #[test]
    fn test_today_is_within_a_day_of_utc() {
        let offset = (today() - Utc::now().date_naive()).num_days();
        assert!(offset.abs() <= 1, "local date off by {} days", offset);
    }
}
