//! Date-range construction for "tasks due today" filters
//!
//! The API takes ISO 8601 date strings without an offset and interprets them
//! as local time. The upper bound of a day range is the start of the *next*
//! day, exclusive, rather than 23:59:59.999999 - a task scheduled exactly at
//! midnight stays included and there is no microsecond-precision mismatch
//! against the API's own boundary handling. The filter matches the task
//! *start* timestamp, not due or creation dates.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};

const API_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Start of the given instant's day and start of the following day
pub fn day_range(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let start = now.date().and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Format a timestamp the way the API expects it
pub fn format_api(dt: NaiveDateTime) -> String {
    dt.format(API_FORMAT).to_string()
}

/// Today's range in local time, formatted for query parameters
pub fn today_range() -> (String, String) {
    let (start, end) = day_range(Local::now().naive_local());
    (format_api(start), format_api(end))
}

/// Today's local date, formatted `YYYY-MM-DD` (journal day for completions)
pub fn today_journal_date() -> String {
    Local::now().date_naive().to_string()
}

/// Today at midnight, formatted for the API (default habit-progress date)
pub fn today_midnight() -> String {
    format_api(Local::now().date_naive().and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn range_spans_start_of_day_to_start_of_next_day() {
        let (start, end) = day_range(at(2025, 12, 8, 15, 30));
        assert_eq!(format_api(start), "2025-12-08T00:00:00");
        assert_eq!(format_api(end), "2025-12-09T00:00:00");
    }

    #[test]
    fn range_is_stable_at_midnight() {
        let (start, end) = day_range(at(2025, 12, 8, 0, 0));
        assert_eq!(format_api(start), "2025-12-08T00:00:00");
        assert_eq!(format_api(end), "2025-12-09T00:00:00");
    }

    #[test]
    fn range_crosses_month_and_year_boundaries() {
        let (_, end) = day_range(at(2025, 12, 31, 23, 59));
        assert_eq!(format_api(end), "2026-01-01T00:00:00");
    }

    #[test]
    fn format_has_no_fractional_seconds_or_offset() {
        let formatted = format_api(at(2025, 6, 1, 9, 5));
        assert_eq!(formatted, "2025-06-01T09:05:00");
    }
}
