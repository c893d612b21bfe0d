//! Display Formatting
//!
//! Helpers for rendering item fields.

use chrono::{DateTime, Local, TimeZone};

use item_sync::NoticeKind;

const DATE: &str = "%Y-%m-%d";
const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Render an ISO-8601 timestamp in `tz`; unparseable input is shown as-is
fn format_in<Tz: TimeZone>(timestamp: &str, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.with_timezone(tz).format(pattern).to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Local date, for cards
pub fn short_date(timestamp: &str) -> String {
    format_in(timestamp, &Local, DATE)
}

/// Local date and time, for the details dialog
pub fn date_time(timestamp: &str) -> String {
    format_in(timestamp, &Local, DATE_TIME)
}

pub fn item_count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

pub fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast success",
        NoticeKind::Error => "toast error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_in_utc() {
        let ts = "2024-05-01T23:30:00.000Z";
        assert_eq!(format_in(ts, &Utc, DATE), "2024-05-01");
        assert_eq!(format_in(ts, &Utc, DATE_TIME), "2024-05-01 23:30:00");
    }

    #[test]
    fn test_format_in_shifts_timezone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_in("2024-05-01T23:30:00.000Z", &tokyo, DATE), "2024-05-02");
    }

    #[test]
    fn test_unparseable_timestamp_shown_raw() {
        assert_eq!(short_date("yesterday"), "yesterday");
        assert_eq!(date_time(""), "");
    }

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(12), "12 items");
    }

    #[test]
    fn test_toast_class() {
        assert_eq!(toast_class(NoticeKind::Error), "toast error");
        assert_eq!(toast_class(NoticeKind::Success), "toast success");
    }
}
