/// Utilities for date and time formatting
///
/// Timestamps arrive as ISO-8601 strings and are shown in the Japanese
/// `YYYY/MM/DD` order.
use chrono::{NaiveDate, Utc};

/// Format ISO datetime string to YYYY/MM/DD HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "2024/03/15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', '+', 'Z'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}/{}/{} {}", year, month, day, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to YYYY/MM/DD format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "2024/03/15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", year, month, day);
        }
    }
    date_str.to_string()
}

/// Current UTC date, used for export file names.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "2024/03/15 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+09:00"),
            "2024/12/31 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024/03/15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024/03/15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
