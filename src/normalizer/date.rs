//! Display dates. Always English month abbreviations, always UTC, so the same
//! upstream data renders the same page on any build machine.

use chrono::{DateTime, Utc};

/// `"Sep 14, 2024"`
pub fn long_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// `"Sep 14"`
pub fn short_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d").to_string()
}

/// Parse an RFC 3339 or RFC 2822 timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_date() {
        let dt = Utc.with_ymd_and_hms(2024, 9, 4, 22, 0, 0).unwrap();
        assert_eq!(long_date(&dt), "Sep 4, 2024");
    }

    #[test]
    fn test_short_date() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(short_date(&dt), "Dec 25");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let iso = parse_timestamp("2024-09-14T10:12:44Z").unwrap();
        assert_eq!(short_date(&iso), "Sep 14");

        let rss = parse_timestamp("Sat, 14 Sep 2024 10:12:44 +1200").unwrap();
        assert_eq!(long_date(&rss), "Sep 13, 2024");

        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
