//! RFC-822 timestamps as used by `<pubDate>` and `<lastBuildDate>`.

use chrono::{DateTime, TimeZone, Utc};

const RFC822_GMT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formats `instant` as RFC-822, always normalised to GMT.
///
/// e.g. `Fri, 28 Jul 2017 18:42:31 GMT`
pub fn to_rfc822<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(RFC822_GMT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    #[test]
    fn test_utc_instant() {
        let instant = Utc.with_ymd_and_hms(2017, 7, 28, 18, 42, 31).unwrap();
        assert_eq!(to_rfc822(&instant), "Fri, 28 Jul 2017 18:42:31 GMT");
    }

    #[test]
    fn test_offset_is_normalised_to_gmt() {
        let instant: DateTime<FixedOffset> =
            DateTime::parse_from_rfc3339("2017-07-28T11:42:31-07:00").unwrap();
        assert_eq!(to_rfc822(&instant), "Fri, 28 Jul 2017 18:42:31 GMT");
    }

    #[test]
    fn test_single_digit_day_is_padded() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(to_rfc822(&instant), "Tue, 05 Mar 2024 07:08:09 GMT");
    }

    #[test]
    fn test_day_boundary_crossing() {
        let instant: DateTime<FixedOffset> =
            DateTime::parse_from_rfc3339("2023-12-31T23:30:00-02:00").unwrap();
        assert_eq!(to_rfc822(&instant), "Mon, 01 Jan 2024 01:30:00 GMT");
    }
}
