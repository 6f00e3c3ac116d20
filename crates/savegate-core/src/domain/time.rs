//! Timestamp helpers.
//!
//! Timestamps cross the reconciler boundary as RFC 3339 strings and durations
//! as whole seconds.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::error::SavegateError;

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SavegateError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| SavegateError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Format a timestamp the way the reconciler records it (`2024-01-01T12:00:00Z`).
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Has at least `interval_secs` passed between `since` and `now`?
///
/// A `since` later than `now` never counts as elapsed.
pub fn has_time_elapsed(since: DateTime<Utc>, now: DateTime<Utc>, interval_secs: u32) -> bool {
    now.signed_duration_since(since) >= Duration::seconds(i64::from(interval_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_utc_and_offset_forms() {
        assert_eq!(parse_timestamp("2024-01-01T12:00:00Z").unwrap(), t0());
        assert_eq!(parse_timestamp("2024-01-01T21:00:00+09:00").unwrap(), t0());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_timestamp("t0").unwrap_err();
        assert!(matches!(err, SavegateError::InvalidTimestamp { ref value, .. } if value == "t0"));
    }

    #[test]
    fn format_is_parseable() {
        let s = format_timestamp(t0());
        assert_eq!(s, "2024-01-01T12:00:00Z");
        assert_eq!(parse_timestamp(&s).unwrap(), t0());
    }

    #[rstest]
    #[case::before_interval(59, false)]
    #[case::exactly_at_interval(60, true)]
    #[case::after_interval(61, true)]
    fn elapsed_boundary(#[case] offset_secs: i64, #[case] expected: bool) {
        let now = t0() + Duration::seconds(offset_secs);
        assert_eq!(has_time_elapsed(t0(), now, 60), expected);
    }

    #[test]
    fn future_timestamp_has_not_elapsed() {
        let now = t0() - Duration::seconds(10);
        assert!(!has_time_elapsed(t0(), now, 0));
    }
}
