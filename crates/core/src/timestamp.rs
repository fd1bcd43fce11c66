//! Canonical string form for persisted timestamps.
//!
//! Records store their timestamps as ISO-8601 strings. Writers always emit
//! [`format_timestamp`]; readers go through [`parse_timestamp`], which also
//! accepts the looser forms found in older records.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

use crate::types::Timestamp;

/// Formats that carry no offset. Values in these forms are taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Current UTC instant, truncated to the microsecond precision that survives
/// a round trip through [`format_timestamp`].
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Serialize a timestamp, e.g. `2024-05-01T12:30:00.123456+00:00`.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parse a stored timestamp back into a native UTC value.
///
/// Accepts RFC 3339 with any offset (converted to UTC), RFC 3339 with a space
/// separator, and naive date-times without an offset.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    let raw = raw.trim();

    let rfc3339_err = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(err) => err,
    };

    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or(rfc3339_err)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    #[test]
    fn format_uses_microseconds_and_numeric_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-05-01T12:30:00.000000+00:00");
    }

    #[test]
    fn formatted_value_parses_back_unchanged() {
        let ts = now();
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn now_is_truncated_to_microseconds() {
        assert_eq!(now().nanosecond() % 1_000, 0);
    }

    #[test]
    fn parses_zulu_suffix() {
        let ts = parse_timestamp("2024-05-01T12:30:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn converts_foreign_offset_to_utc() {
        let ts = parse_timestamp("2024-05-01T14:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn naive_value_is_taken_as_utc() {
        let ts = parse_timestamp("2024-05-01T12:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn naive_value_keeps_fraction() {
        let ts = parse_timestamp("2024-05-01T12:30:00.250000").unwrap();
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_timestamp("  2024-05-01T12:30:00Z \n").is_ok());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
