//! # Temporal Types
//!
//! Two representations of time appear in a product record:
//!
//! - [`Timestamp`]: the producer's `generatedAt` stamp. UTC only, seconds
//!   precision, always rendered `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! - [`EventDate`]: a user-entered supply-chain date (manufacturing,
//!   packaging, sale). The text must be an absolute RFC 3339 timestamp, but
//!   it is kept exactly as entered: a form that submits
//!   `2024-06-15T00:00:00.000Z` gets the same string back after a round trip.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LuxqrError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`]: from an RFC 3339 string with `Z` suffix.
/// - [`Timestamp::parse_lenient()`]: from any RFC 3339 string, converted to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// Only the `Z` suffix is accepted. `+00:00` is rejected even though it
    /// names the same instant, so a parsed stamp always re-renders to the
    /// text it came from (modulo sub-seconds).
    ///
    /// # Errors
    ///
    /// Returns [`LuxqrError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339 or does not end in `Z`.
    pub fn parse(s: &str) -> Result<Self, LuxqrError> {
        if !s.ends_with('Z') {
            return Err(LuxqrError::InvalidTimestamp {
                value: s.to_string(),
                reason: "timestamp must use Z suffix (UTC only)".to_string(),
            });
        }
        Self::parse_lenient(s)
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any offset and
    /// converting to UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, LuxqrError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| LuxqrError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, LuxqrError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| LuxqrError::InvalidTimestamp {
            value: secs.to_string(),
            reason: "epoch seconds out of range".to_string(),
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// A user-entered date, kept verbatim.
///
/// The inner text is guaranteed to parse as an absolute RFC 3339 timestamp
/// (date, time and offset). It is never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate {
    text: String,
    instant: Timestamp,
}

impl EventDate {
    /// Check `s` is an absolute timestamp and keep it as-is.
    ///
    /// # Errors
    ///
    /// Returns [`LuxqrError::InvalidTimestamp`] for bare dates, local times
    /// without an offset, or any other non-RFC 3339 text.
    pub fn parse(s: &str) -> Result<Self, LuxqrError> {
        let instant = Timestamp::parse_lenient(s)?;
        Ok(Self {
            text: s.to_string(),
            instant,
        })
    }

    /// Build an event date from a timestamp, rendered with `Z` suffix.
    pub fn from_timestamp(ts: Timestamp) -> Self {
        Self {
            text: ts.to_iso8601(),
            instant: ts,
        }
    }

    /// The text exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The instant this date names, normalised to UTC seconds.
    pub fn to_timestamp(&self) -> Timestamp {
        self.instant
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for EventDate {
    type Error = LuxqrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let instant = Timestamp::parse_lenient(&value)?;
        Ok(Self {
            text: value,
            instant,
        })
    }
}

impl From<EventDate> for String {
    fn from(value: EventDate) -> Self {
        value.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let ts = Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).unwrap());
        assert_eq!(format!("{ts}"), "2026-06-30T23:59:59Z");
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(
            Timestamp::parse("2026-01-15T12:00:00Z").unwrap().to_iso8601(),
            "2026-01-15T12:00:00Z"
        );
        assert!(Timestamp::parse("2026-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2026-01-15T17:00:00+05:00").is_err());
    }

    #[test]
    fn test_parse_subseconds_truncated() {
        let ts = Timestamp::parse("2024-06-15T00:00:00.000Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-06-15T00:00:00Z");
    }

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_epoch_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(Timestamp::from_epoch_secs(ts.epoch_secs()).unwrap(), ts);
    }

    #[test]
    fn test_event_date_kept_verbatim() {
        let d = EventDate::parse("2024-06-15T00:00:00.000Z").unwrap();
        assert_eq!(d.as_str(), "2024-06-15T00:00:00.000Z");
        assert_eq!(d.to_timestamp().to_iso8601(), "2024-06-15T00:00:00Z");
    }

    #[test]
    fn test_event_date_accepts_offsets() {
        let d = EventDate::parse("2024-07-02T09:30:00-07:00").unwrap();
        assert_eq!(d.as_str(), "2024-07-02T09:30:00-07:00");
        assert_eq!(d.to_timestamp().to_iso8601(), "2024-07-02T16:30:00Z");
    }

    #[test]
    fn test_event_date_rejects_ambiguous_text() {
        assert!(EventDate::parse("2024-06-15").is_err());
        assert!(EventDate::parse("2024-06-15T00:00:00").is_err());
        assert!(EventDate::parse("June 15, 2024").is_err());
        assert!(EventDate::parse("").is_err());
    }

    #[test]
    fn test_event_date_serde_is_transparent_text() {
        let d = EventDate::parse("2024-06-18T00:00:00.000Z").unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-06-18T00:00:00.000Z\"");
        let back: EventDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<EventDate>("\"yesterday\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rendering then strictly parsing a stamp is the identity.
        #[test]
        fn timestamp_iso8601_roundtrip(secs in 0i64..4_102_444_800i64) {
            let ts = Timestamp::from_epoch_secs(secs).unwrap();
            let parsed = Timestamp::parse(&ts.to_iso8601()).unwrap();
            prop_assert_eq!(parsed, ts);
        }

        /// Event dates keep their text whatever offset it carries.
        #[test]
        fn event_date_text_is_verbatim(
            secs in 0i64..4_102_444_800i64,
            offset_hours in -12i32..=14i32,
        ) {
            let offset = chrono::FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let dt = DateTime::from_timestamp(secs, 0).unwrap().with_timezone(&offset);
            let text = dt.to_rfc3339();
            let date = EventDate::parse(&text).unwrap();
            prop_assert_eq!(date.as_str(), text.as_str());
            prop_assert_eq!(date.to_timestamp().epoch_secs(), secs);
        }
    }
}
