//! # Temporal Types: Offset-Preserving Timestamps
//!
//! Defines `Timestamp`, the value stored by every date-time property.
//!
//! ## Invariant
//!
//! Text is parsed exactly once, on input, against
//! `YYYY-MM-DDThh:mm:ss[.fraction](±hh:mm|Z)`. The parsed value keeps the
//! original UTC offset; output is produced on demand in one canonical form:
//!
//! - seconds always present,
//! - fraction always nine digits, so every timestamp renders at one width,
//! - offset always numeric, so `Z` is written as `+00:00`.
//!
//! Normalizing on output means `parse(s).to_rfc3339()` may differ from `s`,
//! but re-parsing the canonical form yields an equal value.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TimestampError;

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?(?:Z|[+-][0-9]{2}:[0-9]{2})$",
    )
        .expect("timestamp regex")
});

/// A point in time together with the UTC offset it was written in.
///
/// Two timestamps are equal only if they name the same instant *and* carry
/// the same offset: `10:00:00+00:00` and `11:00:00+01:00` are different
/// values because they encode differently.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parse a timestamp from RFC 3339 text.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::Format`] if the text does not follow the
    /// accepted grammar (date-only values, lowercase `t`, or missing offsets
    /// are all rejected), and [`TimestampError::OutOfRange`] if it names an
    /// impossible date such as February 30th.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        if !TIMESTAMP_RE.is_match(s) {
            return Err(TimestampError::Format {
                value: s.to_string(),
            });
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| TimestampError::OutOfRange {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(dt))
    }

    /// Wrap an already-constructed `chrono` value.
    pub fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// Access the inner `DateTime<FixedOffset>`.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Offset from UTC in seconds (east positive).
    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().local_minus_utc()
    }

    /// Render in canonical form, e.g. `2015-07-24T05:44:54.000000000-05:00`.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Nanos, false)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.offset_seconds() == other.offset_seconds()
    }
}

impl Eq for Timestamp {}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_keeps_offset() {
        let ts = Timestamp::parse("2015-07-24T05:44:54-05:00").unwrap();
        assert_eq!(ts.offset_seconds(), -5 * 3600);
        assert_eq!(ts.to_rfc3339(), "2015-07-24T05:44:54.000000000-05:00");
    }

    #[test]
    fn test_z_suffix_normalized_to_numeric_offset() {
        let ts = Timestamp::parse("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00.000000000+00:00");
    }

    #[test]
    fn test_fraction_normalized_to_fixed_width() {
        let ts = Timestamp::parse("2024-01-15T10:30:00.5+05:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00.500000000+05:30");

        let ts = Timestamp::parse("2024-01-15T10:30:00.000001Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00.000001000+00:00");
    }

    #[test]
    fn test_output_width_is_constant() {
        let widths: Vec<_> = [
            "2015-07-01T05:00:00.000+00:00",
            "2015-07-01T05:00:00.5+00:00",
            "2015-07-01T05:00:00.000001+00:00",
            "2015-07-01T05:00:00-05:00",
        ]
        .iter()
        .map(|s| Timestamp::parse(s).unwrap().to_rfc3339().len())
        .collect();
        assert_eq!(widths, [35; 4]);
    }

    #[test]
    fn test_canonical_form_reparses_equal() {
        let ts = Timestamp::parse("2024-01-15T10:30:00.25Z").unwrap();
        let again = Timestamp::parse(&ts.to_rfc3339()).unwrap();
        assert_eq!(ts, again);
        assert_eq!(ts.to_rfc3339(), again.to_rfc3339());
    }

    #[test]
    fn test_same_instant_different_offset_not_equal() {
        let a = Timestamp::parse("2024-01-15T10:00:00+00:00").unwrap();
        let b = Timestamp::parse("2024-01-15T11:00:00+01:00").unwrap();
        assert_eq!(a.as_datetime(), b.as_datetime());
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        for bad in [
            "",
            "not-a-date",
            "2024-01-15",
            "2024-01-15T10:30:00",
            "2024-01-15t10:30:00Z",
            "2024-01-15 10:30:00Z",
            "2024-01-15T10:30Z",
            "2024-01-15T10:30:00+0500",
            "２０２４-01-15T10:30:00Z",
            "2024-01-15T10:30:٠٠Z",
        ] {
            assert!(
                matches!(Timestamp::parse(bad), Err(TimestampError::Format { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_rejects_impossible_date() {
        let err = Timestamp::parse("2024-02-30T10:30:00Z").unwrap_err();
        assert!(matches!(err, TimestampError::OutOfRange { .. }));
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let ts = Timestamp::parse("2024-01-15T10:30:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-15T10:30:00.000000000+00:00\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    proptest! {
        #[test]
        fn canonical_output_is_a_fixed_point(
            secs in 0i64..4_102_444_800,
            micros in 0u32..1_000_000,
            offset_min in -14i32 * 60..=14 * 60,
        ) {
            let offset = FixedOffset::east_opt(offset_min * 60).unwrap();
            let dt = DateTime::from_timestamp(secs, micros * 1000)
                .unwrap()
                .with_timezone(&offset);
            let ts = Timestamp::from_datetime(dt);
            let text = ts.to_rfc3339();
            let reparsed = Timestamp::parse(&text).unwrap();
            prop_assert_eq!(reparsed, ts);
            prop_assert_eq!(reparsed.to_rfc3339(), text);
        }
    }
}
