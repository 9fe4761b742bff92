//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Naive datetime layouts accepted from machine sources (assumed UTC).
static MACHINE_FORMATS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
});

/// Date-only layouts produced by display formatting ("Mar 24, 2025").
///
/// A label names a whole calendar day, so parsing one yields the end of
/// that day (23:59:59), not its midnight.
static LABEL_FORMATS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["%b %d, %Y", "%B %d, %Y", "%m/%d/%Y"]
});

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Parses a timestamp from any of the forms a round record or a
    /// pre-formatted display label can carry.
    ///
    /// Accepted, in order of preference:
    /// - RFC 3339 / ISO 8601 with offset (`"2025-03-24T10:00:00Z"`)
    /// - Naive ISO datetime, assumed UTC (`"2025-03-24T10:00:00"`)
    /// - Date-only ISO, midnight UTC (`"2025-03-24"`)
    /// - Human label, end of day UTC (`"Mar 24, 2025"` -> 23:59:59)
    ///
    /// Returns None for anything else. Callers degrade on None rather
    /// than erroring; see the countdown formatter.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        for format in MACHINE_FORMATS.iter() {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self(naive.and_utc()));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Self(midnight.and_utc()));
        }

        for format in LABEL_FORMATS.iter() {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                let end_of_day = date.and_hms_opt(23, 59, 59)?;
                return Some(Self(end_of_day.and_utc()));
            }
        }

        None
    }
}
