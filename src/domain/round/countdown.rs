//! Countdown value object and the display countdown formatter.

use chrono::Duration;
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Sentinel returned when a countdown target cannot be parsed.
///
/// Callers must compare against this literal; the formatter never
/// throws, so the sentinel is the only failure signal.
pub const INVALID_DATE: &str = "Invalid date";

/// Whole days/hours/minutes remaining until a target instant.
///
/// Components use integer truncation: hours are the total difference
/// modulo 24, minutes modulo 60. A target at or before "now" clamps to
/// zero rather than going negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    /// Computes the time remaining from `now` until `target`.
    pub fn between(target: Timestamp, now: Timestamp) -> Self {
        let total = target.duration_since(&now);
        if total <= Duration::zero() {
            return Self::zero();
        }
        Self {
            days: total.num_days(),
            hours: total.num_hours() % 24,
            minutes: total.num_minutes() % 60,
        }
    }

    /// An elapsed countdown, all components zero.
    pub fn zero() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
        }
    }

    /// Returns true if the target has been reached.
    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}

/// Formats the time remaining until a raw target date as `"{d}d {h}h {m}m"`.
///
/// The target may be a machine ISO timestamp or a human label like
/// `"Mar 24, 2025"`; a label counts as valid through the end of that day.
/// An unparseable target yields the [`INVALID_DATE`] sentinel, and a
/// target at or before `now` yields `"0d 0h 0m"`.
pub fn format_time_remaining(raw_target: &str, now: Timestamp) -> String {
    match Timestamp::parse_lenient(raw_target) {
        Some(target) => Countdown::between(target, now).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
