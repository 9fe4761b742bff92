//! RoundStatus - Display-ready snapshot of where a round stands.

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::round::labels::edge_label;
use crate::domain::round::{Countdown, Phase, RoundMilestones, INVALID_DATE};

/// A display-ready summary of the round at one instant.
///
/// Bundles the active phase, its window, date labels, and the countdown
/// to the phase close, so UI call sites stop re-deriving phase state
/// from raw dates. Assembled fresh on every call from explicit
/// `(milestones, now)` arguments; nothing is cached, and `generated_at`
/// records the instant the snapshot describes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStatus {
    /// The phase the round is currently in.
    pub phase: Phase,
    /// UI heading for the phase.
    pub phase_label: &'static str,
    /// When the current phase opened, if the record carries the date.
    pub opens: Option<Timestamp>,
    /// When the current phase closes, if the record carries the date.
    pub closes: Option<Timestamp>,
    /// Day-precision labels for the window edges.
    pub opens_label: String,
    pub closes_label: String,
    /// Countdown to the phase close, `"{d}d {h}h {m}m"` or the
    /// invalid-date sentinel when the close date is missing.
    pub time_remaining: String,
    /// The phase that comes next; None once the round is celebrating.
    pub next_phase: Option<Phase>,
    /// The instant this snapshot was computed for.
    pub generated_at: Timestamp,
}

impl RoundStatus {
    /// Assembles the status of a round at the given instant.
    pub fn assemble(milestones: &RoundMilestones, now: Timestamp) -> Self {
        let phase = milestones.current_phase(now);
        let windows = milestones.phase_windows();
        let window = windows.get(&phase).copied().unwrap_or_default();

        Self {
            phase,
            phase_label: phase.label(),
            opens: window.opens,
            closes: window.closes,
            opens_label: edge_label(window.opens),
            closes_label: edge_label(window.closes),
            time_remaining: match window.closes {
                Some(closes) => Countdown::between(closes, now).to_string(),
                None => INVALID_DATE.to_string(),
            },
            next_phase: phase.next(),
            generated_at: now,
        }
    }

    /// Assembles the status of a round at the current system time.
    pub fn assemble_now(milestones: &RoundMilestones) -> Self {
        Self::assemble(milestones, Timestamp::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> Timestamp {
        Timestamp::parse_lenient(raw).unwrap()
    }

    fn scheduled_round() -> RoundMilestones {
        RoundMilestones::from_raw(
            "2025-03-01T00:00:00Z",
            "2025-03-08T00:00:00Z",
            "2025-03-15T00:00:00Z",
            "2025-04-12T00:00:00Z",
            "2025-04-19T00:00:00Z",
        )
    }

    #[test]
    fn reflects_the_active_phase_and_its_window() {
        let now = ts("2025-03-10T00:00:00Z");
        let status = RoundStatus::assemble(&scheduled_round(), now);

        assert_eq!(status.phase, Phase::Voting);
        assert_eq!(status.phase_label, "Voting");
        assert_eq!(status.opens, Some(ts("2025-03-08T00:00:00Z")));
        assert_eq!(status.closes, Some(ts("2025-03-14T00:00:00Z")));
        assert_eq!(status.opens_label, "Mar 8, 2025");
        assert_eq!(status.closes_label, "Mar 14, 2025");
        assert_eq!(status.next_phase, Some(Phase::Covering));
        assert_eq!(status.generated_at, now);
    }

    #[test]
    fn counts_down_to_the_phase_close() {
        let now = ts("2025-03-10T00:00:00Z");
        let status = RoundStatus::assemble(&scheduled_round(), now);
        // Voting closes Mar 14, four days out.
        assert_eq!(status.time_remaining, "4d 0h 0m");
    }

    #[test]
    fn celebration_has_no_next_phase() {
        let status = RoundStatus::assemble(&scheduled_round(), ts("2025-04-15T00:00:00Z"));
        assert_eq!(status.phase, Phase::Celebration);
        assert_eq!(status.next_phase, None);
    }

    #[test]
    fn incomplete_record_degrades_to_signups_with_sentinels() {
        let round = RoundMilestones::from_raw(
            "2025-03-01T00:00:00Z",
            "",
            "2025-03-15T00:00:00Z",
            "2025-04-12T00:00:00Z",
            "2025-04-19T00:00:00Z",
        );
        let status = RoundStatus::assemble(&round, ts("2025-04-01T00:00:00Z"));

        assert_eq!(status.phase, Phase::Signups);
        assert_eq!(status.closes, None);
        assert_eq!(status.closes_label, INVALID_DATE);
        assert_eq!(status.time_remaining, INVALID_DATE);
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let status = RoundStatus::assemble(&scheduled_round(), ts("2025-03-10T00:00:00Z"));
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["phase"], "voting");
        assert_eq!(json["phaseLabel"], "Voting");
        assert_eq!(json["timeRemaining"], "4d 0h 0m");
        assert_eq!(json["nextPhase"], "covering");
        assert!(json["generatedAt"].is_string());
    }
}
