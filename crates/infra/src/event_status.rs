use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{EventSchedule, RoundRow};

/// Status derived from an event's rounds and winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatusLabel {
    Completed,
    RoundOngoing(i32),
    YetToStart,
}

impl fmt::Display for EventStatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatusLabel::Completed => write!(f, "COMPLETED"),
            EventStatusLabel::RoundOngoing(round_no) => write!(f, "ROUND {round_no} ONGOING"),
            EventStatusLabel::YetToStart => write!(f, "YET_TO_START"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStatus {
    pub name: String,
    pub status: EventStatusLabel,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStatusError {
    #[error("rounds of event '{event}' are not strictly ordered: round {previous} is followed by round {next}")]
    RoundsOutOfOrder {
        event: String,
        previous: i32,
        next: i32,
    },
}

/// Classify an event at instant `now`.
///
/// First match wins: any winner means completed; then the earliest round that
/// has started and is not completed; then any round scheduled in the future.
/// Everything else, including an event without rounds, is completed.
pub fn classify(
    schedule: &EventSchedule,
    now: DateTime<Utc>,
) -> Result<EventStatus, EventStatusError> {
    let status = if schedule.has_winners() {
        EventStatusLabel::Completed
    } else {
        ensure_ordered(&schedule.name, &schedule.rounds)?;
        label_for(&schedule.rounds, now)
    };

    Ok(EventStatus {
        name: schedule.name.clone(),
        status,
    })
}

/// Round scans for an event without winners. `rounds` must be ordered.
fn label_for(rounds: &[RoundRow], now: DateTime<Utc>) -> EventStatusLabel {
    let ongoing = rounds
        .iter()
        .find(|round| matches!(round.date, Some(date) if date <= now) && !round.completed);
    if let Some(round) = ongoing {
        return EventStatusLabel::RoundOngoing(round.round_no);
    }

    if rounds
        .iter()
        .any(|round| matches!(round.date, Some(date) if date > now))
    {
        return EventStatusLabel::YetToStart;
    }

    EventStatusLabel::Completed
}

fn ensure_ordered(event: &str, rounds: &[RoundRow]) -> Result<(), EventStatusError> {
    match rounds
        .windows(2)
        .find(|pair| pair[0].round_no >= pair[1].round_no)
    {
        Some(pair) => Err(EventStatusError::RoundsOutOfOrder {
            event: event.to_string(),
            previous: pair[0].round_no,
            next: pair[1].round_no,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn round(round_no: i32, date: Option<DateTime<Utc>>, completed: bool) -> RoundRow {
        RoundRow {
            event_id: 1,
            round_no,
            date,
            completed,
        }
    }

    fn schedule(rounds: Vec<RoundRow>, winner_count: i64) -> EventSchedule {
        EventSchedule {
            id: 1,
            name: "Hack Day".to_string(),
            rounds,
            winner_count,
        }
    }

    fn status_of(schedule: &EventSchedule, now: DateTime<Utc>) -> String {
        classify(schedule, now).unwrap().status.to_string()
    }

    #[test]
    fn test_winners_always_complete_the_event() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(1, Some(day(2024, 5, 1)), false),
                round(2, Some(day(2024, 7, 1)), false),
            ],
            1,
        );
        assert_eq!(status_of(&event, now), "COMPLETED");
    }

    #[test]
    fn test_future_round_after_completed_round_is_yet_to_start() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(1, Some(day(2024, 5, 1)), true),
                round(2, Some(day(2024, 6, 15)), false),
            ],
            0,
        );
        assert_eq!(status_of(&event, now), "YET_TO_START");
    }

    #[test]
    fn test_started_round_is_ongoing() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(1, Some(day(2024, 5, 1)), true),
                round(2, Some(day(2024, 5, 20)), false),
            ],
            0,
        );
        assert_eq!(status_of(&event, now), "ROUND 2 ONGOING");
    }

    #[test]
    fn test_earliest_ongoing_round_wins() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(1, Some(day(2024, 5, 1)), false),
                round(3, Some(day(2024, 5, 20)), false),
            ],
            0,
        );
        assert_eq!(status_of(&event, now), "ROUND 1 ONGOING");
    }

    #[test]
    fn test_round_starting_exactly_now_is_ongoing() {
        let now = day(2024, 6, 1);
        let event = schedule(vec![round(4, Some(now), false)], 0);
        assert_eq!(status_of(&event, now), "ROUND 4 ONGOING");
    }

    #[test]
    fn test_ongoing_takes_priority_over_future_round() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(1, Some(day(2024, 7, 1)), false),
                round(2, Some(day(2024, 5, 1)), false),
            ],
            0,
        );
        assert_eq!(status_of(&event, now), "ROUND 2 ONGOING");
    }

    #[test]
    fn test_no_rounds_and_no_winners_falls_back_to_completed() {
        let event = schedule(Vec::new(), 0);
        assert_eq!(status_of(&event, day(2024, 6, 1)), "COMPLETED");
    }

    #[test]
    fn test_all_rounds_completed_without_winner_is_completed() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(1, Some(day(2024, 4, 1)), true),
                round(2, Some(day(2024, 5, 1)), true),
            ],
            0,
        );
        assert_eq!(status_of(&event, now), "COMPLETED");
    }

    #[test]
    fn test_dateless_rounds_are_ignored() {
        let now = day(2024, 6, 1);
        let event = schedule(vec![round(1, None, false), round(2, None, false)], 0);
        assert_eq!(status_of(&event, now), "COMPLETED");

        let event = schedule(
            vec![round(1, None, false), round(2, Some(day(2024, 8, 1)), false)],
            0,
        );
        assert_eq!(status_of(&event, now), "YET_TO_START");
    }

    #[test]
    fn test_classification_is_repeatable() {
        let now = day(2024, 6, 1);
        let event = schedule(vec![round(1, Some(day(2024, 5, 30)), false)], 0);
        assert_eq!(classify(&event, now), classify(&event, now));
        assert_eq!(classify(&event, now).unwrap().name, "Hack Day");
    }

    #[test]
    fn test_unordered_rounds_are_rejected() {
        let now = day(2024, 6, 1);
        let event = schedule(vec![round(2, None, false), round(1, None, false)], 0);
        assert_eq!(
            classify(&event, now),
            Err(EventStatusError::RoundsOutOfOrder {
                event: "Hack Day".to_string(),
                previous: 2,
                next: 1,
            })
        );
    }

    #[test]
    fn test_winners_complete_the_event_even_with_unordered_rounds() {
        let now = day(2024, 6, 1);
        let event = schedule(
            vec![
                round(2, Some(day(2024, 5, 20)), false),
                round(1, Some(day(2024, 5, 1)), false),
            ],
            1,
        );
        assert_eq!(status_of(&event, now), "COMPLETED");
    }

    #[test]
    fn test_duplicate_round_numbers_are_rejected() {
        let now = day(2024, 6, 1);
        let event = schedule(vec![round(1, None, false), round(1, None, true)], 0);
        assert!(classify(&event, now).is_err());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(EventStatusLabel::Completed.to_string(), "COMPLETED");
        assert_eq!(EventStatusLabel::RoundOngoing(3).to_string(), "ROUND 3 ONGOING");
        assert_eq!(EventStatusLabel::YetToStart.to_string(), "YET_TO_START");
    }
}
