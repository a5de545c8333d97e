use crate::repos::events::EventCategory;
use crate::repos::winners::WinnerPosition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: EventCategory,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RoundRow {
    pub event_id: i32,
    pub round_no: i32,
    pub date: Option<DateTime<Utc>>,
    pub completed: bool,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WinnerRow {
    pub id: i32,
    pub event_id: i32,
    pub team_id: i32,
    pub position: WinnerPosition,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: i32,
    pub name: String,
    pub event_id: i32,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

/// A published event together with everything needed to derive its status.
///
/// `rounds` is ordered by `round_no` ascending.
#[derive(Debug, Clone)]
pub struct EventSchedule {
    pub id: i32,
    pub name: String,
    pub rounds: Vec<RoundRow>,
    pub winner_count: i64,
}

impl EventSchedule {
    pub fn has_winners(&self) -> bool {
        self.winner_count > 0
    }
}
