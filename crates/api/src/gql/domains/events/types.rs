use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::auth::permissions::current_user_id;
use crate::gql::common::helpers::parse_event_id;
use crate::gql::error::{GqlError, ResultExt};
use crate::gql::loaders::RoundsByEventLoader;
use crate::state::AppState;
use infra::repos::{teams, winners};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum EventCategory {
    Core,
    Technical,
    NonTechnical,
    Special,
}

impl From<infra::repos::EventCategory> for EventCategory {
    fn from(category: infra::repos::EventCategory) -> Self {
        match category {
            infra::repos::EventCategory::Core => EventCategory::Core,
            infra::repos::EventCategory::Technical => EventCategory::Technical,
            infra::repos::EventCategory::NonTechnical => EventCategory::NonTechnical,
            infra::repos::EventCategory::Special => EventCategory::Special,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum WinnerPosition {
    Winner,
    RunnerUp,
    SecondRunnerUp,
}

impl From<infra::repos::WinnerPosition> for WinnerPosition {
    fn from(position: infra::repos::WinnerPosition) -> Self {
        match position {
            infra::repos::WinnerPosition::Winner => WinnerPosition::Winner,
            infra::repos::WinnerPosition::RunnerUp => WinnerPosition::RunnerUp,
            infra::repos::WinnerPosition::SecondRunnerUp => WinnerPosition::SecondRunnerUp,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Event {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub category: EventCategory,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::EventRow> for Event {
    fn from(row: infra::models::EventRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            category: row.category.into(),
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Round {
    pub event_id: ID,
    pub round_no: i32,
    pub date: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl From<infra::models::RoundRow> for Round {
    fn from(row: infra::models::RoundRow) -> Self {
        Self {
            event_id: row.event_id.into(),
            round_no: row.round_no,
            date: row.date,
            completed: row.completed,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Winner {
    pub id: ID,
    pub event_id: ID,
    pub team_id: ID,
    pub position: WinnerPosition,
}

impl From<infra::models::WinnerRow> for Winner {
    fn from(row: infra::models::WinnerRow) -> Self {
        Self {
            id: row.id.into(),
            event_id: row.event_id.into(),
            team_id: row.team_id.into(),
            position: row.position.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Team {
    pub id: ID,
    pub name: String,
    pub event_id: ID,
    pub confirmed: bool,
}

impl From<infra::models::TeamRow> for Team {
    fn from(row: infra::models::TeamRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            event_id: row.event_id.into(),
            confirmed: row.confirmed,
        }
    }
}

#[ComplexObject]
impl Event {
    /// Rounds in ascending `roundNo` order.
    async fn rounds(&self, ctx: &Context<'_>) -> Result<Vec<Round>> {
        let loader = ctx.data::<DataLoader<RoundsByEventLoader>>()?;
        let event_id = parse_event_id(&self.id)?;

        let rows = loader
            .load_one(event_id)
            .await
            .gql_err("Loading rounds failed")?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Round::from).collect())
    }

    async fn winners(&self, ctx: &Context<'_>) -> Result<Vec<Winner>> {
        let state = ctx.data::<AppState>()?;
        let event_id = parse_event_id(&self.id)?;

        let rows = winners::list_by_event(&state.db, event_id)
            .await
            .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Winner::from).collect())
    }

    /// Teams of this event the caller belongs to. Empty for anonymous callers.
    async fn my_teams(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let Some(user_id) = current_user_id(ctx)? else {
            return Ok(Vec::new());
        };

        let state = ctx.data::<AppState>()?;
        let event_id = parse_event_id(&self.id)?;

        let rows = teams::list_for_member_in_event(&state.db, user_id, event_id)
            .await
            .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}
