use async_graphql::{Context, Object, Result};

use super::types::EventStatus;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::event_status::classify;
use infra::repos::events;

#[derive(Default)]
pub struct EventStatusQuery;

#[Object]
impl EventStatusQuery {
    /// Status of every published event, in event id order.
    async fn get_event_status(&self, ctx: &Context<'_>) -> Result<Vec<EventStatus>> {
        let state = ctx.data::<AppState>()?;

        let schedules = events::fetch_published_schedules(&state.db)
            .await
            .map_err(GqlError::from)?;

        let now = state.clock().now();
        tracing::debug!(%now, events = schedules.len(), "Classifying event statuses");

        let statuses = schedules
            .iter()
            .map(|schedule| classify(schedule, now).map(EventStatus::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(GqlError::from)?;

        Ok(statuses)
    }
}
