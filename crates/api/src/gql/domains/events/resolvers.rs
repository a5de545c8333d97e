use async_graphql::connection::{query, Connection, Edge};
use async_graphql::{Context, Object, Result, ID};

use super::types::Event;
use crate::auth::permissions::require_user_id;
use crate::gql::common::helpers::parse_event_id;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::pagination::{IdPage, PageDirection};
use infra::repos::{events, events::PublishedPartition};

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    /// Events whose name or description contains `contains`, as a cursor
    /// connection ordered by id.
    async fn events(
        &self,
        ctx: &Context<'_>,
        contains: Option<String>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<i32, Event>> {
        let state = ctx.data::<AppState>()?;
        let db = state.db.clone();
        let filter = contains.unwrap_or_default();

        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                let page = IdPage::from_relay(after, before, first, last);
                let rows = events::search(&db, &filter, page)
                    .await
                    .map_err(GqlError::from)?;
                let (rows, has_more) = page.finish(rows);

                let (has_previous_page, has_next_page) = match page.direction {
                    PageDirection::Forward => (page.after.is_some(), has_more),
                    PageDirection::Backward => (has_more, page.before.is_some()),
                };

                let mut connection = Connection::new(has_previous_page, has_next_page);
                connection.edges.extend(
                    rows.into_iter()
                        .map(|row| Edge::new(row.id, Event::from(row))),
                );
                Ok::<_, async_graphql::Error>(connection)
            },
        )
        .await
    }

    async fn event_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Event> {
        let state = ctx.data::<AppState>()?;
        let event_id = parse_event_id(&id)?;

        events::get_by_id(&state.db, event_id)
            .await
            .map_err(GqlError::from)?
            .map(Event::from)
            .ok_or_else(|| GqlError::new("Event not found").into())
    }

    /// Events the caller is registered for through team membership.
    async fn registered_events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let user_id = require_user_id(ctx)?;
        let state = ctx.data::<AppState>()?;

        let rows = events::list_registered_for_user(&state.db, user_id)
            .await
            .map_err(GqlError::from)?;

        tracing::debug!(user_id, count = rows.len(), "Loaded registered events");

        Ok(rows.into_iter().map(Event::from).collect())
    }

    /// Published events: core events first, then the rest, each sorted by name.
    async fn published_events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let state = ctx.data::<AppState>()?;

        let (core, non_core) = tokio::try_join!(
            events::list_published(&state.db, PublishedPartition::Core),
            events::list_published(&state.db, PublishedPartition::NonCore)
        )
        .map_err(GqlError::from)?;

        Ok(core
            .into_iter()
            .chain(non_core)
            .map(Event::from)
            .collect())
    }

    /// Events with at least one recorded winner.
    async fn completed_events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let state = ctx.data::<AppState>()?;

        let rows = events::list_completed(&state.db)
            .await
            .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
