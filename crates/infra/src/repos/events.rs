use std::collections::HashMap;

use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};

use crate::{
    db::Db,
    models::{EventRow, EventSchedule, RoundRow},
    pagination::{contains_pattern, IdPage, PageDirection},
    repos::{rounds, winners},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "event_category", rename_all = "snake_case")]
pub enum EventCategory {
    Core,
    Technical,
    NonTechnical,
    Special,
}

/// Which half of the published listing to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedPartition {
    Core,
    NonCore,
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> SqlxResult<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, name, description, category, published, created_at, updated_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[i32]) -> SqlxResult<Vec<EventRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, name, description, category, published, created_at, updated_at
        FROM events
        WHERE id = ANY($1::int4[])
        ORDER BY id ASC
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

/// Events whose name or description contains `contains`, paged by id.
///
/// Returns at most `page.fetch_limit()` rows in database order; pass the
/// result through `IdPage::finish` to trim and re-order.
pub async fn search<'e>(
    executor: impl PgExecutor<'e>,
    contains: &str,
    page: IdPage,
) -> SqlxResult<Vec<EventRow>> {
    let pattern = contains_pattern(contains);

    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT id, name, description, category, published, created_at, updated_at \
         FROM events WHERE (name LIKE ",
    );
    query.push_bind(pattern.clone());
    query.push(" OR description LIKE ");
    query.push_bind(pattern);
    query.push(")");

    if let Some(after) = page.after {
        query.push(" AND id > ");
        query.push_bind(after);
    }

    if let Some(before) = page.before {
        query.push(" AND id < ");
        query.push_bind(before);
    }

    query.push(match page.direction {
        PageDirection::Forward => " ORDER BY id ASC",
        PageDirection::Backward => " ORDER BY id DESC",
    });
    query.push(" LIMIT ");
    query.push_bind(page.fetch_limit());

    query.build_query_as::<EventRow>().fetch_all(executor).await
}

/// Events where `user_id` belongs to at least one team.
pub async fn list_registered_for_user<'e>(
    executor: impl PgExecutor<'e>,
    user_id: i32,
) -> SqlxResult<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT e.id, e.name, e.description, e.category, e.published, e.created_at, e.updated_at
        FROM events e
        WHERE EXISTS (
            SELECT 1
            FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            WHERE t.event_id = e.id AND tm.user_id = $1
        )
        ORDER BY e.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Published events of one partition, sorted by name.
pub async fn list_published<'e>(
    executor: impl PgExecutor<'e>,
    partition: PublishedPartition,
) -> SqlxResult<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, name, description, category, published, created_at, updated_at
        FROM events
        WHERE published = TRUE
          AND (category = 'core') = $1
        ORDER BY name ASC, id ASC
        "#,
    )
    .bind(partition == PublishedPartition::Core)
    .fetch_all(executor)
    .await
}

/// Events that have at least one recorded winner.
pub async fn list_completed(db: &Db) -> SqlxResult<Vec<EventRow>> {
    let event_ids = winners::event_ids_with_winners(db).await?;
    get_by_ids(db, &event_ids).await
}

/// Published events with their rounds (ascending `round_no`) and winner counts.
pub async fn fetch_published_schedules(db: &Db) -> SqlxResult<Vec<EventSchedule>> {
    let events: Vec<(i32, String)> = sqlx::query_as(
        r#"
        SELECT id, name
        FROM events
        WHERE published = TRUE
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db)
    .await?;

    let ids: Vec<i32> = events.iter().map(|(id, _)| *id).collect();

    let (round_rows, winner_counts) = tokio::try_join!(
        rounds::list_by_events(db, &ids),
        winners::count_by_events(db, &ids)
    )?;

    let mut rounds_by_event: HashMap<i32, Vec<RoundRow>> = HashMap::new();
    for round in round_rows {
        rounds_by_event.entry(round.event_id).or_default().push(round);
    }
    let winner_counts: HashMap<i32, i64> = winner_counts.into_iter().collect();

    Ok(events
        .into_iter()
        .map(|(id, name)| EventSchedule {
            id,
            name,
            rounds: rounds_by_event.remove(&id).unwrap_or_default(),
            winner_count: winner_counts.get(&id).copied().unwrap_or(0),
        })
        .collect())
}
