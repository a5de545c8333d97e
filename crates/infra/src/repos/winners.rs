use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::WinnerRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "winner_position", rename_all = "snake_case")]
pub enum WinnerPosition {
    Winner,
    RunnerUp,
    SecondRunnerUp,
}

pub async fn list_by_event<'e>(
    executor: impl PgExecutor<'e>,
    event_id: i32,
) -> SqlxResult<Vec<WinnerRow>> {
    sqlx::query_as::<_, WinnerRow>(
        r#"
        SELECT id, event_id, team_id, position, created_at
        FROM winners
        WHERE event_id = $1
        ORDER BY position ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(executor)
    .await
}

/// Ids of every event with at least one winner.
pub async fn event_ids_with_winners<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT DISTINCT event_id
        FROM winners
        ORDER BY event_id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Winner counts keyed by event. Events without winners are absent.
pub async fn count_by_events<'e>(
    executor: impl PgExecutor<'e>,
    event_ids: &[i32],
) -> SqlxResult<Vec<(i32, i64)>> {
    if event_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, (i32, i64)>(
        r#"
        SELECT event_id, COUNT(*)
        FROM winners
        WHERE event_id = ANY($1::int4[])
        GROUP BY event_id
        "#,
    )
    .bind(event_ids)
    .fetch_all(executor)
    .await
}
