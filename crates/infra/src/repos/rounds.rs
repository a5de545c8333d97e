use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::RoundRow;

/// Rounds of several events, grouped by event and ordered by `round_no`.
pub async fn list_by_events<'e>(
    executor: impl PgExecutor<'e>,
    event_ids: &[i32],
) -> SqlxResult<Vec<RoundRow>> {
    if event_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, RoundRow>(
        r#"
        SELECT event_id, round_no, date, completed
        FROM rounds
        WHERE event_id = ANY($1::int4[])
        ORDER BY event_id ASC, round_no ASC
        "#,
    )
    .bind(event_ids)
    .fetch_all(executor)
    .await
}
