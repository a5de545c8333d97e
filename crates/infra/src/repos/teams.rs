use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::TeamRow;

/// Teams of `event_id` that `user_id` is a member of.
pub async fn list_for_member_in_event<'e>(
    executor: impl PgExecutor<'e>,
    user_id: i32,
    event_id: i32,
) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT t.id, t.name, t.event_id, t.confirmed, t.created_at
        FROM teams t
        JOIN team_members tm ON tm.team_id = t.id
        WHERE t.event_id = $1 AND tm.user_id = $2
        ORDER BY t.id ASC
        "#,
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_all(executor)
    .await
}
