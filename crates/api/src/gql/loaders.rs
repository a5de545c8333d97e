use async_graphql::dataloader::Loader;
use infra::{db::Db, models::RoundRow, repos::rounds};
use std::{collections::HashMap, future::Future, sync::Arc};

/// Batch loads the rounds of many events in one query.
///
/// Events without rounds are absent from the returned map.
#[derive(Clone)]
pub struct RoundsByEventLoader {
    pool: Db,
}

impl RoundsByEventLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for RoundsByEventLoader {
    type Value = Vec<RoundRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let event_ids: Vec<i32> = keys.to_vec();

        async move {
            let rows = rounds::list_by_events(&pool, &event_ids)
                .await
                .map_err(Arc::new)?;

            let mut grouped: HashMap<i32, Vec<RoundRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.event_id).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}
