use async_graphql::MergedObject;

use crate::gql::domains::event_status::EventStatusQuery;
use crate::gql::domains::events::EventQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventQuery, EventStatusQuery);
