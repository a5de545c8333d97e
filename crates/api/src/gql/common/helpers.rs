use async_graphql::{Result, ID};

use crate::gql::error::ResultExt;

/// Event ids are integers exposed as GraphQL `ID`s.
pub fn parse_event_id(id: &ID) -> Result<i32> {
    id.as_str().trim().parse::<i32>().gql_err("Invalid event ID")
}
