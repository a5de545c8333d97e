use async_graphql::SimpleObject;

/// Derived status of a published event.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct EventStatus {
    pub event_name: String,
    /// `COMPLETED`, `ROUND <n> ONGOING` or `YET_TO_START`.
    pub status: String,
}

impl From<infra::event_status::EventStatus> for EventStatus {
    fn from(status: infra::event_status::EventStatus) -> Self {
        Self {
            event_name: status.name,
            status: status.status.to_string(),
        }
    }
}
