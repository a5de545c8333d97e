use infra::event_status::EventStatusError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any variant converts via `?` once wrapped:
///   - `From<sqlx::Error>`: logs the DB detail, shows a sanitized message to clients
///   - `From<EventStatusError>`: logs and reports the inconsistent schedule
///   - `GqlError::new("…")`: custom one-off messages
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    EventStatus(EventStatusError),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::EventStatus(e) => {
                tracing::warn!("Cannot derive event status: {e}");
                write!(f, "Invalid event schedule: {e}")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<EventStatusError> for GqlError {
    fn from(e: EventStatusError) -> Self {
        GqlError::EventStatus(e)
    }
}

/// Converts any `Result<T, E>` where `E: Display` into
/// `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `id.parse::<i32>().gql_err("Invalid event ID")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}
