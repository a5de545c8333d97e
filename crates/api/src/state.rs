use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{AuthConfig, JwtService};
use crate::services::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    jwt_service: JwtService,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: PgPool) -> anyhow::Result<Self> {
        let auth_config = AuthConfig::from_env()?;
        Ok(Self::with_config(db, auth_config))
    }

    pub fn with_config(db: PgPool, auth_config: AuthConfig) -> Self {
        let jwt_service = JwtService::new(&auth_config);

        Self {
            db,
            jwt_service,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source used for derived statuses.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
