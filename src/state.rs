use std::sync::Arc;

use heavyweight_auth::JwtConfig;
use heavyweight_config::Settings;
use heavyweight_db::{Database, DbError, PoolSettings};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub settings: Arc<Settings>,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn new(settings: Arc<Settings>, db: Database) -> Self {
        Self {
            jwt_config: JwtConfig::from_settings(&settings),
            db,
            settings,
        }
    }
}

/// Builds the shared state. The database pool connects lazily, so this
/// succeeds even while the database is unreachable.
pub fn init_app_state(settings: Arc<Settings>) -> Result<AppState, DbError> {
    let db = Database::connect_lazy(
        &settings.database_url,
        PoolSettings {
            max_connections: settings.database_max_connections,
            acquire_timeout: settings.database_acquire_timeout,
        },
    )?;

    Ok(AppState::new(settings, db))
}
