use axum::Json;
use tracing::instrument;

use crate::middleware::db::Db;
use crate::modules::health::model::HealthResponse;

/// Succeeds once a database session could be acquired and released.
#[instrument(skip_all)]
pub async fn health_check(Db(session): Db) -> Json<HealthResponse> {
    session.close();
    Json(HealthResponse::ok())
}
