use axum::{extract::FromRequestParts, http::request::Parts};

use heavyweight_core::AppError;
use heavyweight_db::DbSession;

use crate::state::AppState;

/// A database session checked out for the current request.
///
/// Rejects with a 500 error envelope when no connection can be acquired.
/// The session goes back to the pool once the handler returns.
#[derive(Debug)]
pub struct Db(pub DbSession);

impl FromRequestParts<AppState> for Db {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.db.open().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to open database session");
            AppError::internal(e)
        })?;

        Ok(Db(session))
    }
}
