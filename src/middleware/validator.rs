use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use heavyweight_core::AppError;
use heavyweight_core::errors::VALIDATION_ERROR_MESSAGE;

/// Query string extractor that also runs [`Validate`].
///
/// Malformed values and failed rules both reject with 422 and the validation
/// error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::unprocessable(anyhow!(VALIDATION_ERROR_MESSAGE))
                    .with_details(json!({ "query": [rejection.body_text()] }))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(&errors))?;

        Ok(ValidatedQuery(value))
    }
}
