//! Application error type.
//!
//! Every failure that reaches the HTTP layer is an [`AppError`]. It renders as
//! the error envelope:
//!
//! ```json
//! { "status": "error", "message": "Not found", "data": null }
//! ```
//!
//! Server errors (5xx) never expose their cause to the client; the cause is
//! logged instead.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use validator::ValidationErrors;

use crate::response::ErrorResponse;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    /// Structured details rendered under `data` (e.g. field errors).
    pub details: Option<Value>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn bad_gateway<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_GATEWAY, err)
    }

    pub fn service_unavailable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, err)
    }

    /// 422 with one entry per invalid field under `data`.
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self::unprocessable(anyhow::anyhow!(VALIDATION_ERROR_MESSAGE))
            .with_details(field_errors(errors))
    }

    /// The message shown to clients.
    pub fn public_message(&self) -> String {
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            INTERNAL_SERVER_ERROR_MESSAGE.to_string()
        } else if self.status.is_server_error() {
            self.status
                .canonical_reason()
                .unwrap_or(INTERNAL_SERVER_ERROR_MESSAGE)
                .to_string()
        } else {
            self.error.to_string()
        }
    }
}

fn field_errors(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
            .map(Value::String)
            .collect();
        fields.insert(field.to_string(), Value::Array(messages));
    }
    Value::Object(fields)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status.as_u16(),
                error = ?self.error,
                "Request failed"
            );
        }

        let body = Json(ErrorResponse::new(self.public_message(), self.details));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
