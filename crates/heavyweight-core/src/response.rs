//! Uniform response envelopes.
//!
//! Successful responses are wrapped as
//!
//! ```json
//! { "status": "success", "data": ... }
//! ```
//!
//! and paginated responses additionally carry a `meta` block with
//! [`PaginationMeta`]. Failures use [`ErrorResponse`], produced by
//! [`AppError`](crate::errors::AppError).

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::pagination::{PaginationMeta, PaginationParams, paginate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Success,
    Error,
}

/// Generic response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// The status of the request
    pub status: ResponseStatus,
    /// The data
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Generic paginated response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// The status of the request
    pub status: ResponseStatus,
    /// The items on the requested page
    pub data: Vec<T>,
    /// The pagination metadata
    pub meta: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, meta: PaginationMeta) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
            meta,
        }
    }
}

impl<T: Clone> PaginatedResponse<T> {
    /// Cuts the requested page out of an already ordered collection.
    pub fn from_slice(items: &[T], params: &PaginationParams) -> Self {
        let (data, meta) = paginate(items, params);
        Self::new(data, meta)
    }
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `error`
    pub status: ResponseStatus,
    /// Human readable description of the failure
    pub message: String,
    /// Optional structured details, e.g. field validation errors
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data,
        }
    }
}
