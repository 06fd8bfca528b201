use std::any::Any;

use anyhow::anyhow;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::{CompressionLayer, predicate::SizeAbove};
use tower_http::cors::{self, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use heavyweight_config::CorsConfig;
use heavyweight_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::example::init_example_router;
use crate::modules::health::init_health_router;
use crate::state::AppState;

/// Responses smaller than this many bytes are sent uncompressed.
pub const COMPRESSION_MIN_SIZE: u16 = 5000;

pub fn init_router(state: AppState) -> Router {
    let cors_config = state.settings.cors.clone();

    let router = Router::new()
        .merge(Scalar::with_url("/", ApiDoc::openapi()))
        .route("/openapi.json", get(openapi_json))
        .nest("/health", init_health_router())
        .nest("/example", init_example_router())
        .fallback(not_found)
        .with_state(state);

    apply_middleware(router, &cors_config)
}

/// Wraps a router in the HTTP middleware stack shared by every route.
pub fn apply_middleware(router: Router, cors_config: &CorsConfig) -> Router {
    router
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(COMPRESSION_MIN_SIZE)))
        .layer(cors_layer(cors_config))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    // Browsers reject credentials on wildcard responses.
    if cors_config.allows_any() {
        return CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods(cors::Any)
            .allow_headers(cors::Any);
    }

    let allowed_origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(anyhow!("Handler panicked: {}", detail)).into_response()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::not_found(anyhow!("Not found"))
}
