use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, debug, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Logs one event per request, at a level chosen by the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %req.method(),
        path = %path
    );

    async move {
        debug!("Incoming request");

        let response = next.run(req).await;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis();

        if status.is_server_error() {
            error!(status = status.as_u16(), latency_ms, "Server error");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), latency_ms, "Client error");
        } else {
            info!(status = status.as_u16(), latency_ms, "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}

/// Default filter directives when `RUST_LOG` is unset.
pub fn default_filter(debug: bool) -> String {
    if debug {
        format!(
            "{}=debug,heavyweight_db=trace,tower_http=debug,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        )
    } else {
        format!("{}=info,tower_http=warn", env!("CARGO_CRATE_NAME"))
    }
}

/// Installs the global subscriber.
///
/// Debug mode logs human-readable compact lines; otherwise every event is a
/// JSON object on stdout. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if debug {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter(true).contains("heavyweight=debug"));
        assert!(default_filter(false).contains("heavyweight=info"));
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(true);
        init_tracing(false);
    }
}
