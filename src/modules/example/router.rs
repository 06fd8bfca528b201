use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::route_example_endpoint;

pub fn init_example_router() -> Router<AppState> {
    Router::new().route("/", get(route_example_endpoint))
}
