// HTTP routes

mod http;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::stats::StatsCollector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: StatsCollector,
}

pub fn app(collector: StatsCollector) -> Router {
    let state = AppState { collector };
    Router::new()
        .route("/stats", get(http::stats_handler)) // GET /stats
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
