// GET handlers: stats

use axum::{Json, extract::State};

use super::AppState;
use crate::models::Snapshot;

/// GET /stats — fresh CPU, memory and disk readings. Always 200; failed
/// metrics are already 0.0 in the snapshot.
pub(super) async fn stats_handler(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.collector.collect_blocking().await)
}
