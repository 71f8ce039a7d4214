use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::app::AppState;

/// GET /health: liveness probe, returns server metadata and any
/// configuration problems that would make submissions fail.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let problems = state.config.problems();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "git_sha": env!("REFUND_GIT_SHA"),
        "groups": state.groups.len(),
        "config_ok": problems.is_empty(),
        "config_errors": problems,
    }))
}
