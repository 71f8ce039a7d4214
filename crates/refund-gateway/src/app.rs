use axum::{
    routing::{get, post},
    Router,
};
use refund_core::{GroupDirectory, RefundConfig};
use refund_slack::MessageSink;
use std::sync::Arc;

/// Central shared state, passed as Arc<AppState> to all Axum handlers.
///
/// Built once at startup and never mutated.
pub struct AppState {
    pub config: RefundConfig,
    pub groups: GroupDirectory,
    /// `None` when no bot token is configured; submissions then fail with a
    /// configuration error instead of reaching Slack.
    pub sink: Option<Arc<dyn MessageSink>>,
}

impl AppState {
    pub fn new(config: RefundConfig, sink: Option<Arc<dyn MessageSink>>) -> Self {
        let groups = config.directory();
        Self {
            config,
            groups,
            sink,
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::http::ui::ui_handler))
        .route("/health", get(crate::http::health::health_handler))
        .route(
            "/api/subgroups",
            get(crate::http::subgroups::subgroups_handler),
        )
        .route("/api/refund", post(crate::http::refund::refund_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
