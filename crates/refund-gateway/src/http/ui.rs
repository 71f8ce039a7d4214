use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the embedded refund form at `GET /`.
pub async fn ui_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode};
    use refund_core::RefundConfig;
    use tower::ServiceExt;

    use crate::http::testing::{get, router_with};

    #[tokio::test]
    async fn serves_form_page() {
        let resp = router_with(RefundConfig::default(), None)
            .oneshot(get("/"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/api/refund"));
        assert!(html.contains("name=\"accountNumber\""));
    }
}
