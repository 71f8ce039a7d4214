//! Refund submission endpoint, POST /api/refund
//!
//! Request:  `{"subgroup": "...", "name": "...", "bankName": "...", "accountNumber": "...", "memo": "..."}`
//! Response: `{"success": true, "message": "..."}`
//! Error:    `{"error": "..."}` with 400 (bad input) or 500 (config / delivery)

use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use refund_core::{validate, RefundError, RefundRequest};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::{reject, ApiError};
use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct RefundReply {
    pub success: bool,
    pub message: String,
}

/// POST /api/refund: validate a submission and forward it to the group's
/// Slack channel.
///
/// The body is parsed by hand so malformed JSON gets the same `{"error"}`
/// shape as every other rejection.
pub async fn refund_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RefundReply>, ApiError> {
    submit(&state, &body).await.map_err(|e| reject(&e))?;

    Ok(Json(RefundReply {
        success: true,
        message: "Refund request submitted successfully".to_string(),
    }))
}

async fn submit(state: &AppState, body: &[u8]) -> refund_core::Result<()> {
    let req = RefundRequest::from_json(body)?;
    let validated = validate(&req, &state.groups)?;

    let sink = state.sink.as_ref().ok_or(RefundError::MissingToken)?;

    let msg = refund_slack::compose(&validated, Utc::now());
    sink.post(&msg)
        .await
        .map_err(|e| RefundError::Delivery {
            reason: e.to_string(),
        })?;

    info!(
        group = %validated.group,
        channel = %msg.channel,
        sink = sink.name(),
        memo = validated.memo.is_some(),
        "refund request forwarded"
    );
    Ok(())
}
