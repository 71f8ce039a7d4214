use axum::{extract::State, http::StatusCode, Json};
use refund_core::{Group, RefundError};
use serde::Serialize;
use std::sync::Arc;

use super::{reject, ApiError};
use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct SubgroupList {
    pub subgroups: Vec<Group>,
}

/// GET /api/subgroups: the configured groups, in configuration order.
pub async fn subgroups_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SubgroupList>, ApiError> {
    if state.groups.is_empty() {
        return Err(reject(&RefundError::NoGroups));
    }

    Ok(Json(SubgroupList {
        subgroups: state.groups.as_slice().to_vec(),
    }))
}
