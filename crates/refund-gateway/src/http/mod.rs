pub mod health;
pub mod refund;
pub mod subgroups;
pub mod ui;

use axum::{http::StatusCode, Json};
use refund_core::RefundError;
use serde::Serialize;
use tracing::{error, warn};

/// Body of every failed API response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

/// Map a domain error to its HTTP response: client input errors are 400,
/// everything else is 500.
pub fn reject(err: &RefundError) -> ApiError {
    let status = if err.is_client_error() {
        warn!(
            code = err.code(),
            subgroup = err.rejected_subgroup(),
            error = %err,
            "request rejected"
        );
        StatusCode::BAD_REQUEST
    } else {
        match err {
            RefundError::Delivery { reason } => {
                error!(code = err.code(), reason = %reason, "delivery failed")
            }
            other => error!(code = other.code(), error = %other, "server error"),
        }
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorBody {
            error: err.user_message(),
        }),
    )
}
