//! API Error Surface
//!
//! Request-scoped failures and their HTTP mapping. Every variant serializes
//! as the uniform `{"success": false, "error": "..."}` body so clients can
//! branch on `success` alone.
//!
//! Catalog load failures never appear here: the loader absorbs them at
//! startup and the service runs with an empty catalog instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A lookup by id or category produced nothing. Distinct from an
    /// empty-but-valid filtered listing, which is a success with `count: 0`.
    #[error("{0} not found")]
    NotFound(String),

    /// A request parameter failed validation (non-numeric bound, malformed
    /// boolean, non-finite float). Rejected rather than degraded into a
    /// match-nothing filter.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    /// Anything unexpected. The body stays generic; the cause is logged
    /// server-side only.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            Self::Internal(ref cause) => {
                tracing::error!("Unhandled failure while serving request: {:#}", cause);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
