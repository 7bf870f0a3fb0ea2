//! API error type and its JSON rendering.
//!
//! Every failure body has the shape `{"error": ...}`: a list of violations
//! for validation failures, a message string otherwise.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog::ValidationError;
use db::DbError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body failed field validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body could not be read as JSON (400).
    #[error("{0}")]
    BadRequest(String),

    /// No record with the requested id (404).  Holds the resource name.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Store failure, passed through as-is (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a `DbError` for `resource`; a missing row becomes `NotFound`.
    pub fn db(resource: &'static str) -> impl Fn(DbError) -> ApiError {
        move |err| match err {
            DbError::NotFound => ApiError::NotFound(resource),
            other => ApiError::Internal(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(err) => json!({ "error": err.violations }),
            Self::Internal(message) => {
                error!(error = %message, "request failed");
                json!({ "error": message })
            }
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
