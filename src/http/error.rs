use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::errors::AppError;

/// Error type for HTTP handlers.
///
/// Wraps [`AppError`] for domain and storage errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the terminal API's
/// `{ "status": "error", "code", "message" }` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Error from the application layer, legacy status mapping
    /// ("already clocked in" answers 410).
    #[error(transparent)]
    App(#[from] AppError),

    /// Same as `App`, but "already clocked in" answers 409.
    #[error(transparent)]
    Strict(AppError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Apply the configured status for "already clocked in".
    pub fn with_conflict_policy(self, strict: bool) -> Self {
        match self {
            ApiError::App(err) if strict => ApiError::Strict(err),
            other => other,
        }
    }

    /// Status, stable error code and client-facing message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::App(err) => classify_app_error(err, StatusCode::GONE),
            ApiError::Strict(err) => classify_app_error(err, StatusCode::CONFLICT),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }

    /// Plain-text variant of the response, used by the export and page routes.
    pub fn into_plain_response(self) -> Response {
        let (status, _, message) = self.classify();
        (status, message).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "status": "error",
            "code": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map an [`AppError`] to status and code.
///
/// Request rejections keep their message; storage, filesystem and
/// configuration failures map to 500 with a sanitized message.
fn classify_app_error(
    err: &AppError,
    already_in_status: StatusCode,
) -> (StatusCode, &'static str, String) {
    let (status, code) = match err {
        AppError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
        AppError::InvalidEventKind(_) => (StatusCode::BAD_REQUEST, "INVALID_EVENT_KIND"),
        AppError::InvalidDateRange(_) => (StatusCode::BAD_REQUEST, "INVALID_DATE_RANGE"),
        AppError::InvalidStatusScope(_) => (StatusCode::BAD_REQUEST, "INVALID_STATUS_SCOPE"),
        AppError::UnknownEmployee(_) => (StatusCode::NOT_FOUND, "UNKNOWN_EMPLOYEE"),
        AppError::UnknownSite(_) => (StatusCode::NOT_FOUND, "UNKNOWN_SITE"),
        AppError::NoPriorArrival { .. } => (StatusCode::CONFLICT, "NO_PRIOR_ARRIVAL"),
        AppError::AlreadyClockedIn { .. } => (already_in_status, "ALREADY_CLOCKED_IN"),
        AppError::Duplicate(_) => (StatusCode::CONFLICT, "DUPLICATE"),
        other => {
            tracing::error!(error = %other, "Request failed");
            return internal();
        }
    };

    if err.is_rejection() {
        tracing::debug!(code, error = %err, "Request rejected");
    }

    (status, code, err.to_string())
}
