use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::core::clock::{ClockLogic, ClockRequest};
use crate::http::error::{ApiError, ApiResult};
use crate::http::state::AppState;

/// Body of an accepted clock event.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub status: &'static str,
    pub message: String,
}

/// POST /api/zaznam -- validate and record a terminal event.
async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<ClockRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RecordResponse>)> {
    let Json(req) = payload
        .map_err(|e| ApiError::BadRequest(format!("Missing or malformed data: {}", e.body_text())))?;

    let strict = state.config.strict_conflict_status;
    let locale = state.config.locale;

    let recorded = state
        .with_db(move |pool| ClockLogic::record(pool, &req))
        .await
        .map_err(|e| e.with_conflict_policy(strict))?;

    tracing::info!(
        event_id = recorded.event.id,
        employee = %recorded.employee.personnel_code,
        site = %recorded.site.code,
        kind = recorded.event.kind.wire_key(),
        "Clock event recorded"
    );

    let message = format!(
        "Record '{}' for {} saved.",
        recorded.event.kind.label(locale),
        recorded.employee.full_name()
    );

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse {
            status: "success",
            message,
        }),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/zaznam", post(create_record))
}
