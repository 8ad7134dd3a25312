use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::core::report::{ReportLogic, ReportRequest};
use crate::http::error::{ApiError, ApiResult};
use crate::http::pages;
use crate::http::state::AppState;
use crate::models::status::StatusScope;
use crate::utils::date::{parse_date, today};

/// Query string of `GET /export`.
#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Only `today` is recognized.
    pub predefined: Option<String>,
    pub status_scope: Option<String>,
}

impl ExportParams {
    /// Resolve the request into a report request; dates are not reordered.
    fn to_request(&self, state: &AppState) -> ApiResult<ReportRequest> {
        let (start, end) = if self.predefined.as_deref() == Some("today") {
            let d = today();
            (d, d)
        } else {
            let (Some(start), Some(end)) = (
                self.start_date.as_deref().filter(|s| !s.is_empty()),
                self.end_date.as_deref().filter(|s| !s.is_empty()),
            ) else {
                return Err(ApiError::BadRequest(
                    "Error: both start_date and end_date are required.".into(),
                ));
            };

            match (parse_date(start), parse_date(end)) {
                (Some(s), Some(e)) => (s, e),
                _ => {
                    return Err(ApiError::BadRequest(
                        "Error: invalid date format, use YYYY-MM-DD.".into(),
                    ));
                }
            }
        };

        let scope = match &self.status_scope {
            Some(raw) => raw.parse::<StatusScope>()?,
            None => state.config.report_status_scope,
        };

        Ok(ReportRequest {
            start,
            end,
            scope,
            locale: state.config.locale,
        })
    }
}

/// GET /report -- date range selection form.
async fn report_form(State(state): State<AppState>) -> Html<String> {
    Html(pages::report_page(
        state.config.locale,
        state.config.report_status_scope,
    ))
}

/// GET /export -- CSV report for a date range.
async fn export_csv(State(state): State<AppState>, Query(params): Query<ExportParams>) -> Response {
    let req = match params.to_request(&state) {
        Ok(req) => req,
        Err(err) => return err.into_plain_response(),
    };

    let report = state
        .with_db(move |pool| ReportLogic::build_report(&pool.conn, &req))
        .await;

    match report {
        Ok(report) => {
            tracing::info!(
                start = %req.start,
                end = %req.end,
                rows = report.row_count,
                "CSV report exported"
            );
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        CONTENT_DISPOSITION,
                        format!("attachment;filename={}", report.filename),
                    ),
                ],
                report.bytes,
            )
                .into_response()
        }
        Err(err) => err.into_plain_response(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/report", get(report_form))
        .route("/export", get(export_csv))
}

