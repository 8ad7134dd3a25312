use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::db::queries::find_site_by_code;
use crate::errors::AppError;
use crate::http::pages;
use crate::http::state::AppState;

/// GET /terminal/{site_code} -- clock terminal page bound to one site.
async fn terminal_view(State(state): State<AppState>, Path(site_code): Path<String>) -> Response {
    let locale = state.config.locale;

    let site = state
        .with_db(move |pool| {
            find_site_by_code(&pool.conn, &site_code)?
                .ok_or(AppError::UnknownSite(site_code))
        })
        .await;

    match site {
        Ok(site) => Html(pages::terminal_page(&site, locale)).into_response(),
        Err(err) => err.into_plain_response(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/terminal/{site_code}", get(terminal_view))
}
