//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

/// Response header telling whether results are live or synthetic
pub const SEARCH_SOURCE_HEADER: &str = "x-search-source";

/// Query parameters for search
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Engine name, defaults to google
    pub engine: Option<String>,
}

impl SearchParams {
    /// Collect parameters from raw query pairs. Repeated keys keep their
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "engine" if params.engine.is_none() => params.engine = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from_pairs(pairs);
    match state
        .dispatcher
        .handle(params.q.as_deref(), params.engine.as_deref())
        .await
    {
        Ok(outcome) => {
            let source = HeaderValue::from_static(outcome.source());
            let body = Json(outcome.into_search_response());
            let header = HeaderName::from_static(SEARCH_SOURCE_HEADER);
            ([(header, source)], body).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }))
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match self {
            SearchError::BadRequest => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Query parameter required" })),
            )
                .into_response(),
            SearchError::Internal(details) => search_failed(details),
            other => search_failed(other.to_string()),
        }
    }
}

fn search_failed(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Search failed", "details": details })),
    )
        .into_response()
}
