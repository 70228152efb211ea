//! Regex check routes: homepage, check, history, and filter.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::middleware::json_body::JsonBody;
use crate::models::regex_check::{self, CheckRequest, FilterRequest, FilterResult, RegexCheck};
use crate::services::matcher;
use crate::services::regex_check as check_service;
use crate::AppState;

/// Liveness text served on the root path.
pub const HOMEPAGE: &str = "Regex API is running! Use POST /api/check";

/// GET / — static liveness string.
pub async fn home() -> &'static str {
    HOMEPAGE
}

/// POST /api/check — evaluate a pattern against a string and store the outcome.
pub async fn check(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CheckRequest>,
) -> Result<Json<RegexCheck>, AppError> {
    let input = body.validate()?;
    let record = check_service::check(&state.db, &input).await?;
    Ok(Json(record))
}

/// GET /api/history — the most recent checks, newest first.
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<RegexCheck>>, AppError> {
    let records = check_service::recent(&state.db).await?;
    Ok(Json(records))
}

/// POST /api/filter — keep the candidates a pattern matches. Nothing is stored.
pub async fn filter(
    JsonBody(body): JsonBody<FilterRequest>,
) -> Result<Json<FilterResult>, AppError> {
    let pattern = regex_check::required(body.pattern, "pattern")?;
    let matches = matcher::filter(&pattern, &body.candidates)?
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(Json(FilterResult { pattern, matches }))
}
