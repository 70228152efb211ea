//! Regex check evaluation and persistence.

use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::regex_check::{NewRegexCheck, RegexCheck};
use crate::services::matcher;

/// Number of records returned by [`recent`].
pub const HISTORY_LIMIT: i64 = 10;

/// Evaluate a validated check and store the outcome.
///
/// Invalid patterns are rejected before anything is written.
pub async fn check(pool: &SqlitePool, input: &NewRegexCheck) -> Result<RegexCheck, AppError> {
    let matched = matcher::evaluate(&input.pattern, &input.test_string)?;
    let record = create(pool, input, matched).await?;

    tracing::info!(id = record.id, matched, "Stored regex check");
    Ok(record)
}

/// Insert a new record, letting the store assign `id` and `created_at`.
pub async fn create(
    pool: &SqlitePool,
    input: &NewRegexCheck,
    matched: bool,
) -> Result<RegexCheck, AppError> {
    let record = sqlx::query_as::<_, RegexCheck>(
        r#"
        INSERT INTO regex_checks (pattern, test_string, matched)
        VALUES (?, ?, ?)
        RETURNING id, pattern, test_string, matched, created_at
        "#,
    )
    .bind(&input.pattern)
    .bind(&input.test_string)
    .bind(matched)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// Most recent records, newest first. Ties on `created_at` fall back to `id`.
pub async fn recent(pool: &SqlitePool) -> Result<Vec<RegexCheck>, AppError> {
    let records = sqlx::query_as::<_, RegexCheck>(
        r#"
        SELECT id, pattern, test_string, matched, created_at
        FROM regex_checks
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(records)
}
