//! Regex check record and request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// One persisted outcome of a check request. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RegexCheck {
    pub id: i64,
    pub pattern: String,
    pub test_string: String,
    pub matched: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/check` as sent by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub pattern: Option<String>,
    #[serde(alias = "testString")]
    pub test_string: Option<String>,
}

/// A check request whose fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegexCheck {
    pub pattern: String,
    pub test_string: String,
}

impl CheckRequest {
    /// Reject missing or empty fields. An empty string counts as missing.
    pub fn validate(self) -> Result<NewRegexCheck, AppError> {
        Ok(NewRegexCheck {
            pattern: required(self.pattern, "pattern")?,
            test_string: required(self.test_string, "test_string")?,
        })
    }
}

/// Body of `POST /api/filter`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterRequest {
    pub pattern: Option<String>,
    #[serde(default)]
    pub candidates: Vec<String>,
}

/// Candidates matched by a filter pattern, in request order.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    pub pattern: String,
    pub matches: Vec<String>,
}

pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pattern: Option<&str>, test_string: Option<&str>) -> CheckRequest {
        CheckRequest {
            pattern: pattern.map(str::to_string),
            test_string: test_string.map(str::to_string),
        }
    }

    #[test]
    fn validate_accepts_both_fields() {
        let check = request(Some("^a"), Some("abc")).validate().unwrap();
        assert_eq!(check.pattern, "^a");
        assert_eq!(check.test_string, "abc");
    }

    #[test]
    fn validate_names_missing_field() {
        let err = request(None, Some("abc")).validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("pattern")));

        let err = request(Some("^a"), None).validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("test_string")));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err = request(Some(""), Some("")).validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("pattern")));

        let err = request(Some("a"), Some("")).validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("test_string")));
    }

    #[test]
    fn camel_case_alias_is_accepted() {
        let req: CheckRequest =
            serde_json::from_str(r#"{"pattern": "x", "testString": "xyz"}"#).unwrap();
        assert_eq!(req.test_string.as_deref(), Some("xyz"));
    }

    #[test]
    fn record_serializes_snake_case_with_rfc3339_timestamp() {
        let record = RegexCheck {
            id: 7,
            pattern: "^[0-9]+$".to_string(),
            test_string: "12345".to_string(),
            matched: true,
            created_at: "2026-10-18T09:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["test_string"], "12345");
        assert_eq!(json["matched"], true);
        assert_eq!(json["created_at"], "2026-10-18T09:30:00Z");
    }

    #[test]
    fn filter_candidates_default_to_empty() {
        let req: FilterRequest = serde_json::from_str(r#"{"pattern": "10\\."}"#).unwrap();
        assert!(req.candidates.is_empty());
    }
}
