use serde::Deserialize;
use serde_json::Value;

use crate::constants::{
    ERR_INVALID_USERNAME, ERR_MISSING_FIELDS, MAX_LEVEL, MAX_USERNAME_CHARS, MIN_LEVEL,
};
use crate::error::AppError;
use crate::models::NewScore;

/// Body of `POST /api/scores`
///
/// Every field is optional at the JSON level; presence is checked in
/// [`SubmitScoreRequest::validate`]. A field of the wrong JSON type fails
/// deserialization and is reported the same way as a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitScoreRequest {
    pub username: Option<String>,
    pub score: Option<f64>,
    pub coins: Option<f64>,
    pub level: Option<f64>,
    /// Any JSON value, interpreted by truthiness
    pub completed: Option<Value>,
}

/// Reasons a submission is rejected before anything is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    MissingFields,
    InvalidUsername,
}

impl SubmissionError {
    pub fn message(self) -> &'static str {
        match self {
            SubmissionError::MissingFields => ERR_MISSING_FIELDS,
            SubmissionError::InvalidUsername => ERR_INVALID_USERNAME,
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        AppError::InvalidInput(err.message().to_string())
    }
}

/// A submission that passed validation
///
/// `raw_score` is the number exactly as submitted; rank is computed from it,
/// not from the clamped `record.score`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub record: NewScore,
    pub raw_score: f64,
}

impl SubmitScoreRequest {
    /// Check required fields, sanitize the username and clamp the numbers
    ///
    /// The first failing check wins.
    pub fn validate(self) -> Result<ValidatedSubmission, SubmissionError> {
        let (username, score, coins) = match (self.username, self.score, self.coins) {
            (Some(username), Some(score), Some(coins)) if !username.is_empty() => {
                (username, score, coins)
            }
            _ => return Err(SubmissionError::MissingFields),
        };

        let username = sanitize_username(&username);
        if username.is_empty() {
            return Err(SubmissionError::InvalidUsername);
        }

        let record = NewScore {
            username,
            score: clamp_non_negative(score),
            coins: clamp_non_negative(coins),
            level: clamp_level(self.level),
            completed: self.completed.as_ref().is_some_and(is_truthy),
        };

        Ok(ValidatedSubmission {
            record,
            raw_score: score,
        })
    }
}

/// Trim, keep the first 20 characters, drop anything that isn't an ASCII
/// letter, digit or whitespace, then trim again
///
/// Idempotent: `sanitize_username(&sanitize_username(s)) == sanitize_username(s)`.
pub fn sanitize_username(input: &str) -> String {
    let filtered: String = input
        .trim()
        .chars()
        .take(MAX_USERNAME_CHARS)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    filtered.trim().to_string()
}

/// `max(0, floor(n))`
pub fn clamp_non_negative(n: f64) -> i64 {
    n.floor().max(0.0) as i64
}

/// Absent or zero means level 1, then clamp into the playable range
pub fn clamp_level(level: Option<f64>) -> i64 {
    let level = match level {
        Some(l) if l != 0.0 => l,
        _ => MIN_LEVEL,
    };
    level.clamp(MIN_LEVEL, MAX_LEVEL).floor() as i64
}

/// JSON truthiness: `null`, `false`, `0` and `""` are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
