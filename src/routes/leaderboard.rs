use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEADERBOARD_LIMIT, ERR_FETCH_LEADERBOARD};
use crate::error::{AppError, Result};
use crate::models::LeaderboardEntry;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    /// Kept as text; see [`parse_limit`]
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub scores: Vec<LeaderboardEntry>,
}

/// Top scores, best first
///
/// GET /api/leaderboard?limit=N
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardResponse>> {
    let limit = parse_limit(params.limit.as_deref());

    let scores = state
        .store
        .query_top(limit)
        .await
        .map_err(AppError::query(ERR_FETCH_LEADERBOARD))?;

    tracing::debug!("Leaderboard served: {} rows (limit {})", scores.len(), limit);

    Ok(Json(LeaderboardResponse {
        success: true,
        scores,
    }))
}

/// Read the leading integer of `raw`, falling back to the default when there
/// is none or it is zero
///
/// `"5abc"` is 5 and `"2.7"` is 2. Negative values pass through untouched and
/// oversized ones saturate.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    match raw.and_then(leading_integer) {
        Some(0) | None => DEFAULT_LEADERBOARD_LIMIT,
        Some(limit) => limit,
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: Option<i64> = None;
    for digit in digits {
        let digit = i64::from(digit - b'0');
        let acc = value.unwrap_or(0);
        value = Some(if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        });
    }
    value
}
