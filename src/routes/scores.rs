use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::constants::{ERR_SAVE_SCORE, MSG_SCORE_SAVED};
use crate::error::{AppError, Result};
use crate::models::{SubmissionError, SubmitScoreRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitScoreResponse {
    pub success: bool,
    pub id: i64,
    pub rank: i64,
    pub message: String,
}

/// Record one run and report where it places
///
/// POST /api/scores
///
/// # Validation
/// 1. `username`, `score` and `coins` must be present; `score` and `coins` must
///    be numbers. A body that isn't JSON at all fails here too.
/// 2. The sanitized username must not be empty.
///
/// Nothing is written when validation fails.
///
/// # Rank
/// `1 + (runs with a score strictly greater than the submitted score)`, using
/// the score as submitted rather than the clamped stored value. Concurrent
/// submissions may shift it; it is advisory.
pub async fn submit_score(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Json<SubmitScoreResponse>> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected score submission body: {}", rejection.body_text());
        SubmissionError::MissingFields
    })?;

    let submission = payload.validate().inspect_err(|e| {
        tracing::warn!("Rejected score submission: {}", e.message());
    })?;

    let id = state
        .store
        .insert(&submission.record)
        .await
        .map_err(AppError::query(ERR_SAVE_SCORE))?;

    let rank = state
        .store
        .count_scores_greater_than(submission.raw_score)
        .await
        .map_err(AppError::query(ERR_SAVE_SCORE))?
        + 1;

    tracing::info!(
        "Score saved for {}: {} (id {}, rank {})",
        submission.record.username,
        submission.record.score,
        id,
        rank
    );

    Ok(Json(SubmitScoreResponse {
        success: true,
        id,
        rank,
        message: MSG_SCORE_SAVED.to_string(),
    }))
}
