use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::constants::ERR_FETCH_USER_SCORE;
use crate::error::{AppError, Result};
use crate::models::UserScore;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UserScoreResponse {
    pub success: bool,
    /// `null` when the username has no runs
    #[serde(rename = "userScore")]
    pub user_score: Option<UserScore>,
}

/// Best score and totals for one username
///
/// GET /api/user/:username
///
/// The username is matched exactly as given in the path.
pub async fn get_user_score(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserScoreResponse>> {
    let user_score = state
        .store
        .query_user_aggregate(&username)
        .await
        .map_err(AppError::query(ERR_FETCH_USER_SCORE))?;

    Ok(Json(UserScoreResponse {
        success: true,
        user_score,
    }))
}
