use axum::{extract::State, Json};
use serde::Serialize;

use crate::constants::ERR_FETCH_STATS;
use crate::error::{AppError, Result};
use crate::models::GlobalStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: GlobalStats,
}

/// Totals over every stored run
///
/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state
        .store
        .query_global_aggregate()
        .await
        .map_err(AppError::query(ERR_FETCH_STATS))?;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
