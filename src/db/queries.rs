//! Read-only aggregations over the scores table.

use super::ScoreStore;
use crate::models::{GlobalStats, LeaderboardEntry, UserScore};

impl ScoreStore {
    /// Highest scores first; equal scores list the most recent run first
    ///
    /// `limit` is handed to SQLite unchanged, so a negative value means no limit.
    pub async fn query_top(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT username, score, coins, level, completed,
                   datetime(created_at, 'localtime') AS created_at
            FROM scores
            ORDER BY scores.score DESC, scores.created_at DESC, scores.id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Summary of every run stored under `username`, or `None` if there are none
    ///
    /// Coins are summed with `TOTAL` so huge stored values saturate instead of
    /// raising SQLite's integer overflow error.
    pub async fn query_user_aggregate(
        &self,
        username: &str,
    ) -> Result<Option<UserScore>, sqlx::Error> {
        sqlx::query_as::<_, UserScore>(
            r#"
            SELECT username,
                   MAX(score) AS best_score,
                   CAST(TOTAL(coins) AS INTEGER) AS total_coins,
                   COUNT(*) AS games_played,
                   MAX(level) AS highest_level,
                   COUNT(CASE WHEN completed = 1 THEN 1 END) AS games_completed
            FROM scores
            WHERE username = ?
            GROUP BY username
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Store-wide totals; max and average stay NULL on an empty table
    pub async fn query_global_aggregate(&self) -> Result<GlobalStats, sqlx::Error> {
        sqlx::query_as::<_, GlobalStats>(
            r#"
            SELECT COUNT(*) AS total_games,
                   COUNT(DISTINCT username) AS total_players,
                   MAX(score) AS highest_score,
                   AVG(score) AS avg_score,
                   COUNT(CASE WHEN completed = 1 THEN 1 END) AS games_completed
            FROM scores
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }
}
