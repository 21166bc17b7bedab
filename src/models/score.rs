use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Wire format of `created_at`, server local time
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A fully normalized run, ready to be inserted
///
/// Only produced by [`crate::models::SubmitScoreRequest::validate`], so every
/// value already satisfies the stored-record clamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub username: String,
    pub score: i64,
    pub coins: i64,
    pub level: i64,
    pub completed: bool,
}

/// One leaderboard row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
    pub coins: i64,
    pub level: i64,
    /// Serialized as 0/1, the same shape the table stores
    #[serde(serialize_with = "serialize_flag")]
    pub completed: bool,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: NaiveDateTime,
}

/// Per-user summary across every run submitted under one username
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct UserScore {
    pub username: String,
    pub best_score: i64,
    pub total_coins: i64,
    pub games_played: i64,
    pub highest_level: i64,
    pub games_completed: i64,
}

/// Store-wide summary
///
/// `highest_score` and `avg_score` are `None` (JSON `null`) on an empty store.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct GlobalStats {
    pub total_games: i64,
    pub total_players: i64,
    pub highest_score: Option<i64>,
    pub avg_score: Option<f64>,
    pub games_completed: i64,
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

fn serialize_created_at<S: Serializer>(
    created_at: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&created_at.format(CREATED_AT_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_leaderboard_entry_wire_shape() {
        let created_at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        let entry = LeaderboardEntry {
            username: "abc".to_string(),
            score: 150,
            coins: 0,
            level: 2,
            completed: true,
            created_at,
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "username": "abc",
                "score": 150,
                "coins": 0,
                "level": 2,
                "completed": 1,
                "created_at": "2024-03-09 14:05:07"
            })
        );
    }

    #[test]
    fn test_empty_global_stats_serialize_nulls() {
        let stats = GlobalStats {
            total_games: 0,
            total_players: 0,
            highest_score: None,
            avg_score: None,
            games_completed: 0,
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["total_games"], 0);
        assert!(value["highest_score"].is_null());
        assert!(value["avg_score"].is_null());
    }
}
