/// Maximum username length in characters (applied before character filtering)
pub const MAX_USERNAME_CHARS: usize = 20;

/// Lowest playable level
pub const MIN_LEVEL: f64 = 1.0;

/// Highest playable level
pub const MAX_LEVEL: f64 = 2.0;

/// Number of leaderboard rows returned when `limit` is absent or unusable
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

// =============================================================================
// Response Messages
// =============================================================================

/// Submission rejected because a required field is absent or has the wrong type
pub const ERR_MISSING_FIELDS: &str = "Missing required fields: username, score, coins";

/// Submission rejected because nothing was left of the username after sanitation
pub const ERR_INVALID_USERNAME: &str = "Invalid username";

pub const ERR_FETCH_LEADERBOARD: &str = "Failed to fetch leaderboard";
pub const ERR_FETCH_USER_SCORE: &str = "Failed to fetch user score";
pub const ERR_SAVE_SCORE: &str = "Failed to save score";
pub const ERR_FETCH_STATS: &str = "Failed to fetch stats";

pub const MSG_SCORE_SAVED: &str = "Score saved successfully";
