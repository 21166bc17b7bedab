/// Scores table: one immutable row per submitted run
///
/// AUTOINCREMENT keeps ids from being reused.
pub const CREATE_SCORES: &str = r#"
CREATE TABLE IF NOT EXISTS scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    score INTEGER NOT NULL,
    coins INTEGER NOT NULL,
    level INTEGER NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Leaderboard ordering
pub const CREATE_SCORE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_score ON scores(score DESC)";

/// Tie-break ordering (most recent first)
pub const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_created_at ON scores(created_at DESC)";

/// Statements run on every startup, in order
pub const SCHEMA: [&str; 3] = [CREATE_SCORES, CREATE_SCORE_INDEX, CREATE_CREATED_AT_INDEX];
