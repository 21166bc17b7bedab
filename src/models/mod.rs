pub mod score;
pub mod submission;

pub use score::{GlobalStats, LeaderboardEntry, NewScore, UserScore};
pub use submission::{sanitize_username, SubmissionError, SubmitScoreRequest, ValidatedSubmission};
