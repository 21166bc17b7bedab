//! Leaderboard Server Library
//!
//! Scorekeeping backend for the game client: run submissions, top-N
//! leaderboard, per-user and global stats over a single SQLite table.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{open_database, ScoreStore};
pub use error::{AppError, Result};
pub use routes::router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: ScoreStore,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: ScoreStore, config: Config) -> Self {
        Self { store, config }
    }
}
