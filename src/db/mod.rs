pub mod pool;
mod queries;
pub mod tables;

use sqlx::SqlitePool;
use std::path::Path;

use crate::models::NewScore;

/// Durable store of submitted runs
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    pool: SqlitePool,
}

/// Open or create the SQLite database at the given path
///
/// Creates the scores table and its indexes on first run.
pub async fn open_database(path: impl AsRef<Path>) -> Result<ScoreStore, sqlx::Error> {
    let path = path.as_ref();
    tracing::info!("Opening database at: {:?}", path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                sqlx::Error::Io(e)
            })?;
        }
    }

    let pool = pool::create_pool(path).await?;
    let store = ScoreStore::new(pool);
    store.init_schema().await?;

    tracing::info!("Database initialized successfully");

    Ok(store)
}

impl ScoreStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the table and indexes if they are absent
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for statement in tables::SCHEMA {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await
    }

    /// Insert one run and return its id
    pub async fn insert(&self, record: &NewScore) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO scores (username, score, coins, level, completed) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.username)
        .bind(record.score)
        .bind(record.coins)
        .bind(record.level)
        .bind(record.completed)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Number of stored runs with a score strictly greater than `score`
    ///
    /// Takes the submitted number as-is, so a fractional or negative value is
    /// compared without clamping.
    pub async fn count_scores_greater_than(&self, score: f64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM scores WHERE score > ?")
            .bind(score)
            .fetch_one(&self.pool)
            .await
    }

    /// Connectivity check
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
