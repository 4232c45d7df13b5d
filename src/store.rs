//! Opening the SQLite store. One pool is shared by the loader and every request.

use crate::error::AppError;
use crate::schema::Kind;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Open the database file, creating it if missing. WAL journal: one writer, many readers.
pub async fn open(path: &Path, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(opts)
        .await?;
    tracing::info!(path = %path.display(), "opened store");
    Ok(pool)
}

/// Number of rows in a kind's table.
pub async fn count(pool: &SqlitePool, kind: Kind) -> Result<i64, AppError> {
    let sql = format!("SELECT COUNT(*) FROM \"{}\"", kind.schema().table);
    let (n,): (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(n)
}
