//! Apply the registry to the database: one table per kind.

use crate::error::AppError;
use crate::schema::{validate_registry, Kind};
use crate::sql::create_table;
use sqlx::SqlitePool;

/// Validate the registry, then CREATE TABLE IF NOT EXISTS for every kind. Idempotent.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), AppError> {
    validate_registry()?;
    for kind in Kind::ALL {
        let ddl = create_table(kind.schema());
        tracing::debug!(sql = %ddl, "ddl");
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}
