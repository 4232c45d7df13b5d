//! Classified lookups and row scanning against SQLite.

use crate::error::{AppError, CodecError};
use crate::schema::{ColumnType, Entity, EntitySchema, Kind};
use crate::service::KeyTable;
use crate::sql::{build, QueryBuf, SqlValue};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct LookupService;

impl LookupService {
    /// Classify `key`, build the statement and fetch matches in ascending id order.
    /// An empty result is `Ok(vec![])`; callers decide whether that is a 404.
    pub async fn find(
        pool: &SqlitePool,
        keys: &KeyTable,
        kind: Kind,
        key: &str,
        value: &str,
    ) -> Result<Vec<Entity>, AppError> {
        let classified = keys.classify(kind, key)?;
        let schema = kind.schema();
        let q = build(schema, classified.column, classified.strategy, value);
        Self::fetch(pool, schema, &q).await
    }

    /// Run a built statement and scan rows in registry column order. A row whose cells
    /// cannot be read is logged and skipped; malformed stored list/map text fails the read.
    pub async fn fetch(pool: &SqlitePool, schema: &EntitySchema, q: &QueryBuf) -> Result<Vec<Entity>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let rows = query.fetch_all(pool).await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            match scan_row(schema, row) {
                Ok(entity) => out.push(entity),
                Err(ScanError::Cell(e)) => {
                    tracing::warn!(kind = %schema.kind, error = %e, "skipping unreadable row");
                }
                Err(ScanError::Codec(e)) => return Err(AppError::Codec(e)),
            }
        }
        Ok(out)
    }
}

enum ScanError {
    Cell(sqlx::Error),
    Codec(CodecError),
}

fn scan_row(schema: &EntitySchema, row: &SqliteRow) -> Result<Entity, ScanError> {
    let mut values = Vec::with_capacity(schema.columns().len());
    for (idx, column) in schema.columns().iter().enumerate() {
        let stored = read_cell(row, idx, column.ty).map_err(ScanError::Cell)?;
        values.push(column.deserialize(stored).map_err(ScanError::Codec)?);
    }
    Ok(Entity::from_values(schema.kind, values))
}

fn read_cell(row: &SqliteRow, idx: usize, ty: ColumnType) -> Result<SqlValue, sqlx::Error> {
    let value = match ty {
        ColumnType::Integer => row.try_get::<Option<i64>, _>(idx)?.map(SqlValue::Int),
        ColumnType::Boolean => row.try_get::<Option<bool>, _>(idx)?.map(SqlValue::Bool),
        ColumnType::Text | ColumnType::IntList | ColumnType::TextList | ColumnType::Params => {
            row.try_get::<Option<String>, _>(idx)?.map(SqlValue::Text)
        }
    };
    Ok(value.unwrap_or(SqlValue::Null))
}
