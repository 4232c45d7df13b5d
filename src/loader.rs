//! Bulk loading of per-record JSON dumps into the store.
//!
//! Each kind reads the files directly inside `<cache_root>/<source_dir>/` in file name
//! order and upserts one row per record. A bad file is logged and skipped; only a
//! statement that cannot be prepared aborts the kind.

use crate::error::{AppError, LoadError};
use crate::schema::{EntitySchema, Kind};
use crate::sql::upsert;
use chrono::{DateTime, Utc};
use sqlx::{Executor, SqlitePool};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of loading one kind.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub kind: Kind,
    /// Regular files found in the source directory.
    pub files: usize,
    pub loaded: usize,
    /// Files that could not be read, decoded or inserted.
    pub skipped: usize,
    /// Zero-length files, ignored.
    pub empty: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl LoadReport {
    fn start(kind: Kind) -> Self {
        let now = Utc::now();
        LoadReport {
            kind,
            files: 0,
            loaded: 0,
            skipped: 0,
            empty: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

struct SourceFile {
    path: PathBuf,
    len: u64,
}

/// Load every kind, in registry order.
pub async fn load_all(pool: &SqlitePool, cache_root: &Path) -> Result<Vec<LoadReport>, AppError> {
    load_kinds(pool, cache_root, &Kind::ALL).await
}

pub async fn load_kinds(
    pool: &SqlitePool,
    cache_root: &Path,
    kinds: &[Kind],
) -> Result<Vec<LoadReport>, AppError> {
    let mut reports = Vec::with_capacity(kinds.len());
    for kind in kinds {
        reports.push(load_kind(pool, cache_root, *kind).await?);
    }
    Ok(reports)
}

pub async fn load_kind(pool: &SqlitePool, cache_root: &Path, kind: Kind) -> Result<LoadReport, AppError> {
    let schema = kind.schema();
    let dir = cache_root.join(schema.source_dir);
    let mut report = LoadReport::start(kind);
    tracing::info!(kind = %kind, dir = %dir.display(), "load started");

    let sql = upsert(schema);
    pool.prepare(sql.as_str()).await.map_err(|e| {
        tracing::error!(kind = %kind, error = %e, "cannot prepare insert statement");
        AppError::Db(e)
    })?;

    let files = match list_files(&dir).await {
        Ok(files) => files,
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                tracing::warn!(kind = %kind, dir = %dir.display(), "source directory missing");
            } else {
                tracing::warn!(kind = %kind, dir = %dir.display(), error = %e, "cannot list source directory");
            }
            report.finished_at = Utc::now();
            return Ok(report);
        }
    };

    report.files = files.len();
    for file in files {
        if file.len == 0 {
            report.empty += 1;
            continue;
        }
        match load_file(pool, schema, &sql, &file.path).await {
            Ok(id) => {
                report.loaded += 1;
                tracing::trace!(kind = %kind, id, "stored");
            }
            Err(e) => {
                report.skipped += 1;
                tracing::warn!(kind = %kind, path = %file.path.display(), error = %e, "skipping file");
            }
        }
    }

    report.finished_at = Utc::now();
    tracing::info!(
        kind = %kind,
        files = report.files,
        loaded = report.loaded,
        skipped = report.skipped,
        empty = report.empty,
        elapsed_ms = report.elapsed_ms(),
        "load finished"
    );
    Ok(report)
}

/// Regular files directly inside `dir`, sorted by path. Symlinks are followed.
async fn list_files(dir: &Path) -> std::io::Result<Vec<SourceFile>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => files.push(SourceFile { path, len: meta.len() }),
            Ok(_) => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot stat entry"),
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

async fn load_file(pool: &SqlitePool, schema: &EntitySchema, sql: &str, path: &Path) -> Result<i64, LoadError> {
    let bytes = tokio::fs::read(path).await?;
    let entity = schema.decode_record(&bytes)?;
    let mut query = sqlx::query(sql);
    for (column, value) in schema.columns().iter().zip(entity.values()) {
        let stored = column.serialize(value).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), column = column.name, error = %e, "storing column default");
            column.ty.default_stored()
        });
        query = query.bind(stored);
    }
    query.execute(pool).await?;
    Ok(entity.id())
}
