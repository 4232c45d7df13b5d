//! One-shot bulk load of the definition dumps into the cache database.
//!
//! Run from repo root: `cargo run -p cache-loader`
//! Reads `CACHE_DUMP_PATH`, `CACHE_DB` and `LOAD_KINDS` (`.env` is honoured).

use osrs_cache_api::{apply_schema, load_kinds, open_store, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("osrs_cache_api=info,cache_loader=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = open_store(&settings.database_path, settings.max_connections).await?;
    apply_schema(&pool).await?;

    let reports = load_kinds(&pool, &settings.cache_root, &settings.load_kinds).await?;
    let loaded: usize = reports.iter().map(|r| r.loaded).sum();
    let skipped: usize = reports.iter().map(|r| r.skipped).sum();
    for r in &reports {
        tracing::info!(
            "{}: {} loaded, {} skipped, {} empty of {} files in {} ms",
            r.kind,
            r.loaded,
            r.skipped,
            r.empty,
            r.files,
            r.elapsed_ms()
        );
    }
    tracing::info!(loaded, skipped, "cache load complete");
    pool.close().await;
    Ok(())
}
