//! Read-only lookup server over a loaded cache database.
//!
//! Run: `cargo run --bin cache-server` (reads `.env` when present).

use osrs_cache_api::{apply_schema, build_router, open_store, store, AppState, KeyTable, Kind, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("osrs_cache_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = open_store(&settings.database_path, settings.max_connections).await?;
    apply_schema(&pool).await?;
    for kind in Kind::ALL {
        let rows = store::count(&pool, kind).await?;
        tracing::info!(kind = %kind, rows, "table ready");
    }

    let keys = KeyTable::build(&settings.lookup_overrides)?;
    let app = build_router(AppState::new(pool, keys));

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("cache server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
