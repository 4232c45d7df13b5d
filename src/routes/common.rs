//! Operational routes: liveness, readiness with per-table row counts, build version.

use crate::schema::Kind;
use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    /// Rows per kind table, keyed by route. Empty when the store is unreachable.
    tables: BTreeMap<&'static str, i64>,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// 200 once every kind table answers a COUNT; 503 otherwise. An empty table is ready.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let mut tables = BTreeMap::new();
    for kind in Kind::ALL {
        match store::count(&state.pool, kind).await {
            Ok(rows) => {
                tables.insert(kind.route(), rows);
            }
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "readiness check failed");
                let body = ReadyBody {
                    status: "unavailable",
                    tables: BTreeMap::new(),
                };
                return (StatusCode::SERVICE_UNAVAILABLE, Json(body));
            }
        }
    }
    (StatusCode::OK, Json(ReadyBody { status: "ok", tables }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
