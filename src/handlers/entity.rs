//! Entity lookup handlers: by id and by arbitrary key.

use crate::error::AppError;
use crate::response::success_many;
use crate::schema::Kind;
use crate::service::LookupService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

fn kind_by_route(route: &str) -> Result<Kind, AppError> {
    Kind::from_route(route).ok_or_else(|| AppError::UnknownRoute(route.to_string()))
}

async fn lookup(state: &AppState, kind: Kind, key: &str, value: &str) -> Result<impl IntoResponse, AppError> {
    let rows = LookupService::find(&state.pool, &state.keys, kind, key, value).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(kind));
    }
    tracing::debug!(kind = %kind, key, matches = rows.len(), "lookup");
    Ok(success_many(rows))
}

/// `GET /:route/:id`, same as `GET /:route/id/:id`.
pub async fn by_id(
    State(state): State<AppState>,
    Path((route, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_by_route(&route)?;
    lookup(&state, kind, "id", &id).await
}

/// `GET /:route/:key/:value`
pub async fn by_key(
    State(state): State<AppState>,
    Path((route, key, value)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind_by_route(&route)?;
    lookup(&state, kind, &key, &value).await
}

/// Any path outside the route table.
pub async fn fallback(uri: axum::http::Uri) -> AppError {
    AppError::UnknownRoute(uri.path().trim_start_matches('/').to_string())
}
