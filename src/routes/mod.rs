//! Route tables and the assembled application router.

pub mod common;
pub mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::handlers::fallback;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Everything the server exposes: common routes, entity lookups, a JSON 404 for anything
/// else, and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}
