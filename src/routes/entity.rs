//! Entity lookup routes. Parameterized paths; handlers resolve the kind from the first segment.

use crate::handlers::entity::{by_id, by_key};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/:route/:id", get(by_id))
        .route("/:route/:key/:value", get(by_key))
        .with_state(state)
}
