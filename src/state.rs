//! Shared application state for all routes.

use crate::service::KeyTable;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Built once at startup; read-only afterwards.
    pub keys: Arc<KeyTable>,
}

impl AppState {
    pub fn new(pool: SqlitePool, keys: KeyTable) -> Self {
        AppState {
            pool,
            keys: Arc::new(keys),
        }
    }
}
