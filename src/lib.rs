//! Game-definition cache: JSON dumps loaded into SQLite and served over a read-only REST API.

pub mod codec;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod migration;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;

pub use error::{AppError, CodecError, ConfigError, DecodeError, LoadError};
pub use loader::{load_all, load_kind, load_kinds, LoadReport};
pub use migration::apply_schema;
pub use response::{success_many, MessageBody};
pub use routes::{build_router, common_routes, entity_routes};
pub use schema::{Entity, EntitySchema, FieldValue, Kind, Strategy};
pub use service::{KeyTable, LookupService};
pub use settings::Settings;
pub use state::AppState;
pub use store::open as open_store;
