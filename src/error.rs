//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use crate::schema::Kind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Construction-time problems: registry, lookup overrides, settings. Fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),
    #[error("{kind}: first column must be 'id', found '{found}'")]
    MissingIdColumn { kind: Kind, found: String },
    #[error("{kind}: duplicate column or key '{name}'")]
    DuplicateColumn { kind: Kind, name: String },
    #[error("unknown kind '{0}'")]
    UnknownKind(String),
    #[error("unknown lookup strategy '{0}'")]
    UnknownStrategy(String),
    #[error("lookup override '{0}': expected <kind>.<key>=<strategy>")]
    MalformedOverride(String),
    #[error("lookup override for {kind}: unknown key '{key}'")]
    UnknownOverrideKey { kind: Kind, key: String },
    #[error("identifier pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// Stored list/map text that cannot be converted.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed stored {shape}: {source}")]
    Malformed {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot serialize {shape}: {source}")]
    Encode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A source record that cannot be turned into an entity.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("field '{key}': expected {expected}")]
    FieldType {
        key: &'static str,
        expected: &'static str,
    },
}

/// Per-file failure during a bulk load. Logged, never fatal for the batch.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
    #[error("insert: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{} not found", .0.noun())]
    NotFound(Kind),
    #[error("Parameter {key} not found for route /{kind}")]
    UnknownKey { kind: Kind, key: String },
    #[error("Route /{0} not found")]
    UnknownRoute(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("stored value: {0}")]
    Codec(#[from] CodecError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

pub const INTERNAL_MESSAGE: &str = "internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) | AppError::UnknownKey { .. } | AppError::UnknownRoute(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Config(_) | AppError::Internal(_) | AppError::Codec(_) | AppError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };
        (status, Json(MessageBody { message })).into_response()
    }
}
