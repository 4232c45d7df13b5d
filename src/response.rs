//! Response payload helpers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body used for every non-200 answer.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

/// 200 with the bare JSON array of matching entities.
pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
