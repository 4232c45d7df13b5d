//! HTTP handlers for entity lookups.

pub mod entity;
pub use entity::*;
