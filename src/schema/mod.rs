//! Entity schema registry: the single source of column order for DDL, inserts,
//! scans, responses and the lookup table.

pub mod tables;
pub mod types;
pub mod validator;

pub use types::*;
pub use validator::validate_registry;

/// Ordered columns of a kind.
pub fn columns(kind: Kind) -> &'static [Column] {
    kind.schema().columns()
}
