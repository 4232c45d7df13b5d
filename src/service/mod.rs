//! Lookup layer: key classification and row fetching over the registry.

mod classify;
mod lookup;
pub use classify::{parse_overrides, Classified, KeyTable, LookupOverride};
pub use lookup::LookupService;
