//! Per-kind key → strategy table, built once at startup from the registry.

use crate::error::{AppError, ConfigError};
use crate::schema::{Column, Kind, Strategy};
use std::collections::HashMap;
use std::str::FromStr;

/// A registry key resolved to its column and lookup strategy.
#[derive(Clone, Copy, Debug)]
pub struct Classified {
    pub column: &'static Column,
    pub strategy: Strategy,
}

/// `<kind>.<key>=<strategy>`, e.g. `items.cost=fuzzy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOverride {
    pub kind: Kind,
    pub key: String,
    pub strategy: Strategy,
}

impl FromStr for LookupOverride {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedOverride(s.to_string());
        let (target, strategy) = s.split_once('=').ok_or_else(malformed)?;
        let (kind, key) = target.split_once('.').ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }
        Ok(LookupOverride {
            kind: kind.parse()?,
            key: key.to_string(),
            strategy: strategy.parse()?,
        })
    }
}

/// Parse a comma separated override list. Blank entries are ignored.
pub fn parse_overrides(s: &str) -> Result<Vec<LookupOverride>, ConfigError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(LookupOverride::from_str)
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct KeyEntry {
    position: usize,
    strategy: Strategy,
}

/// Closed set of queryable keys per kind. Both the SQL column name and the JSON key
/// of every registry column are accepted.
#[derive(Debug)]
pub struct KeyTable {
    tables: HashMap<Kind, HashMap<&'static str, KeyEntry>>,
}

impl KeyTable {
    pub fn build(overrides: &[LookupOverride]) -> Result<Self, ConfigError> {
        let mut tables = HashMap::new();
        for kind in Kind::ALL {
            let mut keys = HashMap::new();
            for (position, column) in kind.schema().columns().iter().enumerate() {
                let entry = KeyEntry {
                    position,
                    strategy: column.strategy(),
                };
                keys.insert(column.name, entry);
                keys.insert(column.key, entry);
            }
            tables.insert(kind, keys);
        }

        for o in overrides {
            let column = o
                .kind
                .schema()
                .column(&o.key)
                .ok_or_else(|| ConfigError::UnknownOverrideKey {
                    kind: o.kind,
                    key: o.key.clone(),
                })?;
            if let Some(keys) = tables.get_mut(&o.kind) {
                for name in [column.name, column.key] {
                    if let Some(entry) = keys.get_mut(name) {
                        entry.strategy = o.strategy;
                    }
                }
            }
            tracing::info!(kind = %o.kind, key = %o.key, strategy = o.strategy.as_str(), "lookup override");
        }
        Ok(KeyTable { tables })
    }

    /// Resolve a caller-supplied key. Unknown keys are `UnknownKey`; a key whose column
    /// is missing from the registry is an internal error.
    pub fn classify(&self, kind: Kind, key: &str) -> Result<Classified, AppError> {
        let keys = self
            .tables
            .get(&kind)
            .ok_or_else(|| AppError::Internal(format!("no key table for {}", kind)))?;
        let entry = keys.get(key).ok_or_else(|| AppError::UnknownKey {
            kind,
            key: key.to_string(),
        })?;
        let column = kind
            .schema()
            .columns()
            .get(entry.position)
            .ok_or_else(|| AppError::Internal(format!("{} key '{}' has no column", kind, key)))?;
        Ok(Classified {
            column,
            strategy: entry.strategy,
        })
    }

    pub fn key_count(&self, kind: Kind) -> usize {
        self.tables.get(&kind).map(HashMap::len).unwrap_or(0)
    }
}
