//! Process settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use crate::schema::Kind;
use crate::service::{parse_overrides, LookupOverride};
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "cache.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DUMP_PATH: &str = "dump";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    /// `CACHE_DB`
    pub database_path: PathBuf,
    /// `CACHE_DUMP_PATH`: directory holding `item_defs/`, `npc_defs/` and `object_defs/`.
    pub cache_root: PathBuf,
    /// `BIND_ADDR`
    pub bind_addr: String,
    /// `DB_MAX_CONNECTIONS`
    pub max_connections: u32,
    /// `LOOKUP_OVERRIDES`, e.g. `items.cost=fuzzy,npcs.actions=exact`.
    pub lookup_overrides: Vec<LookupOverride>,
    /// `LOAD_KINDS`, e.g. `items,npcs`. Empty or unset means every kind.
    pub load_kinds: Vec<Kind>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any name → value source. Blank values count as unset.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidSetting {
                    name: "DB_MAX_CONNECTIONS",
                    reason: format!("expected a positive integer, got '{}'", raw),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let lookup_overrides = match get("LOOKUP_OVERRIDES") {
            Some(raw) => parse_overrides(&raw)?,
            None => Vec::new(),
        };

        let load_kinds = match get("LOAD_KINDS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse::<Kind>)
                .collect::<Result<Vec<Kind>, _>>()?,
            None => Vec::new(),
        };
        let load_kinds = if load_kinds.is_empty() {
            Kind::ALL.to_vec()
        } else {
            load_kinds
        };

        Ok(Settings {
            database_path: get("CACHE_DB").unwrap_or_else(|| DEFAULT_DATABASE.into()).into(),
            cache_root: get("CACHE_DUMP_PATH").unwrap_or_else(|| DEFAULT_DUMP_PATH.into()).into(),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            max_connections,
            lookup_overrides,
            load_kinds,
        })
    }
}
