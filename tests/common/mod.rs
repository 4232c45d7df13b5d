#![allow(dead_code)]

use osrs_cache_api::{apply_schema, build_router, open_store, AppState, KeyTable, Kind};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch dump directory plus database file; both vanish with the struct.
pub struct Fixture {
    pub dir: TempDir,
    pub pool: SqlitePool,
}

impl Fixture {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let pool = open_store(&dir.path().join("cache.db"), 2).await.unwrap();
        apply_schema(&pool).await.unwrap();
        Fixture { dir, pool }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("dump")
    }

    /// Write `body` as `<root>/<source_dir>/<file>`.
    pub fn write(&self, kind: Kind, file: &str, body: &str) -> PathBuf {
        let dir = self.root().join(kind.schema().source_dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file);
        std::fs::write(&path, body).unwrap();
        path
    }

    pub fn write_json(&self, kind: Kind, file: &str, body: &Value) -> PathBuf {
        self.write(kind, file, &body.to_string())
    }

    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.pool.clone(), KeyTable::build(&[]).unwrap()))
    }
}

pub fn whip() -> Value {
    json!({
        "id": 4151,
        "name": "Abyssal whip",
        "examine": "A weapon from the abyss.",
        "cost": 120001,
        "isTradeable": true,
        "members": true,
        "wearPos1": 3,
        "options": [null, null, "Take", null, null],
        "interfaceOptions": [null, "Wield", null, null, "Drop"],
        "notedID": 4152,
        "params": {"1397": 1, "14": "whip"}
    })
}

pub fn dragon_scimitar() -> Value {
    json!({
        "id": 4587,
        "name": "Dragon scimitar",
        "cost": 100000,
        "members": true,
        "interfaceOptions": [null, "Wield", null, null, "Drop"]
    })
}

pub fn unnamed_item() -> Value {
    json!({ "id": 7, "name": "null", "cost": 1 })
}

pub fn vorkath() -> Value {
    json!({
        "id": 8061,
        "name": "Vorkath",
        "combatLevel": 732,
        "size": 7,
        "actions": [null, "Attack", null, null, null],
        "models": [35023, 35024]
    })
}

pub fn bank_booth() -> Value {
    json!({
        "id": 10583,
        "name": "Bank booth",
        "sizeX": 1,
        "sizeY": 1,
        "actions": [null, "Bank", "Collect", null, null]
    })
}
