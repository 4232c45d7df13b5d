//! Registry validation: identifiers are safe to interpolate, id leads, keys are unique.

use crate::error::ConfigError;
use crate::schema::{EntitySchema, Kind};
use regex::Regex;
use std::collections::HashSet;

fn identifier_pattern() -> Result<Regex, ConfigError> {
    Ok(Regex::new(r"^[a-z][a-z0-9_]*$")?)
}

/// Validate every kind's schema. Called once at startup before any SQL is built.
pub fn validate_registry() -> Result<(), ConfigError> {
    let pattern = identifier_pattern()?;
    for kind in Kind::ALL {
        validate_schema(kind.schema(), &pattern)?;
    }
    Ok(())
}

pub fn validate_schema(schema: &EntitySchema, pattern: &Regex) -> Result<(), ConfigError> {
    if !pattern.is_match(schema.table) {
        return Err(ConfigError::InvalidIdentifier(schema.table.to_string()));
    }
    match schema.columns.first() {
        Some(c) if c.name == "id" => {}
        other => {
            return Err(ConfigError::MissingIdColumn {
                kind: schema.kind,
                found: other.map(|c| c.name.to_string()).unwrap_or_default(),
            })
        }
    }

    let mut seen = HashSet::new();
    for c in schema.columns {
        if !pattern.is_match(c.name) {
            return Err(ConfigError::InvalidIdentifier(c.name.to_string()));
        }
        let mut names: Vec<&str> = vec![c.name];
        if c.key != c.name {
            names.push(c.key);
        }
        names.extend(c.aliases.iter().copied().filter(|a| *a != c.name && *a != c.key));
        for name in names {
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateColumn {
                    kind: schema.kind,
                    name: name.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;

    #[test]
    fn shipped_registry_is_valid() {
        validate_registry().unwrap();
    }

    #[test]
    fn duplicate_key_is_rejected() {
        static BROKEN: EntitySchema = EntitySchema {
            kind: Kind::Npc,
            table: "npcs",
            source_dir: "npc_defs",
            columns: &[
                Column::int("id", "id"),
                Column::int("size", "size"),
                Column::int("npc_size", "size"),
            ],
        };
        let err = validate_schema(&BROKEN, &identifier_pattern().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateColumn { ref name, .. } if name == "size"));
    }

    #[test]
    fn unsafe_column_name_is_rejected() {
        static BROKEN: EntitySchema = EntitySchema {
            kind: Kind::Item,
            table: "items",
            source_dir: "item_defs",
            columns: &[Column::int("id", "id"), Column::text("name; DROP TABLE items", "name")],
        };
        let err = validate_schema(&BROKEN, &identifier_pattern().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdentifier(_)));
    }

    #[test]
    fn id_must_lead() {
        static BROKEN: EntitySchema = EntitySchema {
            kind: Kind::Object,
            table: "objects",
            source_dir: "object_defs",
            columns: &[Column::text("name", "name"), Column::int("id", "id")],
        };
        let err = validate_schema(&BROKEN, &identifier_pattern().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingIdColumn { ref found, .. } if found == "name"));
    }
}
