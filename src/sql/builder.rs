//! Builds parameterized SELECT, INSERT OR REPLACE and CREATE TABLE from the registry.
//! Table and column names only ever come from an `EntitySchema`; caller input is bound.

use crate::schema::{Column, EntitySchema, Strategy};
use crate::sql::SqlValue;

/// Quote identifier for SQLite (safe: only from the registry).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Comparison actually rendered once a strategy has seen the caller's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Fuzzy,
}

impl MatchMode {
    /// Conditional columns match exactly on the `null` token and by substring otherwise.
    pub fn resolve(strategy: Strategy, value: &str) -> Self {
        match strategy {
            Strategy::Exact => MatchMode::Exact,
            Strategy::Fuzzy => MatchMode::Fuzzy,
            Strategy::Conditional if value == "null" => MatchMode::Exact,
            Strategy::Conditional => MatchMode::Fuzzy,
        }
    }
}

/// SELECT list in registry order, so scans can read cells by position.
fn select_column_list(schema: &EntitySchema) -> String {
    schema
        .columns()
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT <cols> FROM <table> WHERE <column> (= ? | LIKE ?) ORDER BY id` with the value bound.
pub fn build(schema: &EntitySchema, column: &Column, strategy: Strategy, value: &str) -> QueryBuf {
    let mode = MatchMode::resolve(strategy, value);
    let (predicate, param) = match mode {
        MatchMode::Exact => ("= ?", SqlValue::for_exact(column.ty, value)),
        MatchMode::Fuzzy => ("LIKE ? ESCAPE '\\'", SqlValue::for_fuzzy(value)),
    };
    QueryBuf {
        sql: format!(
            "SELECT {} FROM {} WHERE {} {} ORDER BY {}",
            select_column_list(schema),
            quoted(schema.table),
            quoted(column.name),
            predicate,
            quoted("id")
        ),
        params: vec![param],
    }
}

/// INSERT OR REPLACE of every registry column; values bound in column order.
pub fn upsert(schema: &EntitySchema) -> String {
    let placeholders = vec!["?"; schema.columns().len()].join(", ");
    format!(
        "INSERT OR REPLACE INTO {} ({}) VALUES ({})",
        quoted(schema.table),
        select_column_list(schema),
        placeholders
    )
}

/// CREATE TABLE IF NOT EXISTS from the registry. `id` is the integer primary key.
pub fn create_table(schema: &EntitySchema) -> String {
    let cols = schema
        .columns()
        .iter()
        .map(|c| {
            if c.name == "id" {
                format!("{} INTEGER PRIMARY KEY", quoted(c.name))
            } else {
                format!("{} {} NOT NULL", quoted(c.name), c.ty.sql_type())
            }
        })
        .collect::<Vec<_>>()
        .join(",\n    ");
    format!("CREATE TABLE IF NOT EXISTS {} (\n    {}\n)", quoted(schema.table), cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Kind;

    fn column(kind: Kind, key: &str) -> &'static Column {
        kind.schema().column(key).unwrap()
    }

    #[test]
    fn exact_lookup_binds_parsed_integer() {
        let schema = Kind::Item.schema();
        let q = build(schema, column(Kind::Item, "id"), Strategy::Exact, "4151");
        assert!(q.sql.starts_with("SELECT \"id\", \"name\", \"examine\""));
        assert!(q.sql.ends_with("FROM \"items\" WHERE \"id\" = ? ORDER BY \"id\""));
        assert_eq!(q.params, vec![SqlValue::Int(4151)]);
    }

    #[test]
    fn fuzzy_lookup_uses_like_with_escape() {
        let schema = Kind::Npc.schema();
        let q = build(schema, column(Kind::Npc, "actions"), Strategy::Fuzzy, "Talk-to");
        assert!(q.sql.ends_with("FROM \"npcs\" WHERE \"actions\" LIKE ? ESCAPE '\\' ORDER BY \"id\""));
        assert_eq!(q.params, vec![SqlValue::Text("%Talk-to%".into())]);
    }

    #[test]
    fn conditional_resolves_on_value() {
        assert_eq!(MatchMode::resolve(Strategy::Conditional, "null"), MatchMode::Exact);
        assert_eq!(MatchMode::resolve(Strategy::Conditional, "Null"), MatchMode::Fuzzy);
        assert_eq!(MatchMode::resolve(Strategy::Conditional, "Guard"), MatchMode::Fuzzy);

        let schema = Kind::Object.schema();
        let q = build(schema, column(Kind::Object, "name"), Strategy::Conditional, "null");
        assert!(q.sql.contains("WHERE \"name\" = ?"));
        assert_eq!(q.params, vec![SqlValue::Text("null".into())]);
    }

    #[test]
    fn user_value_never_reaches_sql_text() {
        let schema = Kind::Item.schema();
        let hostile = "x' OR '1'='1";
        let q = build(schema, column(Kind::Item, "examine"), Strategy::Fuzzy, hostile);
        assert!(!q.sql.contains(hostile));
        assert_eq!(q.sql.matches('?').count(), 1);
    }

    #[test]
    fn upsert_has_one_placeholder_per_column() {
        for kind in Kind::ALL {
            let schema = kind.schema();
            let sql = upsert(schema);
            assert!(sql.starts_with(&format!("INSERT OR REPLACE INTO \"{}\"", schema.table)));
            assert_eq!(sql.matches('?').count(), schema.columns().len());
        }
    }

    #[test]
    fn create_table_types_columns() {
        let sql = create_table(Kind::Npc.schema());
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"npcs\""));
        assert!(sql.contains("\"id\" INTEGER PRIMARY KEY"));
        assert!(sql.contains("\"models\" TEXT NOT NULL"));
        assert!(sql.contains("\"is_pet\" INTEGER NOT NULL"));
        assert!(sql.contains("\"params\" TEXT NOT NULL"));
    }
}
