//! Values bound to SQLite statements.

use crate::schema::ColumnType;
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite query, or read back from a column.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Bool(bool),
    Text(String),
}

impl SqlValue {
    /// Bind value for an exact match against a column of `ty`, from a raw path segment.
    /// `null` is the column's sentinel. Text that does not parse for the column binds
    /// as-is and matches nothing.
    pub fn for_exact(ty: ColumnType, raw: &str) -> Self {
        if raw == "null" {
            return ty.sentinel();
        }
        match ty {
            ColumnType::Integer => raw
                .parse::<i64>()
                .map(SqlValue::Int)
                .unwrap_or_else(|_| SqlValue::Text(raw.to_string())),
            ColumnType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => SqlValue::Bool(true),
                "false" | "0" => SqlValue::Bool(false),
                _ => SqlValue::Text(raw.to_string()),
            },
            ColumnType::Text | ColumnType::IntList | ColumnType::TextList | ColumnType::Params => {
                SqlValue::Text(raw.to_string())
            }
        }
    }

    /// Bind value for a `LIKE ? ESCAPE '\'` match: wildcard-wrapped, with `%`, `_` and `\`
    /// in the caller's text escaped so they match literally.
    pub fn for_fuzzy(raw: &str) -> Self {
        let mut pattern = String::with_capacity(raw.len() + 2);
        pattern.push('%');
        for c in raw.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        SqlValue::Text(pattern)
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlValue::Null => <Option<i64> as Encode<Sqlite>>::encode_by_ref(&None, buf)?,
            SqlValue::Int(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            SqlValue::Bool(b) => <bool as Encode<Sqlite>>::encode_by_ref(b, buf)?,
            SqlValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf)?,
        })
    }
}

impl sqlx::Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}
