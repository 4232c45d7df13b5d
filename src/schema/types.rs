//! Registry types: kinds, columns, typed field values and entities.

use crate::codec;
use crate::error::{CodecError, ConfigError, DecodeError};
use crate::schema::tables;
use crate::sql::SqlValue;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Category of game definition. Each kind has its own table, source directory and route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Item,
    Npc,
    Object,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Item, Kind::Npc, Kind::Object];

    /// Route segment, also the table name.
    pub fn route(self) -> &'static str {
        match self {
            Kind::Item => "items",
            Kind::Npc => "npcs",
            Kind::Object => "objects",
        }
    }

    /// Singular name used in "not found" messages.
    pub fn noun(self) -> &'static str {
        match self {
            Kind::Item => "item",
            Kind::Npc => "npc",
            Kind::Object => "object",
        }
    }

    pub fn schema(self) -> &'static EntitySchema {
        match self {
            Kind::Item => &tables::ITEMS,
            Kind::Npc => &tables::NPCS,
            Kind::Object => &tables::OBJECTS,
        }
    }

    pub fn from_route(route: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.route() == route)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Kind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_route(s.trim()).ok_or_else(|| ConfigError::UnknownKind(s.to_string()))
    }
}

/// How a column is matched when queried by key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `column = ?`
    Exact,
    /// `column LIKE '%value%'`
    Fuzzy,
    /// Exact against the column sentinel when the value is `null`, otherwise fuzzy.
    Conditional,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Fuzzy => "fuzzy",
            Strategy::Conditional => "conditional",
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Strategy::Exact),
            "fuzzy" => Ok(Strategy::Fuzzy),
            "conditional" => Ok(Strategy::Conditional),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Semantic class of a column; decides storage, decoding and the default lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Boolean,
    Text,
    IntList,
    TextList,
    Params,
}

impl ColumnType {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean => "INTEGER",
            ColumnType::Text | ColumnType::IntList | ColumnType::TextList | ColumnType::Params => "TEXT",
        }
    }

    pub fn default_strategy(self) -> Strategy {
        match self {
            ColumnType::Integer | ColumnType::Boolean => Strategy::Exact,
            ColumnType::Text | ColumnType::IntList | ColumnType::TextList | ColumnType::Params => {
                Strategy::Fuzzy
            }
        }
    }

    /// Value taken by a missing or `null` source key.
    pub fn zero(self) -> FieldValue {
        match self {
            ColumnType::Integer => FieldValue::Int(0),
            ColumnType::Boolean => FieldValue::Bool(false),
            ColumnType::Text => FieldValue::Text(String::new()),
            ColumnType::IntList => FieldValue::IntList(Vec::new()),
            ColumnType::TextList => FieldValue::TextList(Vec::new()),
            ColumnType::Params => FieldValue::Params(Map::new()),
        }
    }

    /// Stored form of the zero value; used when a value cannot be encoded.
    pub fn default_stored(self) -> SqlValue {
        match self {
            ColumnType::Integer => SqlValue::Int(0),
            ColumnType::Boolean => SqlValue::Bool(false),
            ColumnType::Text => SqlValue::Text(String::new()),
            ColumnType::IntList | ColumnType::TextList => SqlValue::Text("[]".into()),
            ColumnType::Params => SqlValue::Text("{}".into()),
        }
    }

    /// Stored form of "intentionally absent" for this type.
    pub fn sentinel(self) -> SqlValue {
        match self {
            ColumnType::Integer => SqlValue::Int(-1),
            ColumnType::Boolean => SqlValue::Bool(false),
            ColumnType::Text => SqlValue::Text("null".into()),
            ColumnType::IntList | ColumnType::TextList => SqlValue::Text("[]".into()),
            ColumnType::Params => SqlValue::Text("{}".into()),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "string",
            ColumnType::IntList => "array of integers",
            ColumnType::TextList => "array of strings",
            ColumnType::Params => "object of scalars",
        }
    }
}

/// One registry column: SQL name, JSON key, semantic type, lookup override and
/// alternative source spellings.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub key: &'static str,
    pub ty: ColumnType,
    pub lookup: Option<Strategy>,
    pub aliases: &'static [&'static str],
}

impl Column {
    pub const fn new(name: &'static str, key: &'static str, ty: ColumnType) -> Self {
        Column {
            name,
            key,
            ty,
            lookup: None,
            aliases: &[],
        }
    }

    pub const fn int(name: &'static str, key: &'static str) -> Self {
        Column::new(name, key, ColumnType::Integer)
    }

    pub const fn flag(name: &'static str, key: &'static str) -> Self {
        Column::new(name, key, ColumnType::Boolean)
    }

    pub const fn text(name: &'static str, key: &'static str) -> Self {
        Column::new(name, key, ColumnType::Text)
    }

    pub const fn int_list(name: &'static str, key: &'static str) -> Self {
        Column::new(name, key, ColumnType::IntList)
    }

    pub const fn text_list(name: &'static str, key: &'static str) -> Self {
        Column::new(name, key, ColumnType::TextList)
    }

    pub const fn params(name: &'static str, key: &'static str) -> Self {
        Column::new(name, key, ColumnType::Params)
    }

    pub const fn lookup(self, strategy: Strategy) -> Self {
        Column {
            lookup: Some(strategy),
            ..self
        }
    }

    pub const fn alias(self, aliases: &'static [&'static str]) -> Self {
        Column { aliases, ..self }
    }

    pub fn strategy(&self) -> Strategy {
        self.lookup.unwrap_or_else(|| self.ty.default_strategy())
    }

    /// True for the SQL name or the JSON key.
    pub fn answers_to(&self, key: &str) -> bool {
        self.name == key || self.key == key
    }

    /// Source value for this column: the JSON key first, then any alias.
    fn source_value<'a>(&self, record: &'a Map<String, Value>) -> Option<&'a Value> {
        record
            .get(self.key)
            .or_else(|| self.aliases.iter().find_map(|a| record.get(*a)))
    }

    /// Decode one attribute of a source record. Missing and `null` give the zero value.
    pub fn decode_source(&self, raw: Option<&Value>) -> Result<FieldValue, DecodeError> {
        let raw = match raw {
            None | Some(Value::Null) => return Ok(self.ty.zero()),
            Some(v) => v,
        };
        let mismatch = || DecodeError::FieldType {
            key: self.key,
            expected: self.ty.expected(),
        };
        Ok(match self.ty {
            ColumnType::Integer => match raw {
                Value::Number(n) => FieldValue::Int(n.as_i64().ok_or_else(mismatch)?),
                Value::Bool(b) => FieldValue::Int(i64::from(*b)),
                _ => return Err(mismatch()),
            },
            ColumnType::Boolean => match raw {
                Value::Bool(b) => FieldValue::Bool(*b),
                Value::Number(n) => FieldValue::Bool(n.as_i64().ok_or_else(mismatch)? != 0),
                _ => return Err(mismatch()),
            },
            ColumnType::Text => match raw {
                Value::String(s) => FieldValue::Text(s.clone()),
                _ => return Err(mismatch()),
            },
            ColumnType::IntList => {
                let arr = raw.as_array().ok_or_else(mismatch)?;
                let ints = arr
                    .iter()
                    .map(|v| v.as_i64().ok_or_else(mismatch))
                    .collect::<Result<Vec<_>, _>>()?;
                FieldValue::IntList(ints)
            }
            ColumnType::TextList => {
                let arr = raw.as_array().ok_or_else(mismatch)?;
                let strings = arr
                    .iter()
                    .map(|v| match v {
                        Value::Null => Ok(None),
                        Value::String(s) => Ok(Some(s.clone())),
                        _ => Err(mismatch()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                FieldValue::TextList(strings)
            }
            ColumnType::Params => {
                let obj = raw.as_object().ok_or_else(mismatch)?;
                if obj.values().any(|v| v.is_array() || v.is_object()) {
                    return Err(mismatch());
                }
                FieldValue::Params(obj.clone())
            }
        })
    }

    /// Registry `serialize`: the storable form of a value of this column.
    pub fn serialize(&self, value: &FieldValue) -> Result<SqlValue, CodecError> {
        value.to_stored()
    }

    /// Registry `deserialize`: typed value from its stored form.
    ///
    /// The row scanner reads integer and boolean columns natively; the text arms for
    /// those types serve callers holding values from other sources (SQL literals,
    /// exports).
    pub fn deserialize(&self, stored: SqlValue) -> Result<FieldValue, CodecError> {
        Ok(match (self.ty, stored) {
            (_, SqlValue::Null) => self.ty.zero(),
            (ColumnType::Integer, SqlValue::Int(n)) => FieldValue::Int(n),
            (ColumnType::Integer, SqlValue::Bool(b)) => FieldValue::Int(i64::from(b)),
            (ColumnType::Integer, SqlValue::Text(s)) => FieldValue::Int(codec::decode_scalar(&s, "integer")?),
            (ColumnType::Boolean, SqlValue::Bool(b)) => FieldValue::Bool(b),
            (ColumnType::Boolean, SqlValue::Int(n)) => FieldValue::Bool(n != 0),
            (ColumnType::Boolean, SqlValue::Text(s)) => FieldValue::Bool(codec::decode_scalar(&s, "boolean")?),
            (ColumnType::Text, SqlValue::Text(s)) => FieldValue::Text(s),
            (ColumnType::Text, SqlValue::Int(n)) => FieldValue::Text(n.to_string()),
            (ColumnType::Text, SqlValue::Bool(b)) => FieldValue::Text(b.to_string()),
            (ColumnType::IntList, SqlValue::Text(s)) => FieldValue::IntList(codec::decode_list(&s)?),
            (ColumnType::TextList, SqlValue::Text(s)) => FieldValue::TextList(codec::decode_list(&s)?),
            (ColumnType::Params, SqlValue::Text(s)) => FieldValue::Params(codec::decode_map(&s)?),
            (ColumnType::IntList | ColumnType::TextList | ColumnType::Params, other) => {
                return Err(codec::not_text(self.ty.expected(), &other));
            }
        })
    }
}

/// A typed attribute value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Bool(bool),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<Option<String>>),
    Params(Map<String, Value>),
}

impl FieldValue {
    pub fn to_stored(&self) -> Result<SqlValue, CodecError> {
        Ok(match self {
            FieldValue::Int(n) => SqlValue::Int(*n),
            FieldValue::Bool(b) => SqlValue::Bool(*b),
            FieldValue::Text(s) => SqlValue::Text(s.clone()),
            FieldValue::IntList(v) => SqlValue::Text(codec::encode_list(v)?),
            FieldValue::TextList(v) => SqlValue::Text(codec::encode_list(v)?),
            FieldValue::Params(m) => SqlValue::Text(codec::encode_map(m)?),
        })
    }
}

/// Table definition for one kind. Column order is the insert order and the scan order.
#[derive(Debug)]
pub struct EntitySchema {
    pub kind: Kind,
    pub table: &'static str,
    pub source_dir: &'static str,
    pub columns: &'static [Column],
}

impl EntitySchema {
    pub fn columns(&self) -> &'static [Column] {
        self.columns
    }

    /// Column by SQL name or JSON key.
    pub fn column(&self, key: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.answers_to(key))
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.answers_to(key))
    }

    /// Decode one source file body into an entity.
    pub fn decode_record(&self, bytes: &[u8]) -> Result<Entity, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let record = value.as_object().ok_or(DecodeError::NotAnObject)?;
        let values = self
            .columns
            .iter()
            .map(|c| c.decode_source(c.source_value(record)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Entity {
            kind: self.kind,
            values,
        })
    }
}

/// One definition record: values aligned with its kind's registry columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    kind: Kind,
    values: Vec<FieldValue>,
}

impl Entity {
    /// Values must be in registry column order.
    pub(crate) fn from_values(kind: Kind, values: Vec<FieldValue>) -> Self {
        Entity { kind, values }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        match self.values.first() {
            Some(FieldValue::Int(id)) => *id,
            _ => 0,
        }
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.kind.schema().position(key).and_then(|i| self.values.get(i))
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.kind.schema().columns();
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in columns.iter().zip(&self.values) {
            map.serialize_entry(column.key, value)?;
        }
        map.end()
    }
}
