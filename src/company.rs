//! Company records - stored rows and their API shape
//!
//! Rows are read as they are stored. The interest indicator keeps its stored
//! representation (`RawPriority`) and the normalized tier (`Rarity`) is derived
//! only when a row is shaped for the API.

use crate::storage::schema::columns;
use crate::{Error, Result};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder shown when a company has no business description.
pub const SHORT_DESCRIPTION_FALLBACK: &str = "See details";

/// Positions are not tracked; every company gets the same hint.
pub const POSITIONS_PLACEHOLDER: &str = "Check on site";

/// Maximum number of characters kept in `shortDescription` before the ellipsis.
pub const SHORT_DESCRIPTION_LEN: usize = 100;

/// The stored interest indicator, exactly as SQLite returned it.
///
/// Historical data mixes integers (`0`, `1`, `2`) with text such as
/// `"tak"`, `"nie"`, `"yes"`. The value is never rewritten on read.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawPriority {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl RawPriority {
    /// Priority from a request value. Containers are stored as their JSON text.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawPriority::Null,
            serde_json::Value::Bool(b) => RawPriority::Integer(i64::from(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => RawPriority::Integer(i),
                None => n
                    .as_f64()
                    .map(RawPriority::Real)
                    .unwrap_or_else(|| RawPriority::Text(n.to_string())),
            },
            serde_json::Value::String(s) => RawPriority::Text(s),
            other => RawPriority::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawPriority::Null)
    }

    /// Text rendering of the value, `None` for SQL NULL.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawPriority::Null => None,
            RawPriority::Integer(i) => Some(i.to_string()),
            RawPriority::Real(f) => Some(f.to_string()),
            RawPriority::Text(s) => Some(s.clone()),
        }
    }
}

impl From<ValueRef<'_>> for RawPriority {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => RawPriority::Null,
            ValueRef::Integer(i) => RawPriority::Integer(i),
            ValueRef::Real(f) => RawPriority::Real(f),
            ValueRef::Text(t) | ValueRef::Blob(t) => {
                RawPriority::Text(String::from_utf8_lossy(t).into_owned())
            }
        }
    }
}

impl FromSql for RawPriority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(value.into())
    }
}

impl ToSql for RawPriority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            RawPriority::Null => ToSqlOutput::Owned(Value::Null),
            RawPriority::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            RawPriority::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            RawPriority::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl Serialize for RawPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RawPriority::Null => serializer.serialize_none(),
            RawPriority::Integer(i) => serializer.serialize_i64(*i),
            RawPriority::Real(f) => serializer.serialize_f64(*f),
            RawPriority::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RawPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(RawPriority::from_json)
    }
}

/// Normalized interest tier derived from a `RawPriority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rarity {
    #[default]
    Low,
    Medium,
    High,
}

impl Rarity {
    /// Integer conversion of the raw value; anything unparseable or outside
    /// `0..=2` collapses to `Low`.
    pub fn from_raw(raw: &RawPriority) -> Self {
        let level = match raw {
            RawPriority::Integer(i) => Some(*i),
            RawPriority::Real(f) if f.is_finite() => Some(f.trunc() as i64),
            RawPriority::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        match level {
            Some(1) => Rarity::Medium,
            Some(2) => Rarity::High,
            _ => Rarity::Low,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Rarity::Low => 0,
            Rarity::Medium => 1,
            Rarity::High => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Low => "low",
            Rarity::Medium => "medium",
            Rarity::High => "high",
        }
    }
}

impl Serialize for Rarity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A row of the `companies` table.
///
/// Every column except `id` is nullable free text in practice, so all of
/// them are optional here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyRecord {
    pub id: i64,
    pub company: Option<String>,
    pub country: Option<String>,
    pub stand: Option<String>,
    pub description: Option<String>,
    pub problems: Option<String>,
    pub opportunities: Option<String>,
    pub hook1: Option<String>,
    pub hook2: Option<String>,
    pub hook3: Option<String>,
    pub priority: RawPriority,
}

impl CompanyRecord {
    /// Non-blank hooks, trimmed, in column order.
    pub fn hooks(&self) -> Vec<String> {
        [&self.hook1, &self.hook2, &self.hook3]
            .into_iter()
            .flatten()
            .map(|hook| hook.trim())
            .filter(|hook| !hook.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn rarity(&self) -> Rarity {
        Rarity::from_raw(&self.priority)
    }

    /// First `SHORT_DESCRIPTION_LEN` characters plus `...` when longer,
    /// the description itself when short, the placeholder when empty.
    pub fn short_description(&self) -> String {
        match self.description.as_deref() {
            Some(desc) if desc.chars().count() > SHORT_DESCRIPTION_LEN => {
                let head: String = desc.chars().take(SHORT_DESCRIPTION_LEN).collect();
                format!("{}...", head)
            }
            Some(desc) if !desc.is_empty() => desc.to_string(),
            _ => SHORT_DESCRIPTION_FALLBACK.to_string(),
        }
    }
}

/// Company as returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: Option<String>,
    pub booth_number: Option<String>,
    pub country: Option<String>,
    pub positions: Vec<String>,
    pub short_description: String,
    pub description: Option<String>,
    pub problems: Option<String>,
    pub opportunities: Option<String>,
    pub rarity: Rarity,
    pub hooks: Vec<String>,
}

impl From<&CompanyRecord> for Company {
    fn from(record: &CompanyRecord) -> Self {
        Company {
            id: record.id,
            name: record.company.clone(),
            booth_number: record.stand.clone(),
            country: record.country.clone(),
            positions: vec![POSITIONS_PLACEHOLDER.to_string()],
            short_description: record.short_description(),
            description: record.description.clone(),
            problems: record.problems.clone(),
            opportunities: record.opportunities.clone(),
            rarity: record.rarity(),
            hooks: record.hooks(),
        }
    }
}

impl From<CompanyRecord> for Company {
    fn from(record: CompanyRecord) -> Self {
        Company::from(&record)
    }
}

/// Writable column set for inserts and full overwrites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFields {
    pub company: Option<String>,
    pub country: Option<String>,
    pub stand: Option<String>,
    pub description: Option<String>,
    pub problems: Option<String>,
    pub opportunities: Option<String>,
    pub hook1: Option<String>,
    pub hook2: Option<String>,
    pub hook3: Option<String>,
    pub priority: RawPriority,
}

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Parse a JSON body into a non-empty object, `None` otherwise.
fn body_object(body: &[u8]) -> Option<JsonMap> {
    match serde_json::from_slice::<serde_json::Value>(body).ok()? {
        serde_json::Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

/// Value sent for a column. The stored column name wins over the short key
/// when a body carries both.
fn field(map: &JsonMap, column: &str, key: &str) -> Option<serde_json::Value> {
    map.get(column).or_else(|| map.get(key)).cloned()
}

/// Text column value. Numbers and booleans are kept as the text SQLite
/// would store for them in a TEXT column.
fn text_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        other => Some(other.to_string()),
    }
}

fn text_field(map: &JsonMap, column: &str, key: &str) -> Option<String> {
    field(map, column, key).and_then(text_value)
}

/// JSON falsiness: null, `false`, zero and empty strings or containers.
fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(map) => map.is_empty(),
    }
}

impl CompanyFields {
    fn from_map(map: &JsonMap, default_priority: RawPriority) -> Self {
        CompanyFields {
            company: text_field(map, columns::COMPANY, "company"),
            country: text_field(map, columns::COUNTRY, "country"),
            stand: text_field(map, columns::STAND, "stand"),
            description: text_field(map, columns::DESCRIPTION, "description"),
            problems: text_field(map, columns::PROBLEMS, "problems"),
            opportunities: text_field(map, columns::OPPORTUNITIES, "opportunities"),
            hook1: text_field(map, columns::HOOK1, "hook1"),
            hook2: text_field(map, columns::HOOK2, "hook2"),
            hook3: text_field(map, columns::HOOK3, "hook3"),
            priority: field(map, columns::PRIORITY, "priority")
                .map(RawPriority::from_json)
                .unwrap_or(default_priority),
        }
    }

    /// Fields for a new company. `company` must be present and truthy;
    /// a missing priority defaults to `0`.
    pub fn parse_create(body: &[u8]) -> Result<Self> {
        let map = body_object(body)
            .ok_or_else(|| Error::Validation("Company name is required".to_string()))?;

        if map.get(columns::COMPANY).is_none_or(is_falsy) {
            return Err(Error::Validation("Company name is required".to_string()));
        }

        Ok(Self::from_map(&map, RawPriority::Integer(0)))
    }

    /// Fields for a full overwrite. Absent keys become NULL.
    pub fn parse_update(body: &[u8]) -> Result<Self> {
        let map = body_object(body)
            .ok_or_else(|| Error::Validation("No data to update".to_string()))?;
        Ok(Self::from_map(&map, RawPriority::Null))
    }

    pub fn named(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: RawPriority) -> Self {
        self.priority = priority;
        self
    }
}
