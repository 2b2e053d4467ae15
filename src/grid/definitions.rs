// src/grid/definitions.rs
use bevy::prelude::warn;
use serde::{
    de::{self, Deserializer},
    Deserialize, Serialize,
};
use serde_json::Value;
use std::fmt;

/// Sentinel injected upstream when a fetch could not produce a real value.
/// The formatter passes it through untouched so a bad fetch renders as
/// `#error` cells instead of crashing the grid.
pub const ERROR_SENTINEL: &str = "#error";

/// Declared semantic type of a column. Governs how raw field values are
/// parsed for display and whether the cell accepts inline edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum CellKind {
    #[default]
    Text,
    Integer,
    Decimal,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Custom Deserialize so configuration files may use the legacy spellings
// ("number", "integer-number", "decimal-number") alongside the canonical ones.
impl<'de> Deserialize<'de> for CellKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        let as_str = match v {
            Value::String(s) => s,
            other => {
                return Err(de::Error::custom(format!(
                    "CellKind must be a string, got {}",
                    other
                )))
            }
        };
        parse_cell_kind(&as_str)
            .ok_or_else(|| de::Error::custom(format!("Unknown CellKind '{}'", as_str)))
    }
}

pub fn parse_cell_kind(s: &str) -> Option<CellKind> {
    match s.trim() {
        "Text" | "text" => Some(CellKind::Text),
        "Integer" | "integer" | "integer-number" | "number" | "Number" => Some(CellKind::Integer),
        "Decimal" | "decimal" | "decimal-number" => Some(CellKind::Decimal),
        _ => None,
    }
}

/// Horizontal alignment the grid widget applies to a cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlign {
    #[default]
    Left,
    Right,
}

/// Stable identifier assigned to each row when the catalog is loaded.
/// Edits, the pending overlay, and restore all key on this id, so two rows
/// with identical field values are still addressed unambiguously.
pub type RowId = u64;

pub type FieldMap = serde_json::Map<String, Value>;

/// One catalog record: a stable id plus the raw field mapping as fetched.
/// Rows are immutable snapshots; an edit produces a new `CardRow`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRow {
    pub id: RowId,
    pub fields: FieldMap,
}

impl CardRow {
    pub fn new(id: RowId, fields: FieldMap) -> Self {
        Self { id, fields }
    }

    /// Raw value for a field key. Missing keys read as JSON null, which the
    /// formatter later coerces per the column's declared kind.
    pub fn field(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&Value::Null)
    }

    /// A copy of this row with exactly one field overwritten.
    pub fn with_field(&self, key: &str, value: Value) -> CardRow {
        let mut fields = self.fields.clone();
        fields.insert(key.to_string(), value);
        CardRow {
            id: self.id,
            fields,
        }
    }
}

/// Converts the raw `data` array of a catalog response into rows, assigning
/// stable ids by load order. Non-object entries are dropped with a warning.
pub fn rows_from_json(values: Vec<Value>) -> Vec<CardRow> {
    let mut rows = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match value {
            Value::Object(fields) => rows.push(CardRow::new(rows.len() as RowId, fields)),
            other => {
                warn!(
                    "Skipping catalog entry {}: expected an object, got {}",
                    index, other
                );
            }
        }
    }
    rows
}

/// Display-ready cell description consumed by the grid widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRecord {
    pub kind: CellKind,
    pub allow_overlay: bool,
    pub display_data: String,
    pub content_align: ContentAlign,
    pub data: Value,
    pub read_only: bool,
}
