// src/grid/config.rs
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::definitions::CellKind;

pub const DEFAULT_COLUMN_WIDTH: f32 = 120.0;

fn default_column_width() -> f32 {
    DEFAULT_COLUMN_WIDTH
}

/// One column of the grid: display title, field key into the row mapping,
/// pixel width, and the formatting declaration for that field. The title/id
/// pair and the format declaration used to live in two parallel lists joined
/// by string key at render time; merging them here lets `GridConfig::new`
/// reject an incomplete setup before the first frame instead of mid-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub title: String,
    pub id: String,
    #[serde(default = "default_column_width")]
    pub width: f32,
    #[serde(default)]
    pub kind: CellKind,
    /// Fixed fraction digits for decimal formatting. Required when `kind`
    /// is `Decimal`, rejected on `Text` columns.
    #[serde(default)]
    pub decimal_point: Option<u8>,
}

impl ColumnSpec {
    pub fn new(title: &str, id: &str, width: f32, kind: CellKind) -> Self {
        Self {
            title: title.to_string(),
            id: id.to_string(),
            width,
            kind,
            decimal_point: None,
        }
    }

    pub fn with_decimal_point(mut self, digits: u8) -> Self {
        self.decimal_point = Some(digits);
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read column configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse column configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("column configuration is empty")]
    Empty,
    #[error("column {index} has a blank title")]
    BlankTitle { index: usize },
    #[error("column '{title}' has a blank field id")]
    BlankId { title: String },
    #[error("field id '{id}' is declared by more than one column")]
    DuplicateId { id: String },
    #[error("decimal column '{id}' does not declare decimal_point")]
    MissingPrecision { id: String },
    #[error("text column '{id}' declares decimal_point")]
    PrecisionOnText { id: String },
}

/// Validated, ordered set of grid columns. Construction is the only place a
/// misconfigured column set is allowed to fail loudly; every lookup after
/// startup can assume one resolvable kind per field id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridConfig {
    columns: Vec<ColumnSpec>,
}

impl GridConfig {
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self, ConfigError> {
        if columns.is_empty() {
            return Err(ConfigError::Empty);
        }
        let mut seen_ids: Vec<&str> = Vec::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            if column.title.trim().is_empty() {
                return Err(ConfigError::BlankTitle { index });
            }
            if column.id.trim().is_empty() {
                return Err(ConfigError::BlankId {
                    title: column.title.clone(),
                });
            }
            if seen_ids.contains(&column.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    id: column.id.clone(),
                });
            }
            seen_ids.push(column.id.as_str());
            match column.kind {
                CellKind::Decimal if column.decimal_point.is_none() => {
                    return Err(ConfigError::MissingPrecision {
                        id: column.id.clone(),
                    });
                }
                CellKind::Text if column.decimal_point.is_some() => {
                    return Err(ConfigError::PrecisionOnText {
                        id: column.id.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(Self { columns })
    }

    /// Loads and validates a column set from a JSON file with the same shape
    /// as the compiled-in default (an array of column objects).
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let columns: Vec<ColumnSpec> = serde_json::from_str(&raw)?;
        Self::new(columns)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The compiled-in column set for the card catalog endpoint.
    pub fn card_catalog() -> Self {
        Self::new(vec![
            ColumnSpec::new("Name", "name", 120.0, CellKind::Text),
            ColumnSpec::new("Mana Cost", "mana_cost", 120.0, CellKind::Text),
            ColumnSpec::new("CMC", "cmc", 80.0, CellKind::Decimal).with_decimal_point(2),
            ColumnSpec::new("Type", "type_line", 160.0, CellKind::Text),
            ColumnSpec::new("POW", "power", 80.0, CellKind::Integer),
            ColumnSpec::new("TOU", "toughness", 80.0, CellKind::Integer),
            ColumnSpec::new("Set", "set", 160.0, CellKind::Text),
            ColumnSpec::new("Nº", "collector_number", 80.0, CellKind::Integer),
            ColumnSpec::new("Oracle", "oracle_text", 300.0, CellKind::Text),
            ColumnSpec::new("Flavor Text", "flavor_text", 300.0, CellKind::Text),
        ])
        .expect("compiled-in card catalog columns must validate")
    }
}
