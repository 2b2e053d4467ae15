// src/grid/formatter.rs
//! Pure conversion of raw field values into display-ready cell content.

use serde_json::Value;

use super::config::ColumnSpec;
use super::definitions::{CellKind, CellRecord, ContentAlign, ERROR_SENTINEL};

/// Result of formatting one raw value: the parsed internal value, the string
/// the grid shows, and the kind the cell resolved to (which may fall back to
/// `Text` when the declaration could not be honored).
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCell {
    pub data: Value,
    pub display: String,
    pub kind: CellKind,
}

impl FormattedCell {
    fn error(kind: CellKind) -> Self {
        Self {
            data: Value::String(ERROR_SENTINEL.to_string()),
            display: ERROR_SENTINEL.to_string(),
            kind,
        }
    }
}

/// Formats a raw field value according to the column's declared kind.
///
/// The `#error` sentinel passes through untouched so upstream fetch failures
/// render as error cells. Null input counts as zero for numeric kinds. A
/// declaration that cannot be honored (decimal kind without a precision, or
/// a numeric value that does not parse) degrades to the sentinel with the
/// kind forced to `Text` rather than panicking.
pub fn format_cell(value: &Value, kind: CellKind, decimal_point: Option<u8>) -> FormattedCell {
    if value.as_str() == Some(ERROR_SENTINEL) {
        return FormattedCell::error(kind);
    }

    match kind {
        CellKind::Text => {
            let display = display_string(value);
            FormattedCell {
                data: Value::String(display.clone()),
                display,
                kind: CellKind::Text,
            }
        }
        CellKind::Integer | CellKind::Decimal => {
            let Some(number) = coerce_number(value) else {
                return FormattedCell::error(CellKind::Text);
            };
            match (kind, decimal_point) {
                // A declared precision wins even on integer columns.
                (_, Some(digits)) => {
                    let factor = 10f64.powi(digits as i32);
                    let rounded = (number * factor).round() / factor;
                    FormattedCell {
                        data: Value::from(rounded),
                        display: format!("{:.*}", digits as usize, rounded),
                        kind,
                    }
                }
                (CellKind::Integer, None) => {
                    let truncated = number.trunc() as i64;
                    FormattedCell {
                        data: Value::from(truncated),
                        display: truncated.to_string(),
                        kind: CellKind::Integer,
                    }
                }
                // Decimal without a precision is an unsupported declaration.
                (_, None) => FormattedCell::error(CellKind::Text),
            }
        }
    }
}

/// Builds the record the grid widget consumes for one cell. Text cells are
/// read-only and left-aligned; numeric cells take the inline overlay editor
/// and align right.
pub fn cell_record(value: &Value, spec: &ColumnSpec) -> CellRecord {
    let formatted = format_cell(value, spec.kind, spec.decimal_point);
    let read_only = formatted.kind == CellKind::Text;
    CellRecord {
        kind: formatted.kind,
        allow_overlay: !read_only,
        display_data: formatted.display,
        content_align: if read_only {
            ContentAlign::Left
        } else {
            ContentAlign::Right
        },
        data: formatted.data,
        read_only,
    }
}

/// Placeholder record rendered while the grid has no rows to show.
pub fn placeholder_record() -> CellRecord {
    CellRecord {
        kind: CellKind::Text,
        allow_overlay: false,
        display_data: " ".to_string(),
        content_align: ContentAlign::Left,
        data: Value::String(" ".to_string()),
        read_only: true,
    }
}

/// Display form of a raw value for text cells.
fn display_string(value: &Value) -> String {
    match value {
        // Null counts as zero before formatting, even on text columns.
        Value::Null => "0".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Number(n) => n.as_f64(),
        // "inf"/"NaN" parse as f64 but cannot format as grid numbers.
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_sentinel_passes_through_with_kind_kept() {
        let cell = format_cell(&json!(ERROR_SENTINEL), CellKind::Integer, None);
        assert_eq!(cell.display, ERROR_SENTINEL);
        assert_eq!(cell.data, json!(ERROR_SENTINEL));
        assert_eq!(cell.kind, CellKind::Integer);
    }

    #[test]
    fn null_integer_input_formats_as_zero() {
        let cell = format_cell(&Value::Null, CellKind::Integer, None);
        assert_eq!(cell.data, json!(0));
        assert_eq!(cell.display, "0");
    }

    #[test]
    fn decimal_kind_rounds_and_pads_to_declared_precision() {
        let cell = format_cell(&json!(3), CellKind::Decimal, Some(2));
        assert_eq!(cell.data, json!(3.0));
        assert_eq!(cell.display, "3.00");

        let rounded = format_cell(&json!(2.567), CellKind::Decimal, Some(2));
        assert_eq!(rounded.display, "2.57");
        assert_eq!(rounded.data, json!(2.57));
    }

    #[test]
    fn decimal_display_round_trips_through_parse() {
        for raw in [json!(1.005), json!(42), json!("7.25"), Value::Null] {
            let cell = format_cell(&raw, CellKind::Decimal, Some(2));
            let reparsed: f64 = cell.display.parse().unwrap();
            assert_eq!(cell.data, json!(reparsed), "input {raw}");
            let fraction = cell.display.split('.').nth(1).unwrap();
            assert_eq!(fraction.len(), 2, "input {raw}");
        }
    }

    #[test]
    fn integer_kind_truncates_toward_zero() {
        assert_eq!(format_cell(&json!(3.9), CellKind::Integer, None).display, "3");
        assert_eq!(format_cell(&json!(-3.9), CellKind::Integer, None).display, "-3");
        assert_eq!(format_cell(&json!("12.7"), CellKind::Integer, None).display, "12");
    }

    #[test]
    fn text_formatting_is_idempotent_on_its_own_output() {
        for raw in [json!("Ajani"), json!(3.5), json!(true), Value::Null] {
            let once = format_cell(&raw, CellKind::Text, None);
            let twice = format_cell(&Value::String(once.display.clone()), CellKind::Text, None);
            assert_eq!(once.display, twice.display);
        }
    }

    #[test]
    fn unparseable_numeric_degrades_to_text_sentinel() {
        let cell = format_cell(&json!("two"), CellKind::Integer, None);
        assert_eq!(cell.display, ERROR_SENTINEL);
        assert_eq!(cell.kind, CellKind::Text);

        for raw in ["inf", "-inf", "NaN"] {
            let cell = format_cell(&json!(raw), CellKind::Integer, None);
            assert_eq!(cell.display, ERROR_SENTINEL, "input {raw}");
            let cell = format_cell(&json!(raw), CellKind::Decimal, Some(2));
            assert_eq!(cell.display, ERROR_SENTINEL, "input {raw}");
        }

        let no_precision = format_cell(&json!(3), CellKind::Decimal, None);
        assert_eq!(no_precision.display, ERROR_SENTINEL);
        assert_eq!(no_precision.kind, CellKind::Text);
    }

    #[test]
    fn cell_record_marks_text_read_only_and_numbers_editable() {
        let text_spec = ColumnSpec::new("Name", "name", 120.0, CellKind::Text);
        let record = cell_record(&json!("Ajani"), &text_spec);
        assert!(record.read_only);
        assert!(!record.allow_overlay);
        assert_eq!(record.content_align, ContentAlign::Left);

        let power_spec = ColumnSpec::new("POW", "power", 80.0, CellKind::Integer);
        let record = cell_record(&json!(4), &power_spec);
        assert!(!record.read_only);
        assert!(record.allow_overlay);
        assert_eq!(record.content_align, ContentAlign::Right);
        assert_eq!(record.display_data, "4");
    }

}
