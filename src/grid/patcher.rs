// src/grid/patcher.rs
//! Single-cell edits against the rendered row collection.

use serde_json::Value;

use super::definitions::CardRow;

/// Applies one cell edit and returns the new row collection plus the updated
/// row (the latter feeds the pending-edits overlay).
///
/// `cell` is `(column index, visible row index)` into the currently rendered
/// list. The target row is resolved by its stable id, so rows whose field
/// values happen to be identical are still patched unambiguously. Out-of-range
/// coordinates return `None` and the caller drops the edit silently.
pub fn patch_cell(
    new_value: &Value,
    cell: (usize, usize),
    rows: &[CardRow],
    column_ids: &[String],
) -> Option<(Vec<CardRow>, CardRow)> {
    let (col, row_index) = cell;
    let key = column_ids.get(col)?;
    let target = rows.get(row_index)?;

    let updated_row = target.with_field(key, new_value.clone());
    let updated_rows = rows
        .iter()
        .map(|row| {
            if row.id == updated_row.id {
                updated_row.clone()
            } else {
                row.clone()
            }
        })
        .collect();

    Some((updated_rows, updated_row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::{rows_from_json, CardRow};
    use serde_json::json;

    fn fixture_rows() -> Vec<CardRow> {
        rows_from_json(vec![
            json!({"name": "Ajani", "power": 2}),
            json!({"name": "Bolas", "power": 7}),
        ])
    }

    fn column_ids() -> Vec<String> {
        vec!["name".to_string(), "power".to_string()]
    }

    #[test]
    fn patches_exactly_one_row_and_returns_it() {
        let rows = fixture_rows();
        let (updated, row) = patch_cell(&json!(5), (1, 0), &rows, &column_ids()).unwrap();
        assert_eq!(row.id, rows[0].id);
        assert_eq!(row.field("power"), &json!(5));
        assert_eq!(updated[0].field("power"), &json!(5));
        assert_eq!(updated[1], rows[1]);
    }

    #[test]
    fn identical_rows_are_disambiguated_by_id() {
        // Two field-for-field identical rows: editing the second by index
        // must patch the second, not the first structural match.
        let rows = rows_from_json(vec![
            json!({"name": "Clone", "power": 1}),
            json!({"name": "Clone", "power": 1}),
        ]);
        let (updated, row) = patch_cell(&json!(9), (1, 1), &rows, &column_ids()).unwrap();
        assert_eq!(row.id, rows[1].id);
        assert_eq!(updated[0].field("power"), &json!(1));
        assert_eq!(updated[1].field("power"), &json!(9));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let rows = fixture_rows();
        assert!(patch_cell(&json!(1), (5, 0), &rows, &column_ids()).is_none());
        assert!(patch_cell(&json!(1), (0, 5), &rows, &column_ids()).is_none());
    }

    #[test]
    fn original_collection_is_left_untouched() {
        let rows = fixture_rows();
        let (_, _) = patch_cell(&json!("Nahiri"), (0, 0), &rows, &column_ids()).unwrap();
        assert_eq!(rows[0].field("name"), &json!("Ajani"));
    }
}
