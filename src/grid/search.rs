// src/grid/search.rs
//! Overlay reconciliation and the contains-anywhere row filter.

use std::collections::BTreeMap;

use serde_json::Value;

use super::definitions::{CardRow, RowId};

/// Merges the pending-edits overlay into the fetched rows: every row whose id
/// has a pending snapshot is replaced by that snapshot, everything else is
/// kept as fetched. Always a full reconciliation, never incremental, so
/// applying it twice with the same overlay is a no-op.
pub fn restore_changes(fetched: &[CardRow], pending: &BTreeMap<RowId, CardRow>) -> Vec<CardRow> {
    fetched
        .iter()
        .map(|row| pending.get(&row.id).unwrap_or(row).clone())
        .collect()
}

/// Keeps the rows where any field matches the term. String fields match by
/// case-insensitive substring; everything else by exact equality between the
/// raw term and the value's JSON string form. An empty term keeps every row.
pub fn search_rows(term: &str, rows: &[CardRow]) -> Vec<CardRow> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let needle = term.to_uppercase();
    rows.iter()
        .filter(|row| row.fields.values().any(|v| value_matches(v, &needle, term)))
        .cloned()
        .collect()
}

fn value_matches(value: &Value, needle_upper: &str, raw_term: &str) -> bool {
    match value {
        Value::String(s) => s.to_uppercase().contains(needle_upper),
        // Raw JSON string form: null compares as "null", not as the zero the
        // formatter substitutes for display.
        other => other.to_string() == raw_term,
    }
}
