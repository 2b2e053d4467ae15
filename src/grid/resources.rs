// src/grid/resources.rs
use bevy::prelude::*;
use std::collections::BTreeMap;

use super::definitions::{CardRow, RowId};
use super::search::restore_changes;

/// Gate for the initial asynchronous catalog fetch. The grid renders only in
/// `Ready`; a failed fetch is logged and the grid simply never appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogLoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Which of the two controller states the rendered list reflects: the full
/// reconciled list, or the subset matching the active search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Idle,
    Filtered,
}

/// The three reconciled views of the catalog plus the pending-edits overlay.
///
/// `snapshot` is the original load result and only changes on a fresh fetch;
/// `fetched` is the reconciliation base; `rendered` is what the table shows.
/// `rendered` diverges from a full reconciliation only between a cell edit
/// and the next restore/search/discard.
#[derive(Resource, Debug, Default)]
pub struct CardCatalog {
    pub snapshot: Vec<CardRow>,
    pub fetched: Vec<CardRow>,
    pub rendered: Vec<CardRow>,
    pub pending: BTreeMap<RowId, CardRow>,
    pub load_state: CatalogLoadState,
    pub view_mode: ViewMode,
}

impl CardCatalog {
    /// Installs a freshly fetched row set and opens the grid.
    pub fn install_snapshot(&mut self, rows: Vec<CardRow>) {
        self.snapshot = rows.clone();
        self.fetched = rows.clone();
        self.rendered = rows;
        self.pending.clear();
        self.load_state = CatalogLoadState::Ready;
        self.view_mode = ViewMode::Idle;
    }

    /// Full reconciliation: rendered becomes the fetched list with every
    /// pending snapshot substituted in. Leaves the overlay untouched.
    pub fn restore(&mut self) {
        self.rendered = restore_changes(&self.fetched, &self.pending);
        self.view_mode = ViewMode::Idle;
    }

    /// Records one applied edit: the rendered list was already patched, the
    /// overlay gains (or replaces) the snapshot for that row id.
    pub fn record_edit(&mut self, updated_rows: Vec<CardRow>, updated_row: CardRow) {
        self.rendered = updated_rows;
        self.pending.insert(updated_row.id, updated_row);
    }

    /// Drops the overlay and resets both row views to the load snapshot.
    pub fn discard(&mut self) {
        self.pending.clear();
        self.fetched = self.snapshot.clone();
        self.rendered = self.snapshot.clone();
        self.view_mode = ViewMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::definitions::rows_from_json;
    use serde_json::json;

    fn loaded_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::default();
        catalog.install_snapshot(rows_from_json(vec![
            json!({"name": "Ajani"}),
            json!({"name": "Bolas"}),
        ]));
        catalog
    }

    #[test]
    fn install_snapshot_opens_the_grid() {
        let catalog = loaded_catalog();
        assert_eq!(catalog.load_state, CatalogLoadState::Ready);
        assert_eq!(catalog.rendered.len(), 2);
        assert!(catalog.pending.is_empty());
    }

    #[test]
    fn record_edit_then_discard_reverts_to_the_snapshot() {
        let mut catalog = loaded_catalog();
        let edited = catalog.rendered[0].with_field("name", json!("Nahiri"));
        let mut rendered = catalog.rendered.clone();
        rendered[0] = edited.clone();
        catalog.record_edit(rendered, edited);

        assert_eq!(catalog.pending.len(), 1);
        assert_eq!(catalog.rendered[0].field("name"), &json!("Nahiri"));

        catalog.discard();
        assert!(catalog.pending.is_empty());
        assert_eq!(catalog.rendered, catalog.snapshot);
        assert_eq!(catalog.view_mode, ViewMode::Idle);
    }

    #[test]
    fn restore_keeps_the_overlay() {
        let mut catalog = loaded_catalog();
        let edited = catalog.rendered[1].with_field("name", json!("Nicol Bolas"));
        let mut rendered = catalog.rendered.clone();
        rendered[1] = edited.clone();
        catalog.record_edit(rendered, edited.clone());

        catalog.restore();
        assert_eq!(catalog.pending.len(), 1);
        assert_eq!(catalog.rendered[1], edited);
        assert_eq!(catalog.rendered[0], catalog.fetched[0]);
    }
}
