// src/grid/systems/logic.rs
//! Event handlers for the edit/search/restore state machine.

use bevy::prelude::*;

use crate::grid::columns::ColumnLayout;
use crate::grid::definitions::CardRow;
use crate::grid::events::{
    ClearSearchRequest, DiscardChangesRequest, GridOperationFeedback, SaveChangesRequest,
    SearchRequest, UpdateCellRequest, UpdateColumnWidthRequest,
};
use crate::grid::patcher::patch_cell;
use crate::grid::resources::{CardCatalog, CatalogLoadState, ViewMode};
use crate::grid::search::search_rows;

/// Applies committed cell edits to the rendered list and the pending-edits
/// overlay. Edits that target a cell outside the grid are dropped without
/// feedback, matching the silent rejection of unsupported edits upstream.
pub fn handle_cell_update(
    mut events: EventReader<UpdateCellRequest>,
    mut catalog: ResMut<CardCatalog>,
    layout: Res<ColumnLayout>,
) {
    for event in events.read() {
        if catalog.load_state != CatalogLoadState::Ready {
            continue;
        }
        let column_ids = layout.field_ids();
        match patch_cell(&event.new_value, event.cell, &catalog.rendered, &column_ids) {
            Some((updated_rows, updated_row)) => {
                debug!(
                    "Cell {:?} updated; row {} now pending ({} total).",
                    event.cell,
                    updated_row.id,
                    catalog.pending.len() + 1
                );
                catalog.record_edit(updated_rows, updated_row);
            }
            None => {
                trace!("Dropping edit outside the grid: {:?}", event.cell);
            }
        }
    }
}

/// Restores pending edits into the base list, then filters when the term is
/// non-empty. Restoring first means an edit can never be hidden by a search.
pub fn handle_search_request(
    mut events: EventReader<SearchRequest>,
    mut catalog: ResMut<CardCatalog>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for event in events.read() {
        catalog.restore();
        if event.term.is_empty() {
            debug!("Empty search term; showing the full reconciled list.");
            continue;
        }

        let total = catalog.rendered.len();
        let matched = search_rows(&event.term, &catalog.rendered);
        let message = format!(
            "{} of {} row(s) match '{}'.",
            matched.len(),
            total,
            event.term
        );
        info!("{}", message);
        catalog.rendered = matched;
        catalog.view_mode = ViewMode::Filtered;
        feedback_writer.write(GridOperationFeedback {
            message,
            is_error: false,
        });
    }
}

/// Drops the active filter; pending edits survive.
pub fn handle_clear_search(
    mut events: EventReader<ClearSearchRequest>,
    mut catalog: ResMut<CardCatalog>,
) {
    for _ in events.read() {
        catalog.restore();
        debug!(
            "Search cleared; showing {} reconciled row(s).",
            catalog.rendered.len()
        );
    }
}

/// Empties the overlay and resets the row views to the load snapshot.
pub fn handle_discard_request(
    mut events: EventReader<DiscardChangesRequest>,
    mut catalog: ResMut<CardCatalog>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for _ in events.read() {
        let dropped = catalog.pending.len();
        catalog.discard();
        let message = format!("Discarded {} pending edit(s).", dropped);
        info!("{}", message);
        feedback_writer.write(GridOperationFeedback {
            message,
            is_error: false,
        });
    }
}

/// Reports the overlay to the log sink. Wiring this to a remote endpoint is
/// the designated extension point; nothing is transmitted today.
pub fn handle_save_request(
    mut events: EventReader<SaveChangesRequest>,
    catalog: Res<CardCatalog>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for _ in events.read() {
        let pending: Vec<&CardRow> = catalog.pending.values().collect();
        match serde_json::to_string_pretty(&pending) {
            Ok(payload) => {
                info!(
                    "Pending changes awaiting a save endpoint ({} row(s)):\n{}",
                    pending.len(),
                    payload
                );
                feedback_writer.write(GridOperationFeedback {
                    message: format!("{} pending edit(s) reported to the log.", pending.len()),
                    is_error: false,
                });
            }
            Err(e) => {
                error!("Failed to serialize pending changes: {}", e);
                feedback_writer.write(GridOperationFeedback {
                    message: "Failed to serialize pending changes.".to_string(),
                    is_error: true,
                });
            }
        }
    }
}

/// Applies header-drag width changes to the column layout.
pub fn handle_update_column_width(
    mut events: EventReader<UpdateColumnWidthRequest>,
    mut layout: ResMut<ColumnLayout>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for event in events.read() {
        if event.new_width <= 0.0 {
            feedback_writer.write(GridOperationFeedback {
                message: format!(
                    "Cannot resize column '{}': width must be positive.",
                    event.title
                ),
                is_error: true,
            });
            continue;
        }
        if layout.apply_resize(&event.title, event.new_width) {
            trace!(
                "Column '{}' resized to {:.1}px.",
                event.title,
                event.new_width
            );
        } else {
            warn!("No column titled '{}' to resize.", event.title);
        }
    }
}
