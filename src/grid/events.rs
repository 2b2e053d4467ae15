// src/grid/events.rs
use bevy::prelude::Event;
use serde_json::Value;

/// Sent by the table UI when the user commits an inline cell edit.
/// `cell` is (column index, visible row index) into the rendered list.
/// Handled by `grid::systems::logic::handle_cell_update`.
#[derive(Event, Debug, Clone)]
pub struct UpdateCellRequest {
    pub cell: (usize, usize),
    pub new_value: Value,
}

/// Sent by the Filter button or Enter in the search input. An empty term
/// restores the reconciled full list without filtering.
#[derive(Event, Debug, Clone)]
pub struct SearchRequest {
    pub term: String,
}

/// Sent by the Clear button: drop the filter, keep pending edits.
#[derive(Event, Debug, Clone)]
pub struct ClearSearchRequest;

/// Sent by the Discard button: empty the overlay and reset both row views to
/// the original load snapshot.
#[derive(Event, Debug, Clone)]
pub struct DiscardChangesRequest;

/// Sent by the Save button. Transmitting the overlay to a remote endpoint is
/// an explicit extension point; the handler only reports it to the log sink.
#[derive(Event, Debug, Clone)]
pub struct SaveChangesRequest;

/// Sent by the header resize handle while a column edge is dragged.
#[derive(Event, Debug, Clone)]
pub struct UpdateColumnWidthRequest {
    pub title: String,
    pub new_width: f32,
}

/// Outcome of the background catalog fetch, forwarded onto the main thread.
#[derive(Event, Debug, Clone)]
pub struct CatalogFetchResult {
    pub result: Result<Vec<Value>, String>,
}

/// User-facing feedback from grid operations, surfaced in the status line.
#[derive(Event, Debug, Clone)]
pub struct GridOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
