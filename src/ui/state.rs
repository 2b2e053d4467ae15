// src/ui/state.rs
use bevy::prelude::*;

/// An inline edit in progress on one editable cell.
/// `cell` is (column index, visible row index).
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCellEdit {
    pub cell: (usize, usize),
    pub buffer: String,
    /// Set on creation so the text field grabs keyboard focus once.
    pub needs_focus: bool,
}

/// Transient window state: the search input, the search panel visibility
/// flag toggled by Ctrl+F, and the in-progress cell edit.
#[derive(Resource, Debug, Clone)]
pub struct GridWindowState {
    pub search_value: String,
    pub show_search: bool,
    pub active_edit: Option<ActiveCellEdit>,
}

impl Default for GridWindowState {
    fn default() -> Self {
        Self {
            search_value: String::new(),
            show_search: true,
            active_edit: None,
        }
    }
}
