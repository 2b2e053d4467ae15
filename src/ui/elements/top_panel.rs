// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::grid::events::{
    ClearSearchRequest, DiscardChangesRequest, SaveChangesRequest, SearchRequest,
};
use crate::grid::resources::{CardCatalog, ViewMode};
use crate::ui::state::GridWindowState;
use crate::ui::UiFeedbackState;

pub(super) struct GridActionWriters<'a, 'w1, 'w2, 'w3, 'w4> {
    pub search: &'a mut EventWriter<'w1, SearchRequest>,
    pub clear: &'a mut EventWriter<'w2, ClearSearchRequest>,
    pub save: &'a mut EventWriter<'w3, SaveChangesRequest>,
    pub discard: &'a mut EventWriter<'w4, DiscardChangesRequest>,
}

/// The control strip above the grid: the search panel (when visible), the
/// save/discard buttons, row counters, and the feedback line.
pub(super) fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut GridWindowState,
    catalog: &CardCatalog,
    ui_feedback: &UiFeedbackState,
    writers: GridActionWriters<'_, '_, '_, '_, '_>,
) {
    ui.horizontal(|ui| {
        if state.show_search {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.search_value)
                    .hint_text("Search all fields")
                    .desired_width(220.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                writers.search.write(SearchRequest {
                    term: state.search_value.clone(),
                });
            }

            if ui
                .button("Filter")
                .on_hover_text("Show only rows containing the term (Ctrl+F hides this panel)")
                .clicked()
            {
                writers.search.write(SearchRequest {
                    term: state.search_value.clone(),
                });
            }
            if ui
                .button("Clear")
                .on_hover_text("Drop the filter; unsent edits are kept")
                .clicked()
            {
                state.search_value.clear();
                writers.clear.write(ClearSearchRequest);
            }
            ui.separator();
        }

        if ui
            .button("Save")
            .on_hover_text("Report pending edits to the log (no remote endpoint yet)")
            .clicked()
        {
            writers.save.write(SaveChangesRequest);
        }
        if ui
            .button("Discard")
            .on_hover_text("Throw away pending edits and restore the fetched rows")
            .clicked()
        {
            state.search_value.clear();
            state.active_edit = None;
            writers.discard.write(DiscardChangesRequest);
        }
        ui.separator();

        match catalog.view_mode {
            ViewMode::Filtered => {
                ui.label(format!("{} matching row(s)", catalog.rendered.len()));
            }
            ViewMode::Idle => {
                ui.label(format!("{} row(s)", catalog.rendered.len()));
            }
        }
        if !catalog.pending.is_empty() {
            ui.label(format!("{} unsent edit(s)", catalog.pending.len()));
        }

        if !ui_feedback.last_message.is_empty() {
            let color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                egui::Color32::GRAY
            };
            ui.label(egui::RichText::new(&ui_feedback.last_message).color(color));
        }
    });
}
