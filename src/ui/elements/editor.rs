// src/ui/elements/editor.rs
//! Top-level egui pass: loading gate, keyboard shortcuts, control strip,
//! and the table surface.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::grid::columns::ColumnLayout;
use crate::grid::events::{
    ClearSearchRequest, DiscardChangesRequest, SaveChangesRequest, SearchRequest,
    UpdateCellRequest, UpdateColumnWidthRequest,
};
use crate::grid::resources::{CardCatalog, CatalogLoadState};
use crate::ui::elements::table::show_grid_table;
use crate::ui::elements::top_panel::{show_top_panel, GridActionWriters};
use crate::ui::state::GridWindowState;
use crate::ui::UiFeedbackState;

#[allow(clippy::too_many_arguments)]
pub fn grid_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<GridWindowState>,
    catalog: Res<CardCatalog>,
    layout: Res<ColumnLayout>,
    ui_feedback: Res<UiFeedbackState>,
    mut search_writer: EventWriter<SearchRequest>,
    mut clear_writer: EventWriter<ClearSearchRequest>,
    mut save_writer: EventWriter<SaveChangesRequest>,
    mut discard_writer: EventWriter<DiscardChangesRequest>,
    mut cell_update_writer: EventWriter<UpdateCellRequest>,
    mut column_width_writer: EventWriter<UpdateColumnWidthRequest>,
) {
    let ctx = contexts.ctx_mut();

    match catalog.load_state {
        CatalogLoadState::Loading => {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading catalog...");
                    });
                });
            });
            return;
        }
        CatalogLoadState::Failed => {
            // The fetch error went to the log; the grid never appears and no
            // message is mounted in its place.
            egui::CentralPanel::default().show(ctx, |_ui| {});
            return;
        }
        CatalogLoadState::Ready => {}
    }

    if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::F)) {
        state.show_search = !state.show_search;
    }

    egui::TopBottomPanel::top("grid_top_panel").show(ctx, |ui| {
        show_top_panel(
            ui,
            &mut state,
            &catalog,
            &ui_feedback,
            GridActionWriters {
                search: &mut search_writer,
                clear: &mut clear_writer,
                save: &mut save_writer,
                discard: &mut discard_writer,
            },
        );
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        show_grid_table(
            ui,
            &mut state,
            &catalog,
            &layout,
            &mut cell_update_writer,
            &mut column_width_writer,
        );
    });
}
