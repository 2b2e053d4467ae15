// src/ui/elements/table.rs
//! The grid surface: header row with resize handles, body rows built from
//! formatted cell records, and the inline editor for numeric cells.

use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};
use serde_json::Value;

use crate::grid::columns::ColumnLayout;
use crate::grid::config::ColumnSpec;
use crate::grid::definitions::ContentAlign;
use crate::grid::events::{UpdateCellRequest, UpdateColumnWidthRequest};
use crate::grid::formatter::{cell_record, placeholder_record};
use crate::grid::resources::CardCatalog;
use crate::ui::state::{ActiveCellEdit, GridWindowState};

const MIN_COLUMN_WIDTH: f32 = 40.0;
const RESIZE_HANDLE_WIDTH: f32 = 5.0;

pub(super) fn show_grid_table(
    ui: &mut egui::Ui,
    state: &mut GridWindowState,
    catalog: &CardCatalog,
    layout: &ColumnLayout,
    cell_writer: &mut EventWriter<UpdateCellRequest>,
    width_writer: &mut EventWriter<UpdateColumnWidthRequest>,
) {
    let columns = layout.columns();
    if columns.is_empty() {
        ui.label("No columns configured.");
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

    let mut table_builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .min_scrolled_height(0.0);
    for spec in columns {
        table_builder = table_builder.column(Column::exact(spec.width).clip(true));
    }

    table_builder
        .header(22.0, |mut header_row| {
            for (c_idx, spec) in columns.iter().enumerate() {
                header_row.col(|ui| {
                    header_cell(ui, c_idx, spec, width_writer);
                });
            }
        })
        .body(|body| {
            if catalog.rendered.is_empty() {
                body.rows(row_height, 1, |mut row| {
                    for _ in columns {
                        row.col(|ui| {
                            ui.label(placeholder_record().display_data);
                        });
                    }
                });
                return;
            }

            body.rows(row_height, catalog.rendered.len(), |mut row| {
                let r_idx = row.index();
                let data_row = &catalog.rendered[r_idx];
                for (c_idx, spec) in columns.iter().enumerate() {
                    row.col(|ui| {
                        data_cell(ui, state, (c_idx, r_idx), data_row.field(&spec.id), spec, cell_writer);
                    });
                }
            });
        });
}

/// Title plus a thin drag zone on the right edge that resizes the column
/// (by title match, the registry's contract).
fn header_cell(
    ui: &mut egui::Ui,
    c_idx: usize,
    spec: &ColumnSpec,
    width_writer: &mut EventWriter<UpdateColumnWidthRequest>,
) {
    ui.strong(&spec.title);

    let cell_rect = ui.max_rect();
    let handle_rect = egui::Rect::from_min_max(
        egui::pos2(cell_rect.right() - RESIZE_HANDLE_WIDTH, cell_rect.top()),
        cell_rect.max,
    );
    let response = ui
        .interact(
            handle_rect,
            egui::Id::new("column_resize").with(c_idx),
            egui::Sense::drag(),
        )
        .on_hover_cursor(egui::CursorIcon::ResizeHorizontal);

    if response.dragged() {
        let delta = response.drag_delta().x;
        if delta != 0.0 {
            width_writer.write(UpdateColumnWidthRequest {
                title: spec.title.clone(),
                new_width: (spec.width + delta).max(MIN_COLUMN_WIDTH),
            });
        }
    }
}

fn data_cell(
    ui: &mut egui::Ui,
    state: &mut GridWindowState,
    cell: (usize, usize),
    value: &Value,
    spec: &ColumnSpec,
    cell_writer: &mut EventWriter<UpdateCellRequest>,
) {
    let record = cell_record(value, spec);

    if !record.allow_overlay {
        let label = egui::Label::new(record.display_data).truncate();
        match record.content_align {
            ContentAlign::Left => {
                ui.add(label);
            }
            ContentAlign::Right => {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(label);
                });
            }
        }
        return;
    }

    let editing_this = matches!(&state.active_edit, Some(edit) if edit.cell == cell);
    if editing_this {
        let mut finished = false;
        if let Some(edit) = state.active_edit.as_mut() {
            let response = ui.add(
                egui::TextEdit::singleline(&mut edit.buffer)
                    .desired_width(f32::INFINITY)
                    .horizontal_align(egui::Align::RIGHT),
            );
            if edit.needs_focus {
                response.request_focus();
                edit.needs_focus = false;
            }
            if response.lost_focus() {
                // Enter commits; surrendering focus any other way cancels.
                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    cell_writer.write(UpdateCellRequest {
                        cell,
                        new_value: parse_edited_value(&edit.buffer),
                    });
                }
                finished = true;
            }
        }
        if finished {
            state.active_edit = None;
        }
        return;
    }

    let label = egui::Label::new(record.display_data.clone())
        .truncate()
        .sense(egui::Sense::click());
    let response = match record.content_align {
        ContentAlign::Left => ui.add(label),
        ContentAlign::Right => {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(label)
            })
            .inner
        }
    };
    if response.clicked() {
        state.active_edit = Some(ActiveCellEdit {
            cell,
            buffer: record.display_data,
            needs_focus: true,
        });
    }
}

/// Interprets the committed text the way the row stores values: integer,
/// then float, then plain string.
fn parse_edited_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    Value::String(raw.to_string())
}
