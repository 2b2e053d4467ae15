// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod state;
pub mod systems;

use elements::editor::grid_editor_ui;
use state::GridWindowState;
use systems::handle_ui_feedback;

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the catalog grid UI.
pub struct GridUiPlugin;

impl Plugin for GridUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<GridWindowState>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, grid_editor_ui);

        info!("GridUiPlugin initialized.");
    }
}
