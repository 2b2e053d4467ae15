// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

use cardgrid::grid::columns::ColumnLayout;
use cardgrid::grid::config::GridConfig;
use cardgrid::grid::GridPlugin;
use cardgrid::ui::GridUiPlugin;
use cardgrid::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Column configuration is validated before the app starts; a broken
    // layout is a startup error, not a runtime one.
    let config = match &args.columns {
        Some(path) => match GridConfig::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid column configuration '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GridConfig::card_catalog(),
    };

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(args)
        .insert_resource(ColumnLayout::from_config(&config))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Card Catalog Grid".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(GridPlugin)
        .add_plugins(GridUiPlugin)
        .run();

    ExitCode::SUCCESS
}
