// src/lib.rs
//! Card catalog grid: fetches a card list from a search endpoint and edits
//! it in a typed spreadsheet view backed by bevy + egui.

use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

pub mod grid;
pub mod ui;

/// Default search endpoint queried at startup.
pub const DEFAULT_ENDPOINT: &str = "https://api.scryfall.com/cards/search?q=s%3Aclb";

#[derive(Parser, Resource, Debug, Clone)]
#[command(name = "cardgrid", about = "Editable card catalog grid")]
pub struct CliArgs {
    /// Search endpoint whose `data` array fills the grid.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// JSON column configuration; the built-in card catalog layout is used
    /// when omitted.
    #[arg(long)]
    pub columns: Option<PathBuf>,
}
