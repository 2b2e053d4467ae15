// src/ui/elements/mod.rs
pub mod editor;
mod table;
mod top_panel;
