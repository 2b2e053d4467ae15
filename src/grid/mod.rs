// src/grid/mod.rs
pub mod columns;
pub mod config;
pub mod definitions;
pub mod events;
pub mod formatter;
pub mod patcher;
pub mod plugin;
pub mod resources;
pub mod search;
pub mod systems;

pub use plugin::GridPlugin;
