// src/grid/systems/mod.rs
pub mod fetch;
pub mod logic;
