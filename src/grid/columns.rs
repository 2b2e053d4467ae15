// src/grid/columns.rs
use bevy::prelude::*;

use super::config::{ColumnSpec, GridConfig};

/// Returns a fresh column list with the width of the column whose title
/// matches exactly replaced, order and every other descriptor preserved.
/// No match leaves the list identical (apart from the copy).
pub fn resize_columns(columns: &[ColumnSpec], title: &str, new_width: f32) -> Vec<ColumnSpec> {
    columns
        .iter()
        .map(|spec| {
            if spec.title == title {
                let mut resized = spec.clone();
                resized.width = new_width;
                resized
            } else {
                spec.clone()
            }
        })
        .collect()
}

/// Ordered column descriptors currently driving the table widget. Rebuilt
/// wholesale from the validated configuration; resized one column at a time
/// in response to header drags.
#[derive(Resource, Debug, Default, Clone)]
pub struct ColumnLayout {
    columns: Vec<ColumnSpec>,
}

impl ColumnLayout {
    pub fn from_config(config: &GridConfig) -> Self {
        let mut layout = Self::default();
        layout.rebuild(config);
        layout
    }

    /// Replaces the whole column set, e.g. after a configuration reload.
    pub fn rebuild(&mut self, config: &GridConfig) {
        self.columns = config.columns().to_vec();
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Field keys in column order; index position is the join key between a
    /// grid column and a row's field mapping.
    pub fn field_ids(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// Applies a width change by exact title match. Returns false when no
    /// column carries that title.
    pub fn apply_resize(&mut self, title: &str, new_width: f32) -> bool {
        if !self.columns.iter().any(|c| c.title == title) {
            return false;
        }
        self.columns = resize_columns(&self.columns, title, new_width);
        true
    }
}
