// src/grid/plugin.rs
use bevy::prelude::*;

use super::events::{
    CatalogFetchResult, ClearSearchRequest, DiscardChangesRequest, GridOperationFeedback,
    SaveChangesRequest, SearchRequest, UpdateCellRequest, UpdateColumnWidthRequest,
};
use super::resources::CardCatalog;
use super::systems;
use crate::ui::systems::forward_events;

// System sets for ordering: background-task results land before the
// handlers that react to UI events mutate the catalog.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum GridSystemSet {
    TaskResults,
    ApplyChanges,
}

/// Plugin owning the catalog state and the edit/search/restore handlers.
pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GridSystemSet::TaskResults,
                GridSystemSet::ApplyChanges.after(GridSystemSet::TaskResults),
            ),
        );

        app.init_resource::<CardCatalog>();

        app.add_event::<UpdateCellRequest>()
            .add_event::<SearchRequest>()
            .add_event::<ClearSearchRequest>()
            .add_event::<DiscardChangesRequest>()
            .add_event::<SaveChangesRequest>()
            .add_event::<UpdateColumnWidthRequest>()
            .add_event::<CatalogFetchResult>()
            .add_event::<GridOperationFeedback>();

        app.add_systems(Startup, systems::fetch::fetch_catalog);

        app.add_systems(
            Update,
            (
                forward_events::<CatalogFetchResult>,
                systems::fetch::handle_fetch_result,
            )
                .chain()
                .in_set(GridSystemSet::TaskResults),
        );
        app.add_systems(
            Update,
            (
                systems::logic::handle_cell_update,
                systems::logic::handle_search_request,
                systems::logic::handle_clear_search,
                systems::logic::handle_discard_request,
                systems::logic::handle_save_request,
                systems::logic::handle_update_column_width,
            )
                .chain()
                .in_set(GridSystemSet::ApplyChanges),
        );

        info!("GridPlugin initialized.");
    }
}
