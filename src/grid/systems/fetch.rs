// src/grid/systems/fetch.rs
//! Startup fetch of the remote card catalog on a tokio background task.

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use serde_json::Value;
use thiserror::Error;

use crate::grid::definitions::rows_from_json;
use crate::grid::events::CatalogFetchResult;
use crate::grid::resources::{CardCatalog, CatalogLoadState};
use crate::ui::systems::SendEvent;
use crate::CliArgs;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("response body has no `data` array")]
    MissingData,
}

/// Kicks off the one-shot catalog download. The grid stays behind the
/// loading gate until the result event lands on the main thread.
pub fn fetch_catalog(
    runtime: Res<TokioTasksRuntime>,
    args: Res<CliArgs>,
    mut commands: Commands,
) {
    let endpoint = args.endpoint.clone();
    let task_entity = commands.spawn_empty().id();
    info!("Fetching card catalog from {}", endpoint);

    runtime.spawn_background_task(move |mut ctx| async move {
        let result = fetch_rows(&endpoint).await.map_err(|e| e.to_string());
        ctx.run_on_main_thread(move |world_ctx| {
            world_ctx
                .world
                .commands()
                .entity(task_entity)
                .insert(SendEvent::<CatalogFetchResult> {
                    event: CatalogFetchResult { result },
                });
        })
        .await;
    });
}

async fn fetch_rows(endpoint: &str) -> Result<Vec<Value>, FetchError> {
    let response = reqwest::get(endpoint).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body: Value = response.json().await?;
    body.get("data")
        .and_then(Value::as_array)
        .cloned()
        .ok_or(FetchError::MissingData)
}

/// Installs the fetched rows, or logs the failure and leaves the grid
/// unrendered. No retry, no user-visible error message.
pub fn handle_fetch_result(
    mut events: EventReader<CatalogFetchResult>,
    mut catalog: ResMut<CardCatalog>,
) {
    for event in events.read() {
        match &event.result {
            Ok(values) => {
                let rows = rows_from_json(values.clone());
                info!("Catalog loaded: {} row(s).", rows.len());
                catalog.install_snapshot(rows);
            }
            Err(e) => {
                error!("Catalog fetch failed: {}", e);
                catalog.load_state = CatalogLoadState::Failed;
            }
        }
    }
}
