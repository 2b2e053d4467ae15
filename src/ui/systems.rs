// src/ui/systems.rs
use bevy::prelude::*;

use crate::grid::events::GridOperationFeedback;
use crate::ui::UiFeedbackState;

/// Mirrors operation feedback into the status-line resource; with several
/// events in one frame the latest wins.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<GridOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    for event in feedback_events.read() {
        if event.is_error {
            warn!("{}", event.message);
        } else {
            info!("{}", event.message);
        }
        ui_feedback_state.last_message = event.message.clone();
        ui_feedback_state.is_error = event.is_error;
    }
}

/// Carrier for events produced off the main thread. A background task
/// inserts this on a spare entity via `run_on_main_thread`; the matching
/// `forward_events` system turns it into a regular bevy event.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
) {
    for (entity, carrier) in query.iter() {
        debug!("Forwarding background-task event: {:?}", carrier.event);
        writer.write(carrier.event.clone());
        commands.entity(entity).despawn();
    }
}
