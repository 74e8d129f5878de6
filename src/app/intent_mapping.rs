//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::Ray;
use glam::Vec2;

/// Zeigerstrahl für eine Screen-Position (None ohne gültigen Viewport).
fn pointer_ray(state: &AppState, screen_pos: Vec2) -> Option<Ray> {
    if !state.view.has_viewport() {
        log::warn!("Kein gültiger Viewport, Zeigerstrahl nicht berechenbar");
        return None;
    }
    Some(
        state
            .view
            .camera
            .screen_ray(screen_pos, state.view.viewport_size),
    )
}

/// Ganzzahliger Scroll-Schritt (Vorzeichen des Deltas).
fn scroll_steps(scroll: f32) -> i32 {
    if scroll > 0.0 {
        1
    } else if scroll < 0.0 {
        -1
    } else {
        0
    }
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ControlPickRequested { screen_pos } => {
            vec![AppCommand::PickControl { screen_pos }]
        }
        AppIntent::ControlDragStarted => vec![AppCommand::BeginDrag],
        AppIntent::ControlDragRequested { screen_pos } => pointer_ray(state, screen_pos)
            .map(|ray| AppCommand::DragSelectedControl { ray })
            .into_iter()
            .collect(),
        AppIntent::ControlDragEnded => vec![AppCommand::EndDrag],
        AppIntent::AxisLockEngaged => vec![AppCommand::BeginAxisLock],
        AppIntent::AxisLockReleased => vec![AppCommand::EndAxisLock],
        AppIntent::BevelNumberScrolled { scroll } => match scroll_steps(scroll) {
            0 => vec![],
            steps => vec![AppCommand::AdjustBevelNumber { steps }],
        },
        AppIntent::RadiusScrolled { scroll } => vec![AppCommand::AdjustRadius {
            delta: scroll * state.options.radius_scroll_step,
        }],
        AppIntent::BevelRadiusScrolled { scroll } => vec![AppCommand::AdjustBevelRadius {
            delta: scroll * state.options.bevel_radius_scroll_step,
        }],
        AppIntent::ExtrudeRequested { screen_pos } => pointer_ray(state, screen_pos)
            .map(|ray| AppCommand::ExtrudeSelectedControl { ray })
            .into_iter()
            .collect(),
        AppIntent::DeleteRequested => vec![AppCommand::DeleteSelectedControl],
        AppIntent::SimulationStepRequested => vec![AppCommand::StepPressures],
        AppIntent::AddTubeRequested { positions } => vec![AppCommand::AddTube { positions }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
