//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{InputSnapshot, RenderScene};
use crate::ui::InputState;

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Frame: Snapshot → Intents → Commands.
    ///
    /// Reihenfolge innerhalb eines Frames: Pick, Drag/Achsen-Lock,
    /// Scroll-Anpassung, Extrude/Delete. Alle Rohr-Arrays sind danach aktuell.
    pub fn update_frame(
        &mut self,
        state: &mut AppState,
        input_state: &mut InputState,
        snapshot: &InputSnapshot,
    ) -> anyhow::Result<()> {
        let intents = input_state.collect_viewport_events(snapshot, state);
        for intent in intents {
            self.handle_intent(state, intent)?;
        }
        Ok(())
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Selektion & Drag ===
            AppCommand::PickControl { screen_pos } => handlers::selection::pick(state, screen_pos),
            AppCommand::BeginDrag => handlers::selection::begin_drag(state),
            AppCommand::DragSelectedControl { ray } => handlers::selection::drag(state, ray),
            AppCommand::EndDrag => handlers::selection::end_drag(state),
            AppCommand::BeginAxisLock => handlers::selection::begin_axis_lock(state),
            AppCommand::EndAxisLock => handlers::selection::end_axis_lock(state),

            // === Editing ===
            AppCommand::AdjustBevelNumber { steps } => {
                handlers::editing::adjust_bevel_number(state, steps)
            }
            AppCommand::AdjustRadius { delta } => handlers::editing::adjust_radius(state, delta),
            AppCommand::AdjustBevelRadius { delta } => {
                handlers::editing::adjust_bevel_radius(state, delta)
            }
            AppCommand::ExtrudeSelectedControl { ray } => handlers::editing::extrude(state, ray),
            AppCommand::DeleteSelectedControl => handlers::editing::delete_selected(state),
            AppCommand::AddTube { positions } => handlers::editing::add_tube(state, &positions),

            // === Simulation ===
            AppCommand::StepPressures => handlers::simulation::step(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
