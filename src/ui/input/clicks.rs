//! Primärklick: Pick des Kontrollpunkts unter dem Zeiger und Drag-Start.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use crate::shared::MouseButton;

impl InputState {
    /// Beim Drücken der Primärtaste: erst picken, dann den Drag-Lifecycle öffnen.
    ///
    /// Der Drag-Start wird vom Controller verworfen, wenn der Pick nichts trifft.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.snapshot.button_just_pressed(MouseButton::Primary) {
            return;
        }

        events.push(AppIntent::ControlPickRequested {
            screen_pos: ctx.snapshot.pointer_pos,
        });
        events.push(AppIntent::ControlDragStarted);
        self.primary_drag_mode = PrimaryDragMode::ControlMove;
    }
}
