//! Handler für Selektion, Drag und Achsen-Lock.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Ray;
use glam::Vec2;

/// Selektiert den Kontrollpunkt unter dem Zeiger oder hebt die Selektion auf.
pub fn pick(state: &mut AppState, screen_pos: Vec2) {
    if use_cases::selection::pick_control(state, screen_pos).is_none() {
        state.drag.reset();
    }
}

/// Startet einen Drag-Lifecycle.
pub fn begin_drag(state: &mut AppState) {
    use_cases::selection::begin_drag(state);
}

/// Zieht den selektierten Kontrollpunkt entlang des Zeigerstrahls.
pub fn drag(state: &mut AppState, ray: Ray) {
    use_cases::selection::drag_selected_control(state, ray);
}

/// Beendet einen Drag-Lifecycle.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}

/// Aktiviert den Achsen-Lock.
pub fn begin_axis_lock(state: &mut AppState) {
    use_cases::selection::begin_axis_lock(state);
}

/// Hebt den Achsen-Lock auf.
pub fn end_axis_lock(state: &mut AppState) {
    use_cases::selection::end_axis_lock(state);
}
