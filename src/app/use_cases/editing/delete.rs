//! Use-Case: selektierten Kontrollpunkt löschen.

use crate::app::use_cases::selection::clear_selection;
use crate::app::AppState;
use crate::core::Control;

/// Entfernt den selektierten Kontrollpunkt und hebt die Selektion auf.
///
/// Veraltete oder fehlende Selektion ist ein No-op.
pub fn delete_selected_control(state: &mut AppState) -> Option<Control> {
    let r = state.selection.current?;
    let removed = state
        .scene
        .tubes
        .get_mut(r.tube)
        .and_then(|tube| tube.path.remove_control(r.control));

    clear_selection(state);

    match removed {
        Some(control) => {
            state.scene.rebuild_around(r.tube);
            log::info!(
                "Kontrollpunkt gelöscht: Rohr {} / Index {} bei {:?}",
                r.tube,
                r.control,
                control.position
            );
            Some(control)
        }
        None => {
            log::warn!("Löschen ignoriert: veralteter Handle {:?}", r);
            None
        }
    }
}
