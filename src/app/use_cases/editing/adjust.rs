//! Use-Case: Bevel-Tiefe, Radius und Bevel-Radius per Scroll anpassen.
//!
//! Nur Kontrollpunkte mit Vorgänger und Nachfolger sind editierbar,
//! Endpunkte bleiben unverändert.

use crate::app::AppState;
use crate::core::{Control, ControlRef};

/// Wendet `edit` auf den selektierten inneren Kontrollpunkt an und baut bei
/// Änderung die betroffenen Rohre neu.
fn edit_inner_control(state: &mut AppState, edit: impl FnOnce(&mut Control) -> bool) -> bool {
    let Some(r) = state.selection.current else {
        return false;
    };
    if !is_inner(state, r) {
        log::debug!("Scroll-Edit an Endpunkt ignoriert: {:?}", r);
        return false;
    }

    let changed = state.scene.control_mut(r).is_some_and(edit);
    if changed {
        state.scene.rebuild_around(r.tube);
    }
    changed
}

fn is_inner(state: &AppState, r: ControlRef) -> bool {
    state
        .scene
        .tubes
        .get(r.tube)
        .is_some_and(|tube| tube.path.has_both_neighbors(r.control))
}

/// Ändert die Bevel-Tiefe um `steps`, geklemmt auf `[0, max_bevel_number]`.
pub fn adjust_bevel_number(state: &mut AppState, steps: i32) -> bool {
    let max = state.options.max_bevel_number;
    edit_inner_control(state, |control| {
        let next = control
            .bevel_number
            .saturating_add_signed(steps)
            .min(max);
        let changed = next != control.bevel_number;
        control.bevel_number = next;
        if changed {
            log::info!("Bevel-Tiefe → {}", next);
        }
        changed
    })
}

/// Ändert den Radius um `delta` (ungeklemmt).
pub fn adjust_radius(state: &mut AppState, delta: f32) -> bool {
    edit_inner_control(state, |control| {
        control.radius += delta;
        delta != 0.0
    })
}

/// Ändert den Bevel-Radius um `delta` (ungeklemmt).
pub fn adjust_bevel_radius(state: &mut AppState, delta: f32) -> bool {
    edit_inner_control(state, |control| {
        control.bevel_radius += delta;
        delta != 0.0
    })
}
