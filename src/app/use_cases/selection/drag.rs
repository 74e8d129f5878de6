//! Use-Case: Kontrollpunkt ziehen, optional auf eine Hauptachse beschränkt.

use crate::app::AppState;
use crate::core::Ray;
use crate::shared::axis_snap::snap_to_major_axis;

/// Startet den Drag, sofern ein gültiger Kontrollpunkt selektiert ist.
pub fn begin_drag(state: &mut AppState) {
    if state.selected_control().is_some() {
        state.drag.active = true;
    }
}

/// Beendet Drag und Achsen-Lock.
pub fn end_drag(state: &mut AppState) {
    state.drag.reset();
}

/// Hält die aktuelle Position des selektierten Kontrollpunkts als Lock-Ursprung fest.
pub fn begin_axis_lock(state: &mut AppState) {
    if let Some((_, control)) = state.selected_control() {
        let origin = control.position;
        state.drag.axis_lock_origin = Some(origin);
        log::debug!("Achsen-Lock ab {:?}", origin);
    }
}

/// Setzt einen eingerasteten Achsen-Lock auf die Position der aktuellen Selektion.
///
/// Nach jedem Selektionswechsel aufzurufen, sonst bezieht sich der Lock
/// weiter auf den vorher selektierten Kontrollpunkt.
pub fn recapture_axis_lock(state: &mut AppState) {
    if state.drag.axis_lock_origin.is_none() {
        return;
    }
    state.drag.axis_lock_origin = state.selected_control().map(|(_, control)| control.position);
}

/// Hebt den Achsen-Lock auf.
pub fn end_axis_lock(state: &mut AppState) {
    state.drag.axis_lock_origin = None;
}

/// Setzt den selektierten Kontrollpunkt auf den Schnitt des Zeigerstrahls
/// mit der Drag-Ebene (Normale = Blickrichtung der Kamera).
///
/// Ohne Achsen-Lock liegt die Ebene im zuletzt übernommenen Punkt, mit Lock im
/// Lock-Ursprung; die Verschiebung ab dem Ursprung rastet dann auf die Hauptachse ein.
/// Verläuft der Strahl parallel zur Ebene, bleibt der Frame ohne Änderung.
///
/// Gibt `true` zurück, wenn sich die Position geändert hat.
pub fn drag_selected_control(state: &mut AppState, ray: Ray) -> bool {
    if !state.drag.active {
        return false;
    }
    let Some((r, control)) = state.selected_control() else {
        return false;
    };

    let normal = state.view.camera.view_direction();
    let new_position = match state.drag.axis_lock_origin {
        Some(origin) => ray
            .intersect_plane(origin, normal)
            .map(|hit| origin + snap_to_major_axis(hit - origin)),
        None => ray.intersect_plane(control.position, normal),
    };

    let Some(new_position) = new_position else {
        log::debug!("Drag-Strahl parallel zur Ebene, Frame übersprungen");
        return false;
    };
    if new_position == control.position {
        return false;
    }

    if let Some(control) = state.scene.control_mut(r) {
        control.position = new_position;
    }
    state.scene.rebuild_around(r.tube);
    true
}
