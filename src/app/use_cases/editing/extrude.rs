//! Use-Case: neuen Kontrollpunkt aus dem selektierten heraus extrudieren.

use crate::app::AppState;
use crate::core::{Control, ControlRef, Ray};
use crate::app::use_cases::selection::recapture_axis_lock;
use crate::shared::axis_snap::major_axis;

/// Minimale Achsen-Verschiebung, unter der kein Punkt erzeugt wird.
const MIN_EXTRUDE_DISTANCE: f32 = 1e-6;

/// Fügt einen neuen Kontrollpunkt entlang der Hauptachse zum Zeiger ein.
///
/// Der Zeiger wird auf die Ebene durch den selektierten Punkt (Normale =
/// Blickrichtung) projiziert. Ist der selektierte Index 0, landet der neue
/// Punkt am Pfadanfang, sonst am Pfadende. Der Ausgangspunkt bekommt die
/// Extrude-Bevel-Tiefe, die Selektion wandert auf den neuen Punkt.
pub fn extrude_selected_control(state: &mut AppState, ray: Ray) -> Option<ControlRef> {
    let (r, source) = state.selected_control()?;
    let source = *source;

    let normal = state.view.camera.view_direction();
    let Some(pointer_world) = ray.intersect_plane(source.position, normal) else {
        log::warn!("Extrude: Zeigerstrahl parallel zur Ebene, nichts eingefügt");
        return None;
    };

    let offset = pointer_world - source.position;
    let axis = major_axis(offset);
    let delta = offset.dot(axis);
    if delta.abs() < MIN_EXTRUDE_DISTANCE {
        log::warn!("Extrude: Zeiger liegt auf dem Kontrollpunkt, nichts eingefügt");
        return None;
    }

    let new_control = Control::new(
        source.position + axis * delta,
        source.radius,
        source.bevel_radius,
    );
    let extrude_bevel_number = state.options.extrude_bevel_number;

    let tube = state.scene.tubes.get_mut(r.tube)?;
    if let Some(src) = tube.path.control_mut(r.control) {
        src.bevel_number = extrude_bevel_number;
    }
    let insert_at = if r.control == 0 { 0 } else { tube.path.len() };
    let new_index = tube.path.insert_control(insert_at, new_control);

    let new_ref = ControlRef::new(r.tube, new_index);
    state.selection.current = Some(new_ref);
    state.scene.sync_selection_flags(Some(new_ref));
    recapture_axis_lock(state);
    state.scene.rebuild_around(r.tube);

    log::info!(
        "Kontrollpunkt extrudiert: Rohr {} / Index {} → {:?}",
        r.tube,
        new_index,
        new_control.position
    );
    Some(new_ref)
}
