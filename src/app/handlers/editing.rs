//! Handler für Editier-Operationen (Extrude, Delete, Scroll-Anpassungen, Rohre).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Ray;
use glam::Vec3;

/// Extrudiert aus dem selektierten Kontrollpunkt.
pub fn extrude(state: &mut AppState, ray: Ray) {
    use_cases::editing::extrude_selected_control(state, ray);
}

/// Löscht den selektierten Kontrollpunkt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_control(state);
}

/// Ändert die Bevel-Tiefe des selektierten Kontrollpunkts.
pub fn adjust_bevel_number(state: &mut AppState, steps: i32) {
    use_cases::editing::adjust_bevel_number(state, steps);
}

/// Ändert den Radius des selektierten Kontrollpunkts.
pub fn adjust_radius(state: &mut AppState, delta: f32) {
    use_cases::editing::adjust_radius(state, delta);
}

/// Ändert den Bevel-Radius des selektierten Kontrollpunkts.
pub fn adjust_bevel_radius(state: &mut AppState, delta: f32) {
    use_cases::editing::adjust_bevel_radius(state, delta);
}

/// Legt ein neues Rohr an.
pub fn add_tube(state: &mut AppState, positions: &[Vec3]) {
    use_cases::editing::add_tube(state, positions);
}
