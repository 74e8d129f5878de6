//! Handler für den Simulations-Schritt.

use crate::app::use_cases;
use crate::app::AppState;

/// Überträgt die Gerätedrücke auf alle Rohre.
pub fn step(state: &mut AppState) {
    use_cases::simulation::step_pressures(&mut state.scene);
}
