//! Use-Case: neues Rohr anlegen.

use crate::app::AppState;
use glam::Vec3;

/// Legt ein Rohr durch `positions` mit den Standardwerten der Optionen an.
pub fn add_tube(state: &mut AppState, positions: &[Vec3]) -> usize {
    let index = state.add_default_tube(positions);
    state.scene.rebuild_around(index);
    log::info!(
        "Rohr {} angelegt mit {} Kontrollpunkten",
        index,
        positions.len()
    );
    index
}
