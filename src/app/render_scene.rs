//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, TubeRenderData};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let camera = &state.view.camera;
    let viewport_size = state.view.viewport_size;

    let tubes = state
        .scene
        .tubes
        .iter()
        .map(|tube| TubeRenderData {
            mesh: tube.mesh_arc(),
            path_positions: tube.path.flat_positions(),
            control_radii: tube.control_radii(),
            segments: tube.segments,
            color: tube.color,
            pressure: tube.total_internal_pressure,
        })
        .collect();

    RenderScene {
        view: camera.view_matrix(),
        projection: camera.projection_matrix(viewport_size),
        viewport_size,
        tubes,
        selection: state
            .selection
            .current
            .filter(|r| state.scene.is_valid(*r)),
    }
}
