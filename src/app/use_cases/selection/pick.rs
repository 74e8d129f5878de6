//! Use-Case: Kontrollpunkt-Selektion per Klick.

use crate::app::AppState;
use crate::core::ControlRef;
use glam::Vec2;

/// Selektiert den ersten Kontrollpunkt (Rohre, dann Kontrollpunkte in Reihenfolge),
/// dessen Screen-Position näher als `radius * pick_radius_factor` Pixel am Zeiger liegt.
///
/// Ohne Treffer wird die Selektion gelöscht.
pub fn pick_control(state: &mut AppState, screen_pos: Vec2) -> Option<ControlRef> {
    if !state.view.has_viewport() {
        log::warn!("Pick ohne gültigen Viewport ignoriert");
        clear_selection(state);
        return None;
    }

    let camera = &state.view.camera;
    let viewport = state.view.viewport_size;

    let hit = state
        .scene
        .tubes
        .iter()
        .enumerate()
        .flat_map(|(tube_index, tube)| {
            tube.path
                .controls
                .iter()
                .enumerate()
                .map(move |(control_index, control)| (tube_index, control_index, control))
        })
        .find(|(_, _, control)| {
            camera
                .world_to_screen(control.position, viewport)
                .is_some_and(|screen| {
                    screen.distance(screen_pos) < state.options.pick_threshold_px(control.radius)
                })
        })
        .map(|(tube, control, _)| ControlRef::new(tube, control));

    state.selection.current = hit;
    state.scene.sync_selection_flags(hit);
    if hit.is_some() {
        super::drag::recapture_axis_lock(state);
    }

    match hit {
        Some(r) => log::debug!("Kontrollpunkt selektiert: Rohr {} / Index {}", r.tube, r.control),
        None => log::debug!("Pick ohne Treffer bei {:?}", screen_pos),
    }
    hit
}

/// Hebt die Selektion auf und beendet einen laufenden Drag.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
    state.drag.reset();
    state.scene.sync_selection_flags(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn state_with_tube() -> AppState {
        let mut state = AppState::new();
        state.view.viewport_size = Vec2::new(800.0, 600.0);
        state.view.camera.look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        state.add_default_tube(&[Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]);
        state
    }

    fn screen_of(state: &AppState, r: ControlRef) -> Vec2 {
        let position = state.scene.control(r).expect("Kontrollpunkt vorhanden").position;
        state
            .view
            .camera
            .world_to_screen(position, state.view.viewport_size)
            .expect("vor der Kamera")
    }

    #[test]
    fn pick_selects_control_under_pointer() {
        let mut state = state_with_tube();
        let target = ControlRef::new(0, 1);
        let pointer = screen_of(&state, target) + Vec2::new(3.0, -2.0);

        assert_eq!(pick_control(&mut state, pointer), Some(target));
        assert_eq!(state.selection.current, Some(target));
        assert!(state.scene.tubes[0].path.controls[1].selected);
    }

    #[test]
    fn far_pointer_clears_selection() {
        let mut state = state_with_tube();
        state.selection.current = Some(ControlRef::new(0, 0));

        // Schwelle: 0.2 * 100 = 20 px
        let pointer = screen_of(&state, ControlRef::new(0, 0)) + Vec2::new(0.0, 25.0);
        assert_eq!(pick_control(&mut state, pointer), None);
        assert_eq!(state.selection.current, None);
    }

    #[test]
    fn engaged_axis_lock_moves_to_newly_picked_control() {
        let mut state = state_with_tube();
        state.selection.current = Some(ControlRef::new(0, 0));
        state.drag.axis_lock_origin = Some(Vec3::new(-2.0, 0.0, 0.0));

        let pointer = screen_of(&state, ControlRef::new(0, 1));
        pick_control(&mut state, pointer);
        assert_eq!(state.drag.axis_lock_origin, Some(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn first_match_in_scan_order_wins() {
        let mut state = state_with_tube();
        // Zweites Rohr mit identischem Startpunkt
        state.add_default_tube(&[Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-2.0, 3.0, 0.0)]);
        let pointer = screen_of(&state, ControlRef::new(0, 0));

        assert_eq!(pick_control(&mut state, pointer), Some(ControlRef::new(0, 0)));
    }

    #[test]
    fn pick_without_viewport_is_noop() {
        let mut state = state_with_tube();
        state.view.viewport_size = Vec2::ZERO;
        assert_eq!(pick_control(&mut state, Vec2::new(400.0, 300.0)), None);
    }
}
