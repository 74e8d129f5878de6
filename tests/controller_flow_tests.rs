//! Integrationstests für den Frame-Fluss Snapshot → Intents → Commands.

use glam::{Vec2, Vec3};
use pipe_router::ui::InputState;
use pipe_router::{
    AppCommand, AppController, AppIntent, AppState, ControlRef, EditState, InputSnapshot,
    InputTracker, Key, MouseButton,
};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Kamera blickt aus +Z auf einen geraden Pfad entlang X.
fn make_test_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = VIEWPORT;
    state
        .view
        .camera
        .look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    state.add_default_tube(&[
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
    ]);
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

fn run(
    controller: &mut AppController,
    state: &mut AppState,
    input: &mut InputState,
    snapshot: InputSnapshot,
) {
    controller
        .update_frame(state, input, &snapshot)
        .expect("Frame sollte ohne Fehler durchlaufen");
}

fn press(at: Vec2) -> InputSnapshot {
    InputSnapshot::at(at).with_button_down(MouseButton::Primary)
}

fn hold_move(from: Vec2, to: Vec2) -> InputSnapshot {
    InputSnapshot::at(to)
        .with_pointer_delta(to - from)
        .with_button_down(MouseButton::Primary)
        .with_prev_button_down(MouseButton::Primary)
}

fn release(at: Vec2) -> InputSnapshot {
    InputSnapshot::at(at).with_prev_button_down(MouseButton::Primary)
}

#[test]
fn test_press_drag_release_moves_control() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    let target = ControlRef::new(0, 2);
    let start = screen_of(&state, target);

    run(&mut controller, &mut state, &mut input, press(start));
    assert_eq!(state.selection.current, Some(target));
    assert_eq!(state.edit_state(), EditState::Dragging);

    let end = start + Vec2::new(0.0, -50.0);
    run(&mut controller, &mut state, &mut input, hold_move(start, end));
    let moved = state.scene.control(target).expect("vorhanden").position;
    assert!(moved.y > 0.5, "Kontrollpunkt sollte nach oben wandern: {moved:?}");
    assert!(moved.z.abs() < 1e-3, "Drag bleibt in der Blickebene");

    run(&mut controller, &mut state, &mut input, release(end));
    assert_eq!(state.edit_state(), EditState::Selected);
}

#[test]
fn test_axis_locked_drag_moves_along_single_axis() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    let target = ControlRef::new(0, 2);
    let start = screen_of(&state, target);

    run(&mut controller, &mut state, &mut input, press(start));

    let end = start + Vec2::new(20.0, -60.0);
    let snapshot = hold_move(start, end).with_key_down(Key::LeftShift);
    run(&mut controller, &mut state, &mut input, snapshot);

    assert_eq!(state.edit_state(), EditState::AxisLocked);
    let moved = state.scene.control(target).expect("vorhanden").position;
    assert_eq!(moved.x, 2.0);
    assert_eq!(moved.z, 0.0);
    assert!(moved.y > 0.5);

    let snapshot = release(end).with_prev_key_down(Key::LeftShift);
    run(&mut controller, &mut state, &mut input, snapshot);
    assert_eq!(state.edit_state(), EditState::Selected);
    assert!(state.drag.axis_lock_origin.is_none());
}

#[test]
fn test_far_pick_clears_selection() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    state.selection.current = Some(ControlRef::new(0, 1));

    let far = screen_of(&state, ControlRef::new(0, 1)) + Vec2::new(0.0, 200.0);
    run(&mut controller, &mut state, &mut input, press(far));

    assert_eq!(state.selection.current, None);
    assert_eq!(state.edit_state(), EditState::Idle);
    assert!(matches!(
        state.command_log.entries(),
        [.., AppCommand::PickControl { .. }, AppCommand::BeginDrag]
    ));
}

#[test]
fn test_extrude_then_delete_restores_path() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    let original: Vec<Vec3> = state.scene.tubes[0]
        .path
        .controls
        .iter()
        .map(|c| c.position)
        .collect();

    let tail = screen_of(&state, ControlRef::new(0, 2));
    run(&mut controller, &mut state, &mut input, press(tail));
    run(&mut controller, &mut state, &mut input, release(tail));

    let pointer = tail + Vec2::new(0.0, -60.0);
    run(
        &mut controller,
        &mut state,
        &mut input,
        InputSnapshot::at(pointer).with_key_down(Key::E),
    );
    assert_eq!(state.scene.tubes[0].path.len(), 3, "Extrude erst beim Loslassen");

    run(
        &mut controller,
        &mut state,
        &mut input,
        InputSnapshot::at(pointer).with_prev_key_down(Key::E),
    );
    assert_eq!(state.scene.tubes[0].path.len(), 4);
    assert_eq!(state.selection.current, Some(ControlRef::new(0, 3)));
    let extruded = state.scene.tubes[0].path.controls[3].position;
    assert_eq!(extruded.x, 2.0);
    assert!(extruded.y > 0.5);

    run(
        &mut controller,
        &mut state,
        &mut input,
        InputSnapshot::at(pointer).with_key_down(Key::X),
    );
    let restored: Vec<Vec3> = state.scene.tubes[0]
        .path
        .controls
        .iter()
        .map(|c| c.position)
        .collect();
    assert_eq!(restored, original);
    assert_eq!(state.selection.current, None);
}

#[test]
fn test_operations_after_delete_are_noops() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    state.selection.current = Some(ControlRef::new(0, 2));

    controller
        .handle_intent(&mut state, AppIntent::DeleteRequested)
        .expect("Delete sollte funktionieren");
    assert_eq!(state.scene.tubes[0].path.len(), 2);

    // Veralteter Handle von außen
    state.selection.current = Some(ControlRef::new(0, 2));
    for intent in [
        AppIntent::BevelNumberScrolled { scroll: 1.0 },
        AppIntent::RadiusScrolled { scroll: 1.0 },
        AppIntent::ExtrudeRequested {
            screen_pos: Vec2::new(10.0, 10.0),
        },
        AppIntent::ControlDragStarted,
        AppIntent::ControlDragRequested {
            screen_pos: Vec2::new(10.0, 10.0),
        },
        AppIntent::DeleteRequested,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Veraltete Selektion darf nicht fehlschlagen");
    }

    assert_eq!(state.scene.tubes[0].path.len(), 2);
    assert!(!state.drag.active);

    // Frame ohne Selektion bleibt ebenfalls ruhig
    let snapshot = InputSnapshot::default()
        .with_key_down(Key::B)
        .with_scroll(Vec2::new(0.0, 1.0));
    run(&mut controller, &mut state, &mut input, snapshot);
}

#[test]
fn test_tracker_driven_session_updates_render_scene() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    let mut tracker = InputTracker::new();
    tracker.resized(VIEWPORT);

    let corner = screen_of(&state, ControlRef::new(0, 1));
    tracker.cursor_moved(corner);
    tracker.button_event(MouseButton::Primary, true);
    run(&mut controller, &mut state, &mut input, tracker.snapshot());
    tracker.end_frame();

    tracker.cursor_moved(corner + Vec2::new(0.0, 40.0));
    run(&mut controller, &mut state, &mut input, tracker.snapshot());
    tracker.end_frame();

    tracker.button_event(MouseButton::Primary, false);
    tracker.key_event(Key::B, true);
    tracker.scrolled(Vec2::new(0.0, 1.0));
    run(&mut controller, &mut state, &mut input, tracker.snapshot());
    tracker.end_frame();

    let corner_control = state.scene.tubes[0].path.controls[1];
    assert!(corner_control.position.y < -0.2);
    assert_eq!(corner_control.bevel_number, 1);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.selection, Some(ControlRef::new(0, 1)));
    // 3 Kontrollpunkte, Ecke mit 2 Punkten → 4 Ringe
    assert_eq!(scene.tubes[0].mesh.ring_count(), 4);
    assert_eq!(
        scene.tubes[0].mesh.indices.len(),
        6 * state.options.tube_segments as usize * 3
    );
}

#[test]
fn test_axis_lock_follows_newly_picked_control() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    let first = screen_of(&state, ControlRef::new(0, 0));
    let target = ControlRef::new(0, 2);
    let start = screen_of(&state, target);

    run(&mut controller, &mut state, &mut input, press(first));
    run(&mut controller, &mut state, &mut input, release(first));

    // Lock einrasten, während nur Kontrollpunkt 0 selektiert ist
    let locked = InputSnapshot::at(first).with_key_down(Key::LeftShift);
    run(&mut controller, &mut state, &mut input, locked);
    assert_eq!(state.drag.axis_lock_origin, Some(Vec3::new(-2.0, 0.0, 0.0)));

    // Mit gehaltenem Lock einen anderen Kontrollpunkt greifen
    run(
        &mut controller,
        &mut state,
        &mut input,
        press(start)
            .with_key_down(Key::LeftShift)
            .with_prev_key_down(Key::LeftShift),
    );
    assert_eq!(state.selection.current, Some(target));
    assert_eq!(state.drag.axis_lock_origin, Some(Vec3::new(2.0, 0.0, 0.0)));

    let above = state
        .view
        .camera
        .world_to_screen(Vec3::new(2.0, 5.0, 0.0), VIEWPORT)
        .expect("vor der Kamera");
    run(
        &mut controller,
        &mut state,
        &mut input,
        hold_move(start, above)
            .with_key_down(Key::LeftShift)
            .with_prev_key_down(Key::LeftShift),
    );

    let moved = state.scene.control(target).expect("vorhanden").position;
    assert!((moved.x - 2.0).abs() < 1e-4, "bleibt auf der eigenen Achse: {moved:?}");
    assert!((moved.y - 5.0).abs() < 1e-3, "{moved:?}");
}

#[test]
fn test_scroll_in_pick_frame_applies_to_new_selection() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let mut input = InputState::new();
    let corner = ControlRef::new(0, 1);

    let snapshot = press(screen_of(&state, corner))
        .with_key_down(Key::B)
        .with_scroll(Vec2::new(0.0, 1.0));
    run(&mut controller, &mut state, &mut input, snapshot);

    assert_eq!(state.selection.current, Some(corner));
    assert_eq!(state.scene.control(corner).expect("vorhanden").bevel_number, 1);
}
