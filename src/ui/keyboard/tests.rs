use super::*;
use crate::shared::Key;
use glam::Vec2;

#[test]
fn extrude_fires_on_release_edge_only() {
    let bindings = KeyBindings::default();

    let held = InputSnapshot::default()
        .with_key_down(Key::E)
        .with_prev_key_down(Key::E);
    assert!(collect_keyboard_intents(&held, &bindings).is_empty());

    let released = InputSnapshot::at(Vec2::new(5.0, 6.0)).with_prev_key_down(Key::E);
    let events = collect_keyboard_intents(&released, &bindings);
    assert!(matches!(
        events[..],
        [AppIntent::ExtrudeRequested { screen_pos }] if screen_pos == Vec2::new(5.0, 6.0)
    ));
}

#[test]
fn delete_fires_on_press_edge() {
    let bindings = KeyBindings::default();
    let pressed = InputSnapshot::default().with_key_down(Key::X);

    let events = collect_keyboard_intents(&pressed, &bindings);
    assert!(matches!(events[..], [AppIntent::DeleteRequested]));
}

#[test]
fn unbound_keys_emit_nothing() {
    let bindings = KeyBindings::default();
    let pressed = InputSnapshot::default().with_key_down(Key::Delete);
    assert!(collect_keyboard_intents(&pressed, &bindings).is_empty());

    let scroll = InputSnapshot::default()
        .with_key_down(Key::LeftShift)
        .with_scroll(Vec2::new(0.0, 1.0));
    assert!(collect_scroll_intents(&scroll, &bindings).is_empty());
}

#[test]
fn scroll_requires_modifier() {
    let bindings = KeyBindings::default();
    let plain = InputSnapshot::default().with_scroll(Vec2::new(0.0, 1.0));
    assert!(collect_scroll_intents(&plain, &bindings).is_empty());

    let with_radius = plain.with_key_down(Key::R);
    let events = collect_scroll_intents(&with_radius, &bindings);
    assert!(matches!(
        events[..],
        [AppIntent::RadiusScrolled { scroll }] if scroll == 1.0
    ));
}

#[test]
fn custom_bindings_are_respected() {
    let bindings = KeyBindings {
        delete: Key::Delete,
        ..KeyBindings::default()
    };
    let x_pressed = InputSnapshot::default().with_key_down(Key::X);
    assert!(collect_keyboard_intents(&x_pressed, &bindings).is_empty());

    let del_pressed = InputSnapshot::default().with_key_down(Key::Delete);
    assert_eq!(collect_keyboard_intents(&del_pressed, &bindings).len(), 1);
}
