//! Tastatur- und Scroll-Shortcuts für den Viewport.
//!
//! Verarbeitet die konfigurierten Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::shared::{InputSnapshot, KeyBindings};

/// Scroll-Anpassungen für jeden gehaltenen Modifier (Bevel-Tiefe, Radius, Bevel-Radius).
///
/// Die Selektion prüfen erst die Use-Cases: ein Pick im selben Frame
/// läuft vorher und gilt schon für diese Intents.
pub(super) fn collect_scroll_intents(snapshot: &InputSnapshot, bindings: &KeyBindings) -> Vec<AppIntent> {
    let scroll = snapshot.scroll_delta.y;
    if scroll == 0.0 {
        return Vec::new();
    }

    let mut events = Vec::new();
    if snapshot.is_key_down(bindings.bevel_number_modifier) {
        events.push(AppIntent::BevelNumberScrolled { scroll });
    }
    if snapshot.is_key_down(bindings.radius_modifier) {
        events.push(AppIntent::RadiusScrolled { scroll });
    }
    if snapshot.is_key_down(bindings.bevel_radius_modifier) {
        events.push(AppIntent::BevelRadiusScrolled { scroll });
    }
    events
}

/// Extrude (Loslassen) und Löschen (Drücken) des selektierten Kontrollpunkts.
pub(super) fn collect_keyboard_intents(
    snapshot: &InputSnapshot,
    bindings: &KeyBindings,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if snapshot.key_just_released(bindings.extrude) {
        events.push(AppIntent::ExtrudeRequested {
            screen_pos: snapshot.pointer_pos,
        });
    }
    if snapshot.key_just_pressed(bindings.delete) {
        events.push(AppIntent::DeleteRequested);
    }
    events
}

#[cfg(test)]
mod tests;
