//! Eingabe-Schnappschuss pro Frame.
//!
//! Ersetzt globalen Eingabezustand: der Input-Kollaborateur füttert einen
//! `InputTracker` mit Roh-Events und erzeugt pro Frame einen unveränderlichen
//! `InputSnapshot`, der per Referenz an den Controller geht.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tasten, die der Editor auswertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    B,
    D,
    E,
    F,
    R,
    T,
    X,
    Delete,
    Backspace,
    LeftShift,
    LeftControl,
    LeftAlt,
    Escape,
}

/// Maustasten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Unveränderlicher Eingabezustand eines Frames.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Zeigerposition in Screen-Pixeln (Ursprung oben links)
    pub pointer_pos: Vec2,
    /// Zeigerbewegung seit dem letzten Frame
    pub pointer_delta: Vec2,
    /// Scroll-Delta dieses Frames
    pub scroll_delta: Vec2,
    /// Viewport-Größe in Pixeln (Null = unbekannt)
    pub viewport_size: Vec2,
    keys_down: HashSet<Key>,
    prev_keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
    prev_buttons_down: HashSet<MouseButton>,
}

impl InputSnapshot {
    /// Leerer Schnappschuss mit Zeigerposition.
    pub fn at(pointer_pos: Vec2) -> Self {
        Self {
            pointer_pos,
            ..Self::default()
        }
    }

    /// Setzt das Zeiger-Delta (Builder-Stil).
    pub fn with_pointer_delta(mut self, delta: Vec2) -> Self {
        self.pointer_delta = delta;
        self
    }

    /// Setzt das Scroll-Delta (Builder-Stil).
    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll_delta = scroll;
        self
    }

    /// Setzt die Viewport-Größe (Builder-Stil).
    pub fn with_viewport(mut self, size: Vec2) -> Self {
        self.viewport_size = size;
        self
    }

    /// Markiert eine Taste als aktuell gedrückt.
    pub fn with_key_down(mut self, key: Key) -> Self {
        self.keys_down.insert(key);
        self
    }

    /// Markiert eine Taste als im Vorframe gedrückt.
    pub fn with_prev_key_down(mut self, key: Key) -> Self {
        self.prev_keys_down.insert(key);
        self
    }

    /// Markiert eine Maustaste als aktuell gedrückt.
    pub fn with_button_down(mut self, button: MouseButton) -> Self {
        self.buttons_down.insert(button);
        self
    }

    /// Markiert eine Maustaste als im Vorframe gedrückt.
    pub fn with_prev_button_down(mut self, button: MouseButton) -> Self {
        self.prev_buttons_down.insert(button);
        self
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn key_just_pressed(&self, key: Key) -> bool {
        self.keys_down.contains(&key) && !self.prev_keys_down.contains(&key)
    }

    pub fn key_just_released(&self, key: Key) -> bool {
        !self.keys_down.contains(&key) && self.prev_keys_down.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button) && !self.prev_buttons_down.contains(&button)
    }

    pub fn button_just_released(&self, button: MouseButton) -> bool {
        !self.buttons_down.contains(&button) && self.prev_buttons_down.contains(&button)
    }
}

/// Sammelt Roh-Events zwischen zwei Frames.
#[derive(Debug, Default)]
pub struct InputTracker {
    current: InputSnapshot,
}

impl InputTracker {
    /// Erstellt einen Tracker ohne gedrückte Tasten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Taste gedrückt oder losgelassen.
    pub fn key_event(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.current.keys_down.insert(key);
        } else {
            self.current.keys_down.remove(&key);
        }
    }

    /// Maustaste gedrückt oder losgelassen.
    pub fn button_event(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.current.buttons_down.insert(button);
        } else {
            self.current.buttons_down.remove(&button);
        }
    }

    /// Zeiger bewegt: Delta akkumuliert sich bis `end_frame`.
    pub fn cursor_moved(&mut self, position: Vec2) {
        self.current.pointer_delta += position - self.current.pointer_pos;
        self.current.pointer_pos = position;
    }

    /// Scroll-Event (akkumuliert bis `end_frame`).
    pub fn scrolled(&mut self, delta: Vec2) {
        self.current.scroll_delta += delta;
    }

    /// Fenster- bzw. Viewport-Größe geändert.
    pub fn resized(&mut self, size: Vec2) {
        self.current.viewport_size = size;
    }

    /// Schnappschuss des aktuellen Frames.
    pub fn snapshot(&self) -> InputSnapshot {
        self.current.clone()
    }

    /// Frame-Ende: aktueller Zustand wird Vorframe, Deltas werden genullt.
    pub fn end_frame(&mut self) {
        self.current.prev_keys_down = self.current.keys_down.clone();
        self.current.prev_buttons_down = self.current.buttons_down.clone();
        self.current.pointer_delta = Vec2::ZERO;
        self.current.scroll_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_compare_same_button_across_frames() {
        let mut tracker = InputTracker::new();
        tracker.button_event(MouseButton::Primary, true);
        let frame1 = tracker.snapshot();
        assert!(frame1.button_just_pressed(MouseButton::Primary));
        assert!(!frame1.button_just_released(MouseButton::Primary));
        tracker.end_frame();

        let frame2 = tracker.snapshot();
        assert!(frame2.is_button_down(MouseButton::Primary));
        assert!(!frame2.button_just_pressed(MouseButton::Primary));
        tracker.end_frame();

        tracker.button_event(MouseButton::Primary, false);
        let frame3 = tracker.snapshot();
        assert!(frame3.button_just_released(MouseButton::Primary));
        // Andere Taste darf keine Flanke melden
        assert!(!frame3.button_just_released(MouseButton::Secondary));
    }

    #[test]
    fn key_release_edge_is_detected_once() {
        let mut tracker = InputTracker::new();
        tracker.key_event(Key::E, true);
        tracker.end_frame();
        tracker.key_event(Key::E, false);
        assert!(tracker.snapshot().key_just_released(Key::E));
        tracker.end_frame();
        assert!(!tracker.snapshot().key_just_released(Key::E));
    }

    #[test]
    fn deltas_reset_at_frame_end() {
        let mut tracker = InputTracker::new();
        tracker.cursor_moved(Vec2::new(10.0, 5.0));
        tracker.cursor_moved(Vec2::new(12.0, 6.0));
        tracker.scrolled(Vec2::new(0.0, 1.0));
        let snap = tracker.snapshot();
        assert_eq!(snap.pointer_delta, Vec2::new(12.0, 6.0));
        assert_eq!(snap.scroll_delta, Vec2::new(0.0, 1.0));

        tracker.end_frame();
        let snap = tracker.snapshot();
        assert_eq!(snap.pointer_pos, Vec2::new(12.0, 6.0));
        assert_eq!(snap.pointer_delta, Vec2::ZERO);
        assert_eq!(snap.scroll_delta, Vec2::ZERO);
    }
}
