//! Handler für den Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    use_cases::viewport::resize(state, size);
}
