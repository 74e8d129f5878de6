//! Use-Case: Viewport-Größe.

use crate::app::AppState;
use glam::Vec2;

/// Übernimmt die neue Viewport-Größe.
pub fn resize(state: &mut AppState, size: Vec2) {
    if state.view.viewport_size != size {
        log::debug!("Viewport: {}x{}", size.x, size.y);
    }
    state.view.viewport_size = size;
}
