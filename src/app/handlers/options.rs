//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in alle Rohre.
fn apply_to_scene(state: &mut AppState) {
    let segments = state.options.tube_segments;
    for tube in &mut state.scene.tubes {
        tube.segments = segments;
    }
    state.scene.rebuild_all();
}

/// Übernimmt Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    apply_to_scene(state);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    apply_to_scene(state);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
