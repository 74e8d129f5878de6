//! Viewport-Input-Handling: Schnappschuss → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Primärklick (Pick + Drag-Start)
//! - `drag_primary` — Achsen-Lock, Drag-Bewegung und Drag-Ende

mod clicks;
mod drag_primary;

use super::keyboard;
use crate::app::{AppIntent, AppState};
use crate::shared::{InputSnapshot, KeyBindings};

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Selektierter Kontrollpunkt folgt dem Zeiger
    ControlMove,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub snapshot: &'a InputSnapshot,
    pub bindings: &'a KeyBindings,
    pub has_selection: bool,
    pub axis_lock_engaged: bool,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag über mehrere Frames)
#[derive(Debug, Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus einem Schnappschuss und gibt AppIntents zurück.
    ///
    /// Feste Reihenfolge pro Frame: Viewport, Pick, Drag/Achsen-Lock,
    /// Scroll-Anpassung, Extrude/Delete.
    pub fn collect_viewport_events(
        &mut self,
        snapshot: &InputSnapshot,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            snapshot,
            bindings: &state.options.key_bindings,
            has_selection: state.selection.current.is_some(),
            axis_lock_engaged: state.drag.axis_lock_origin.is_some(),
        };

        let mut events = Vec::new();

        let size = snapshot.viewport_size;
        if size.x > 0.0 && size.y > 0.0 && size != state.view.viewport_size {
            events.push(AppIntent::ViewportResized { size });
        }

        self.handle_clicks(&ctx, &mut events);
        self.handle_axis_lock(&ctx, &mut events);
        self.handle_drag_update(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);

        events.extend(keyboard::collect_scroll_intents(snapshot, ctx.bindings));
        events.extend(keyboard::collect_keyboard_intents(snapshot, ctx.bindings));

        events
    }

    /// Gibt zurück, ob gerade ein Kontrollpunkt-Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.primary_drag_mode == PrimaryDragMode::ControlMove
    }
}
