use crate::app::CommandLog;
use crate::core::{Control, ControlRef, Path, Scene, Tube};
use crate::shared::EditorOptions;
use glam::Vec3;

use super::{DragState, SelectionState, ViewState};

/// Vom Selektions- und Drag-Zustand abgeleiteter Editier-Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Nichts selektiert
    Idle,
    /// Kontrollpunkt selektiert, Primärtaste nicht gehalten
    Selected,
    /// Primärtaste gehalten, Kontrollpunkt folgt dem Zeiger
    Dragging,
    /// Wie `Dragging`, Bewegung auf eine Hauptachse beschränkt
    AxisLocked,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Rohre und Simulationsgeräte
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Drag-State
    pub drag: DragState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Scene::new(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            drag: DragState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Leitet den Editier-Zustand aus Selektion und Drag ab.
    pub fn edit_state(&self) -> EditState {
        match (self.selection.current, self.drag.active) {
            (None, _) => EditState::Idle,
            (Some(_), false) => EditState::Selected,
            (Some(_), true) if self.drag.axis_lock_origin.is_some() => EditState::AxisLocked,
            (Some(_), true) => EditState::Dragging,
        }
    }

    /// Selektierter Kontrollpunkt, falls der Handle noch gültig ist.
    pub fn selected_control(&self) -> Option<(ControlRef, &Control)> {
        let r = self.selection.current?;
        self.scene.control(r).map(|c| (r, c))
    }

    /// Legt ein Rohr mit den Standardwerten der Optionen an und gibt seinen Index zurück.
    pub fn add_default_tube(&mut self, positions: &[Vec3]) -> usize {
        let path = Path::from_positions(
            positions,
            self.options.default_tube_radius,
            self.options.default_bevel_radius,
        );
        let tube = Tube::new(
            path,
            self.options.tube_segments,
            self.options.default_tube_radius,
            self.options.tube_color,
        );
        self.scene.add_tube(tube)
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für Status-Ausgabe)
    pub fn control_count(&self) -> usize {
        self.scene.control_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
