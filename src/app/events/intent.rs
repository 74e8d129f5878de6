use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },
    /// Primärtaste gedrückt: Kontrollpunkt unter dem Zeiger selektieren
    ControlPickRequested { screen_pos: Vec2 },
    /// Primärtaste gedrückt: Drag-Lifecycle starten (nur mit Selektion wirksam)
    ControlDragStarted,
    /// Zeiger bewegt bei gehaltener Primärtaste
    ControlDragRequested { screen_pos: Vec2 },
    /// Primärtaste losgelassen
    ControlDragEnded,
    /// Achsen-Lock-Taste gehalten: Ursprung festhalten
    AxisLockEngaged,
    /// Achsen-Lock-Taste losgelassen
    AxisLockReleased,
    /// Scroll mit Bevel-Tiefen-Modifier (Scroll-Delta in Y)
    BevelNumberScrolled { scroll: f32 },
    /// Scroll mit Radius-Modifier
    RadiusScrolled { scroll: f32 },
    /// Scroll mit Bevel-Radius-Modifier
    BevelRadiusScrolled { scroll: f32 },
    /// Extrude-Taste losgelassen
    ExtrudeRequested { screen_pos: Vec2 },
    /// Lösch-Taste gedrückt
    DeleteRequested,
    /// Simulations-Kollaborateur soll Drücke neu schreiben
    SimulationStepRequested,
    /// Neues Rohr durch die angegebenen Punkte anlegen
    AddTubeRequested { positions: Vec<Vec3> },
    /// Optionen übernehmen und speichern
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standard zurücksetzen
    ResetOptionsRequested,
}
