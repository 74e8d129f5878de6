use crate::core::Ray;
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe setzen
    SetViewportSize { size: Vec2 },
    /// Ersten Kontrollpunkt in Pick-Distanz zur Screen-Position selektieren
    PickControl { screen_pos: Vec2 },
    /// Drag-Lifecycle beginnen
    BeginDrag,
    /// Selektierten Kontrollpunkt auf den Schnitt von `ray` mit der Drag-Ebene setzen
    DragSelectedControl { ray: Ray },
    /// Drag-Lifecycle beenden
    EndDrag,
    /// Achsen-Lock-Ursprung auf die aktuelle Position setzen
    BeginAxisLock,
    /// Achsen-Lock aufheben
    EndAxisLock,
    /// Bevel-Tiefe um `steps` ändern (geklemmt)
    AdjustBevelNumber { steps: i32 },
    /// Radius um `delta` ändern
    AdjustRadius { delta: f32 },
    /// Bevel-Radius um `delta` ändern
    AdjustBevelRadius { delta: f32 },
    /// Neuen Kontrollpunkt entlang der Hauptachse zum Zeigerstrahl anhängen
    ExtrudeSelectedControl { ray: Ray },
    /// Selektierten Kontrollpunkt entfernen
    DeleteSelectedControl,
    /// Drücke aus den Geräten an den Rohrenden übernehmen
    StepPressures,
    /// Neues Rohr anlegen
    AddTube { positions: Vec<Vec3> },
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
}
