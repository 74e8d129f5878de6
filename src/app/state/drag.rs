use glam::Vec3;

/// Zustand eines laufenden Kontrollpunkt-Drags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Primärtaste gehalten, während ein Kontrollpunkt selektiert ist
    pub active: bool,
    /// Ursprung des Achsen-Locks (gesetzt beim Drücken des Modifiers)
    pub axis_lock_origin: Option<Vec3>,
}

impl DragState {
    /// Erstellt einen inaktiven Drag-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beendet Drag und Achsen-Lock.
    pub fn reset(&mut self) {
        self.active = false;
        self.axis_lock_origin = None;
    }
}
