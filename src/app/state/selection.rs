use crate::core::ControlRef;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektierter Kontrollpunkt (`None` = nichts selektiert)
    pub current: Option<ControlRef>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
