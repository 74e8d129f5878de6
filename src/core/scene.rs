//! Szene als Arena aller Rohre und Simulationsgeräte.
//!
//! Externe Referenzen auf Kontrollpunkte laufen über `ControlRef`
//! (Rohr-Index, Kontroll-Index) statt über Zeiger. Nach Extrude/Delete
//! werden Referenzen gegen die aktuellen Grenzen geprüft.

use super::{Control, SimDevice, Tube};

/// Stabiler Handle auf einen Kontrollpunkt in der Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlRef {
    /// Index des Rohrs in `Scene::tubes`
    pub tube: usize,
    /// Index des Kontrollpunkts im Pfad des Rohrs
    pub control: usize,
}

impl ControlRef {
    /// Erstellt einen Handle.
    pub fn new(tube: usize, control: usize) -> Self {
        Self { tube, control }
    }
}

/// Alle Rohre und Geräte.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Rohre in Scan-Reihenfolge
    pub tubes: Vec<Tube>,
    /// Druckquellen und -senken
    pub devices: Vec<SimDevice>,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Rohr hinzu und gibt seinen Index zurück.
    pub fn add_tube(&mut self, tube: Tube) -> usize {
        self.tubes.push(tube);
        self.tubes.len() - 1
    }

    /// Fügt ein Gerät hinzu.
    pub fn add_device(&mut self, device: SimDevice) {
        self.devices.push(device);
    }

    /// Kontrollpunkt hinter einem Handle (None bei veraltetem Handle).
    pub fn control(&self, r: ControlRef) -> Option<&Control> {
        self.tubes.get(r.tube)?.path.control(r.control)
    }

    /// Mutabler Kontrollpunkt hinter einem Handle.
    pub fn control_mut(&mut self, r: ControlRef) -> Option<&mut Control> {
        self.tubes.get_mut(r.tube)?.path.control_mut(r.control)
    }

    /// Prüft einen Handle gegen die aktuellen Grenzen.
    pub fn is_valid(&self, r: ControlRef) -> bool {
        self.control(r).is_some()
    }

    /// Anzahl aller Kontrollpunkte über alle Rohre.
    pub fn control_count(&self) -> usize {
        self.tubes.iter().map(|t| t.path.len()).sum()
    }

    /// Setzt das `selected`-Flag exklusiv auf `selection`.
    pub fn sync_selection_flags(&mut self, selection: Option<ControlRef>) {
        for (tube_index, tube) in self.tubes.iter_mut().enumerate() {
            for (control_index, control) in tube.path.controls.iter_mut().enumerate() {
                control.selected = selection == Some(ControlRef::new(tube_index, control_index));
            }
        }
    }

    /// Baut das Rohr `tube` und seine direkten Nachbarn in der Liste neu.
    pub fn rebuild_around(&mut self, tube: usize) {
        let start = tube.saturating_sub(1);
        let end = (tube + 1).min(self.tubes.len().saturating_sub(1));
        for index in start..=end {
            if let Some(t) = self.tubes.get_mut(index) {
                t.rebuild();
            }
        }
    }

    /// Baut alle Rohre neu.
    pub fn rebuild_all(&mut self) {
        for tube in &mut self.tubes {
            tube.rebuild();
        }
    }
}
