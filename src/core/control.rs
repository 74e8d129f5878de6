//! Kontrollpunkt eines Rohrverlaufs.

use glam::Vec3;

/// Vom Benutzer gesetzter Punkt eines Pfads mit Rohr- und Bevel-Parametern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
    /// Rohr-Radius an diesem Kontrollpunkt
    pub radius: f32,
    /// Einzugs-Distanz für die Eckenrundung
    pub bevel_radius: f32,
    /// Rekursionstiefe der Rundung (0 = scharfe Ecke)
    pub bevel_number: u32,
    /// Hervorhebung für Gizmo-Rendering
    pub selected: bool,
}

impl Control {
    /// Erstellt einen ungerundeten Kontrollpunkt.
    pub fn new(position: Vec3, radius: f32, bevel_radius: f32) -> Self {
        Self {
            position,
            radius,
            bevel_radius,
            bevel_number: 0,
            selected: false,
        }
    }

    /// Setzt die Bevel-Tiefe (Builder-Stil).
    pub fn with_bevel_number(mut self, bevel_number: u32) -> Self {
        self.bevel_number = bevel_number;
        self
    }
}
