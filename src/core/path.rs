//! Geordnete Kontrollpunkt-Sequenz eines Rohrs.

use super::Control;
use crate::shared::bevel_geometry::expand_corner;
use glam::Vec3;

/// Expandierter Pfad: Punkte plus Radius des jeweils besitzenden Kontrollpunkts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedPath {
    /// Alle Punkte nach der Eckenrundung in Pfad-Reihenfolge
    pub points: Vec<Vec3>,
    /// Radius pro Punkt (gleiche Länge wie `points`)
    pub radii: Vec<f32>,
}

impl ExpandedPath {
    /// Anzahl der expandierten Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pfad aus Kontrollpunkten.
///
/// Indizes sind stabil bis zur nächsten strukturellen Änderung
/// (`insert_control`, `remove_control`). Wer einen Index hält, muss ihn
/// danach neu bestimmen.
#[derive(Debug, Clone, Default)]
pub struct Path {
    /// Kontrollpunkte in Pfad-Reihenfolge
    pub controls: Vec<Control>,
}

impl Path {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
        }
    }

    /// Erstellt einen Pfad aus Positionen mit einheitlichem Radius und Bevel-Radius.
    pub fn from_positions(positions: &[Vec3], radius: f32, bevel_radius: f32) -> Self {
        Self {
            controls: positions
                .iter()
                .map(|&p| Control::new(p, radius, bevel_radius))
                .collect(),
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Kontrollpunkte hat.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Kontrollpunkt per Index (None bei ungültigem Index).
    pub fn control(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    /// Mutabler Kontrollpunkt per Index.
    pub fn control_mut(&mut self, index: usize) -> Option<&mut Control> {
        self.controls.get_mut(index)
    }

    /// Erster oder letzter Kontrollpunkt: wird nie gerundet.
    pub fn is_endpoint(&self, index: usize) -> bool {
        index == 0 || index + 1 >= self.controls.len()
    }

    /// Hat der Kontrollpunkt einen Vorgänger und einen Nachfolger?
    pub fn has_both_neighbors(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.controls.len()
    }

    /// Fügt einen Kontrollpunkt an `index` ein (Indizes dahinter verschieben sich).
    ///
    /// `index` wird auf `len()` begrenzt.
    pub fn insert_control(&mut self, index: usize, control: Control) -> usize {
        let index = index.min(self.controls.len());
        self.controls.insert(index, control);
        index
    }

    /// Entfernt einen Kontrollpunkt. Ungültige Indizes sind ein No-op.
    pub fn remove_control(&mut self, index: usize) -> Option<Control> {
        if index < self.controls.len() {
            Some(self.controls.remove(index))
        } else {
            None
        }
    }

    /// Flacher Positions-Puffer (3 Floats pro Kontrollpunkt) für Debug-Linien.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.controls
            .iter()
            .flat_map(|c| c.position.to_array())
            .collect()
    }

    /// Expandiert jeden Kontrollpunkt zu seiner finalen Punktliste.
    ///
    /// Endpunkte bleiben einzelne Punkte, innere Punkte werden mit
    /// `bevel_number` Rekursionsstufen gerundet. Die Nachbarn sind immer
    /// die rohen Positionen der angrenzenden Kontrollpunkte.
    pub fn expand(&self) -> ExpandedPath {
        let mut expanded = ExpandedPath::default();

        for (index, control) in self.controls.iter().enumerate() {
            let points = if self.is_endpoint(index) || control.bevel_number == 0 {
                vec![control.position]
            } else {
                let prev = self.controls[index - 1].position;
                let next = self.controls[index + 1].position;
                expand_corner(
                    prev,
                    control.position,
                    next,
                    control.bevel_radius,
                    control.bevel_number,
                )
            };

            expanded
                .radii
                .extend(std::iter::repeat_n(control.radius, points.len()));
            expanded.points.extend(points);
        }

        expanded
    }
}
