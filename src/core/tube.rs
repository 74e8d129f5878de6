//! Rohr: besitzt einen Pfad und dessen abgeleitetes Ring-Mesh.

use super::Path;
use crate::shared::tube_mesh::{build_tube_mesh, TubeMesh};
use std::sync::Arc;

/// Rohr mit Pfad, Darstellungsparametern und Render-Arrays.
#[derive(Debug, Clone)]
pub struct Tube {
    /// Kontrollpunkte des Rohrs
    pub path: Path,
    /// Vertices pro Ring
    pub segments: u32,
    /// Nenn-Radius beim Anlegen (Mesh und Extrude nutzen die Radien der Kontrollpunkte)
    pub radius: f32,
    /// Farbe (RGBA)
    pub color: [f32; 4],
    /// Vom Simulations-Kollaborateur geschriebener Innendruck (hier nur gespeichert)
    pub total_internal_pressure: f32,
    /// Zuletzt gebautes Mesh (Arc für O(1)-Clone in der RenderScene)
    mesh: Arc<TubeMesh>,
}

impl Tube {
    /// Erstellt ein Rohr und baut sofort sein Mesh.
    pub fn new(path: Path, segments: u32, radius: f32, color: [f32; 4]) -> Self {
        let mut tube = Self {
            path,
            segments,
            radius,
            color,
            total_internal_pressure: 0.0,
            mesh: Arc::new(TubeMesh::empty(segments)),
        };
        tube.rebuild();
        tube
    }

    /// Aktuelles Mesh.
    pub fn mesh(&self) -> &TubeMesh {
        &self.mesh
    }

    /// Geteilte Referenz auf das Mesh für den Renderer.
    pub fn mesh_arc(&self) -> Arc<TubeMesh> {
        Arc::clone(&self.mesh)
    }

    /// Radius pro Kontrollpunkt (für Gizmo-Größen).
    pub fn control_radii(&self) -> Vec<f32> {
        self.path.controls.iter().map(|c| c.radius).collect()
    }

    /// Baut Positionen, Normalen und Indizes vollständig neu auf.
    pub fn rebuild(&mut self) {
        let expanded = self.path.expand();
        self.mesh = Arc::new(build_tube_mesh(
            &expanded.points,
            &expanded.radii,
            self.segments,
        ));
        log::debug!(
            "Tube neu gebaut: {} Kontrollpunkte → {} Ringe, {} Dreiecke",
            self.path.len(),
            self.mesh.ring_count(),
            self.mesh.triangle_count()
        );
    }
}
