//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use super::tube_mesh::TubeMesh;
use crate::core::ControlRef;
use glam::{Mat4, Vec2};
use std::sync::Arc;

/// Render-Daten eines einzelnen Rohrs.
#[derive(Debug, Clone)]
pub struct TubeRenderData {
    /// Ring-Mesh (Arc für O(1)-Clone pro Frame)
    pub mesh: Arc<TubeMesh>,
    /// Rohe Kontrollpunkt-Positionen (3 Floats pro Punkt) für Debug-Linien
    pub path_positions: Vec<f32>,
    /// Radius pro Kontrollpunkt für Gizmo-Größen
    pub control_radii: Vec<f32>,
    /// Vertices pro Ring
    pub segments: u32,
    /// Farbe (RGBA)
    pub color: [f32; 4],
    /// Vom Simulations-Kollaborateur geschriebener Druck
    pub pressure: f32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// View-Matrix der Kamera
    pub view: Mat4,
    /// Projektionsmatrix für `viewport_size`
    pub projection: Mat4,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Ein Eintrag pro Rohr, gleiche Reihenfolge wie in der Szene
    pub tubes: Vec<TubeRenderData>,
    /// Aktuell selektierter Kontrollpunkt für Gizmo/Hervorhebung
    pub selection: Option<ControlRef>,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt Geometrie gezeichnet werden muss.
    pub fn has_geometry(&self) -> bool {
        self.tubes.iter().any(|t| !t.mesh.is_empty())
    }

    /// Summe aller Dreiecke über alle Rohre.
    pub fn triangle_count(&self) -> usize {
        self.tubes.iter().map(|t| t.mesh.triangle_count()).sum()
    }
}
