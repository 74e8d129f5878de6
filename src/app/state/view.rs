use crate::core::Camera3D;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 3D-Kamera für Picking und Ray-Casting
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: Vec2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera3D::new(),
            viewport_size: Vec2::ZERO,
        }
    }

    /// Gibt zurück, ob der Viewport eine gültige Fläche hat.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size.x > 0.0 && self.viewport_size.y > 0.0
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
