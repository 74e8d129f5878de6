//! Simulationsgeräte, die Druck an Rohr-Anschlüsse abgeben.
//!
//! Geschlossene Variante statt Typabfrage zur Laufzeit: jede Art liefert
//! ihren Druckbeitrag pro Anschlusspunkt über `pressure_contribution`.

use glam::Vec3;

/// Geräteart mit artspezifischen Parametern
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimDeviceKind {
    /// Speichertank: gibt an allen Anschlüssen Überdruck ab
    Tank,
    /// Pumpe: Anschluss 0 = Einlass (Unterdruck), Anschluss 1 = Auslass (Überdruck)
    Pump {
        /// Verstärkung des Pumpendrucks
        pressure_multiplier: f32,
    },
    /// Verbraucher: zieht an allen Anschlüssen Druck ab
    Engine,
}

/// Gerät in der Szene mit lokalen Anschlusspunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct SimDevice {
    /// Geräteart
    pub kind: SimDeviceKind,
    /// Weltposition des Geräte-Ursprungs
    pub position: Vec3,
    /// Anschlusspunkte relativ zu `position`
    pub connection_points: Vec<Vec3>,
}

impl SimDevice {
    /// Druck eines Tanks an jedem Anschluss.
    pub const TANK_PRESSURE: f32 = 10.0;
    /// Grunddruck einer Pumpe (vor `pressure_multiplier`).
    pub const PUMP_BASE_PRESSURE: f32 = 5.0;
    /// Druck eines Verbrauchers an jedem Anschluss.
    pub const ENGINE_PRESSURE: f32 = -10.0;
    /// Standard-Verstärkung einer Pumpe.
    pub const DEFAULT_PUMP_MULTIPLIER: f32 = 1.0;

    /// Tank mit einem Anschluss unten.
    pub fn tank(position: Vec3) -> Self {
        Self {
            kind: SimDeviceKind::Tank,
            position,
            connection_points: vec![Vec3::new(0.0, -1.95, 0.0)],
        }
    }

    /// Elektrische Pumpe mit Einlass oben und Auslass seitlich.
    pub fn pump(position: Vec3) -> Self {
        Self {
            kind: SimDeviceKind::Pump {
                pressure_multiplier: Self::DEFAULT_PUMP_MULTIPLIER,
            },
            position,
            connection_points: vec![Vec3::new(0.0, 1.25, 0.0), Vec3::new(0.0, 0.0, -1.15)],
        }
    }

    /// Verbraucher mit frei wählbaren Anschlüssen.
    pub fn engine(position: Vec3, connection_points: Vec<Vec3>) -> Self {
        Self {
            kind: SimDeviceKind::Engine,
            position,
            connection_points,
        }
    }

    /// Anschlusspunkt in Welt-Koordinaten.
    pub fn connection_world(&self, index: usize) -> Option<Vec3> {
        self.connection_points
            .get(index)
            .map(|local| self.position + *local)
    }

    /// Index des Anschlusses, der innerhalb von `tolerance` an `point` liegt.
    pub fn connection_at(&self, point: Vec3, tolerance: f32) -> Option<usize> {
        (0..self.connection_points.len()).find(|&i| {
            self.connection_world(i)
                .is_some_and(|c| c.distance(point) <= tolerance)
        })
    }

    /// Druckbeitrag am Anschluss `connection_index`.
    pub fn pressure_contribution(&self, connection_index: usize) -> f32 {
        if connection_index >= self.connection_points.len() {
            return 0.0;
        }
        match self.kind {
            SimDeviceKind::Tank => Self::TANK_PRESSURE,
            SimDeviceKind::Pump {
                pressure_multiplier,
            } => match connection_index {
                0 => -Self::PUMP_BASE_PRESSURE * pressure_multiplier,
                1 => Self::PUMP_BASE_PRESSURE * pressure_multiplier,
                _ => 0.0,
            },
            SimDeviceKind::Engine => Self::ENGINE_PRESSURE,
        }
    }
}
