//! Verdrillungsfreier Rahmen-Transport entlang einer 3D-Polylinie.
//!
//! Diskreter Parallel-Transport: der Rahmen (tangent, right, up) wird von
//! Punkt zu Punkt nur um die minimale Rotation gedreht, die die alte
//! Tangente auf die neue abbildet. Eine Eigenrotation um die Tangente
//! kann sich so nicht aufsummieren.

use glam::{Quat, Vec3};

/// Ab diesem |tangent.y| gilt die Tangente als (fast) vertikal.
const VERTICAL_THRESHOLD: f32 = 0.9;
/// Unterhalb dieser Kreuzprodukt-Länge gelten zwei Tangenten als parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Orthonormaler Rahmen an einem Punkt der Polylinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeFrame {
    /// Tangente (Vorwärtsrichtung)
    pub tangent: Vec3,
    /// Seitenvektor
    pub right: Vec3,
    /// Aufwärtsvektor
    pub up: Vec3,
}

impl TubeFrame {
    /// Startrahmen zu einer Tangente.
    ///
    /// Referenzachse ist Welt-Y, bei fast vertikaler Tangente Welt-X.
    pub fn initial(tangent: Vec3) -> Self {
        let reference = if tangent.y.abs() >= VERTICAL_THRESHOLD {
            Vec3::X
        } else {
            Vec3::Y
        };
        let right = tangent.cross(reference).normalize();
        let up = right.cross(tangent).normalize();
        Self { tangent, right, up }
    }

    /// Transportiert den Rahmen auf eine neue (normierte) Tangente.
    pub fn transported(&self, new_tangent: Vec3) -> Self {
        let axis = self.tangent.cross(new_tangent);
        if axis.length() < PARALLEL_EPSILON {
            return Self {
                tangent: new_tangent,
                ..*self
            };
        }

        let angle = self.tangent.dot(new_tangent).clamp(-1.0, 1.0).acos();
        let rotation = Quat::from_axis_angle(axis.normalize(), angle);
        Self {
            tangent: new_tangent,
            right: rotation * self.right,
            up: rotation * self.up,
        }
    }
}

/// Berechnet einen Rahmen pro Punkt.
///
/// Leeres Ergebnis, wenn weniger als 2 Punkte vorliegen oder alle Punkte
/// zusammenfallen. Null-Segmente übernehmen die vorherige Tangente.
pub fn transport_frames(points: &[Vec3]) -> Vec<TubeFrame> {
    if points.len() < 2 {
        return Vec::new();
    }

    // Erste Richtung ungleich Null als Starttangente
    let Some(first_tangent) = points
        .windows(2)
        .find_map(|w| (w[1] - w[0]).try_normalize())
    else {
        log::debug!("Rahmen-Transport: alle {} Punkte fallen zusammen", points.len());
        return Vec::new();
    };

    let mut frames = Vec::with_capacity(points.len());
    let mut frame = TubeFrame::initial(first_tangent);
    frames.push(frame);

    let last = points.len() - 1;
    for i in 1..points.len() {
        let delta = if i < last {
            points[i + 1] - points[i]
        } else {
            points[i] - points[i - 1]
        };
        let tangent = delta.try_normalize().unwrap_or(frame.tangent);
        frame = frame.transported(tangent);
        frames.push(frame);
    }

    frames
}
