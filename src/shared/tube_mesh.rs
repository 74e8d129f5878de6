//! Ring-Mesh eines Rohrs aus einer expandierten Punktliste.

use super::frame_transport::transport_frames;
use glam::Vec3;

/// Render-Arrays eines Rohrs (Positionen, Normalen, Dreiecks-Indizes).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TubeMesh {
    /// Vertex-Positionen, Ring für Ring
    pub positions: Vec<Vec3>,
    /// Vertex-Normalen (gleiche Reihenfolge wie `positions`)
    pub normals: Vec<Vec3>,
    /// Dreiecksliste, 3 Indizes pro Dreieck
    pub indices: Vec<u32>,
    /// Vertices pro Ring
    pub segments: u32,
}

impl TubeMesh {
    /// Leeres Mesh mit gegebener Ring-Auflösung.
    pub fn empty(segments: u32) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn keine Geometrie vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Anzahl der Ringe.
    pub fn ring_count(&self) -> usize {
        if self.segments == 0 {
            0
        } else {
            self.positions.len() / self.segments as usize
        }
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positionen als flacher `f32`-Puffer (3 Floats pro Vertex).
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normalen als flacher `f32`-Puffer (3 Floats pro Vertex).
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }
}

/// Baut das Rohr-Mesh entlang `points`, jeweils mit dem Radius aus `radii`.
///
/// `radii` muss pro Punkt einen Radius liefern; fehlende Einträge
/// übernehmen den letzten bekannten Radius. Weniger als 2 Punkte oder
/// `segments < 3` liefern ein leeres Mesh.
pub fn build_tube_mesh(points: &[Vec3], radii: &[f32], segments: u32) -> TubeMesh {
    if points.len() < 2 || segments < 3 {
        return TubeMesh::empty(segments);
    }

    let frames = transport_frames(points);
    if frames.is_empty() {
        return TubeMesh::empty(segments);
    }

    let seg = segments as usize;
    let ring_count = points.len();
    let mut mesh = TubeMesh {
        positions: Vec::with_capacity(ring_count * seg),
        normals: Vec::with_capacity(ring_count * seg),
        indices: Vec::with_capacity(6 * seg * (ring_count - 1)),
        segments,
    };

    let mut radius = radii.first().copied().unwrap_or(0.0);
    for (ring, (&center, frame)) in points.iter().zip(&frames).enumerate() {
        if let Some(&r) = radii.get(ring) {
            radius = r;
        }

        for k in 0..seg {
            let angle = std::f32::consts::TAU * k as f32 / seg as f32;
            let direction = frame.right * angle.cos() + frame.up * angle.sin();
            let vertex = center + direction * radius;
            mesh.positions.push(vertex);
            mesh.normals
                .push((vertex - center).try_normalize().unwrap_or(direction));
        }
    }

    for ring in 0..(ring_count - 1) as u32 {
        let base = ring * segments;
        let next_base = base + segments;
        for k in 0..segments {
            let k_next = (k + 1) % segments;
            let current = base + k;
            let next = base + k_next;
            let current_next = next_base + k;
            let next_next = next_base + k_next;

            mesh.indices
                .extend_from_slice(&[current, next, current_next, current_next, next, next_next]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_point_scenario_produces_two_rings() {
        let points = [Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0)];
        let mesh = build_tube_mesh(&points, &[0.2, 0.2], 4);

        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.normals.len(), 8);
        assert_eq!(mesh.ring_count(), 2);
        assert_eq!(mesh.indices.len(), 24);
        assert_eq!(mesh.triangle_count(), 8);

        for v in &mesh.positions {
            // Senkrechter Abstand zur Z-Achse
            let perpendicular = (v.x * v.x + v.y * v.y).sqrt();
            assert_relative_eq!(perpendicular, 0.2, epsilon = 1e-6);
        }
    }

    #[test]
    fn index_count_matches_ring_formula() {
        let points: Vec<Vec3> = (0..7)
            .map(|i| Vec3::new(i as f32, (i as f32 * 0.7).sin(), 0.0))
            .collect();
        let radii = vec![0.1; points.len()];
        let mesh = build_tube_mesh(&points, &radii, 32);
        assert_eq!(mesh.indices.len(), 6 * 32 * (7 - 1));
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));
    }

    #[test]
    fn ring_vertices_sit_at_owning_radius() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let radii = [0.1, 0.3, 0.5];
        let mesh = build_tube_mesh(&points, &radii, 8);

        for (ring, center) in points.iter().enumerate() {
            for k in 0..8 {
                let v = mesh.positions[ring * 8 + k];
                assert_relative_eq!(v.distance(*center), radii[ring], epsilon = 1e-5);
                let n = mesh.normals[ring * 8 + k];
                assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn winding_is_uniform_along_tube() {
        let points = [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
        let mesh = build_tube_mesh(&points, &[0.2; 3], 6);

        // Jede Dreiecksnormale zeigt nach aussen (gleiches Vorzeichen wie Vertex-Normale)
        let signs: Vec<bool> = mesh
            .indices
            .chunks(3)
            .map(|t| {
                let (a, b, c) = (
                    mesh.positions[t[0] as usize],
                    mesh.positions[t[1] as usize],
                    mesh.positions[t[2] as usize],
                );
                let face = (b - a).cross(c - a);
                face.dot(mesh.normals[t[0] as usize]) > 0.0
            })
            .collect();
        assert!(signs.iter().all(|&s| s == signs[0]));
    }

    #[test]
    fn short_or_degenerate_paths_are_empty() {
        assert!(build_tube_mesh(&[Vec3::ZERO], &[0.2], 8).is_empty());
        assert!(build_tube_mesh(&[Vec3::ONE, Vec3::ONE], &[0.2, 0.2], 8).is_empty());
        assert!(build_tube_mesh(&[Vec3::ZERO, Vec3::X], &[0.2, 0.2], 2).is_empty());
    }

    #[test]
    fn flat_buffers_have_three_floats_per_vertex() {
        let mesh = build_tube_mesh(&[Vec3::ZERO, Vec3::Z], &[0.2, 0.2], 5);
        assert_eq!(mesh.positions_flat().len(), mesh.positions.len() * 3);
        assert_eq!(mesh.normals_flat().len(), mesh.normals.len() * 3);
        assert_eq!(mesh.positions_flat()[0], mesh.positions[0].x);
    }
}
