//! 3D-Kamera für Picking und Ray-Casting.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// Projektionsart der Kamera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Zentralprojektion mit Sichtfeld
    #[default]
    Perspective,
    /// Parallelprojektion, Ausdehnung über `zoom_factor`
    Orthographic,
}

/// Strahl in Welt-Koordinaten (Richtung normiert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt (auf der Near-Plane)
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Schnittpunkt mit der Ebene durch `point` mit Normale `normal`.
    ///
    /// `None`, wenn der Strahl (fast) parallel zur Ebene verläuft.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<Vec3> {
        let denom = normal.dot(self.direction);
        if denom.abs() < Camera3D::PARALLEL_EPSILON {
            return None;
        }
        let t = normal.dot(point - self.origin) / denom;
        Some(self.origin + self.direction * t)
    }
}

/// Kamera mit View- und Projektionsmatrix.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Kamera-Position in Welt-Koordinaten
    pub position: Vec3,
    /// Blickziel
    pub target: Vec3,
    /// Oben-Vektor
    pub up: Vec3,
    /// Vertikales Sichtfeld in Grad (nur Perspektive)
    pub fov_degrees: f32,
    /// Projektionsart
    pub projection: ProjectionMode,
    /// Zoom-Faktor (nur Orthographisch)
    pub zoom_factor: f32,
}

impl Camera3D {
    /// Near-Plane-Abstand.
    pub const NEAR: f32 = 0.001;
    /// Far-Plane-Abstand.
    pub const FAR: f32 = 10000.0;
    /// Toleranz für Strahl-Ebene-Parallelität.
    pub const PARALLEL_EPSILON: f32 = 1e-6;

    /// Erstellt eine Kamera, die aus (3, 3, 3) auf den Ursprung blickt.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(3.0, 3.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            projection: ProjectionMode::Perspective,
            zoom_factor: 1.0,
        }
    }

    /// Richtet die Kamera neu aus.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Normierte Blickrichtung (Position → Ziel).
    pub fn view_direction(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// View-Matrix (rechtshändig).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projektionsmatrix für die gegebene Viewport-Größe in Pixeln.
    pub fn projection_matrix(&self, viewport: Vec2) -> Mat4 {
        let viewport = viewport.max(Vec2::ONE);
        match self.projection {
            ProjectionMode::Perspective => Mat4::perspective_rh_gl(
                self.fov_degrees.to_radians(),
                viewport.x / viewport.y,
                Self::NEAR,
                Self::FAR,
            ),
            ProjectionMode::Orthographic => {
                let half_w = viewport.x / 1000.0 * self.zoom_factor;
                let half_h = viewport.y / 1000.0 * self.zoom_factor;
                Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, Self::NEAR, Self::FAR)
            }
        }
    }

    /// Kombinierte Matrix `projection * view`.
    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        self.projection_matrix(viewport) * self.view_matrix()
    }

    /// Projiziert einen Weltpunkt in Screen-Pixel (Ursprung oben links).
    ///
    /// `None` für Punkte hinter der Kamera.
    pub fn world_to_screen(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_projection(viewport) * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.xy() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// Strahl durch einen Screen-Pixel (inverse View-Projektion).
    pub fn screen_ray(&self, screen: Vec2, viewport: Vec2) -> Ray {
        let viewport = viewport.max(Vec2::ONE);
        let ndc = Vec2::new(
            screen.x / viewport.x * 2.0 - 1.0,
            1.0 - screen.y / viewport.y * 2.0,
        );
        // inverse(P·V) getrennt als inverse(V) · inverse(P): Near-Punkt im View-Space,
        // Auge im Ursprung. FAR/NEAR = 1e7 ist in f32 nicht invertierbar genug.
        let inverse_view = self.view_matrix().inverse();
        let near_view = self
            .projection_matrix(viewport)
            .inverse()
            .project_point3(ndc.extend(-1.0));

        let direction_view = match self.projection {
            ProjectionMode::Perspective => near_view.try_normalize().unwrap_or(Vec3::NEG_Z),
            ProjectionMode::Orthographic => Vec3::NEG_Z,
        };

        Ray {
            origin: inverse_view.transform_point3(near_view),
            direction: inverse_view
                .transform_vector3(direction_view)
                .try_normalize()
                .unwrap_or(self.view_direction()),
        }
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn front_camera() -> Camera3D {
        let mut camera = Camera3D::new();
        camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = front_camera();
        let screen = camera
            .world_to_screen(Vec3::ZERO, VIEWPORT)
            .expect("Ziel liegt vor der Kamera");
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn points_behind_camera_are_not_projected() {
        let camera = front_camera();
        assert!(camera
            .world_to_screen(Vec3::new(0.0, 0.0, 10.0), VIEWPORT)
            .is_none());
    }

    #[test]
    fn screen_y_grows_downwards() {
        let camera = front_camera();
        let above = camera
            .world_to_screen(Vec3::new(0.0, 1.0, 0.0), VIEWPORT)
            .expect("sichtbar");
        assert!(above.y < 300.0);
    }

    #[test]
    fn screen_ray_roundtrips_through_projection() {
        let camera = front_camera();
        let world = Vec3::new(0.7, -0.4, 0.0);
        let screen = camera.world_to_screen(world, VIEWPORT).expect("sichtbar");
        let ray = camera.screen_ray(screen, VIEWPORT);
        let hit = ray
            .intersect_plane(Vec3::ZERO, camera.view_direction())
            .expect("nicht parallel");
        assert_relative_eq!(hit.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(hit.y, world.y, epsilon = 1e-3);
        assert_relative_eq!(hit.z, world.z, epsilon = 1e-3);
    }

    #[test]
    fn orthographic_ray_is_parallel_to_view_direction() {
        let mut camera = front_camera();
        camera.projection = ProjectionMode::Orthographic;
        let ray = camera.screen_ray(Vec2::new(100.0, 50.0), VIEWPORT);
        assert_relative_eq!(ray.direction.dot(camera.view_direction()), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn parallel_ray_misses_plane() {
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        };
        assert!(ray.intersect_plane(Vec3::new(0.0, 0.0, 1.0), Vec3::Z).is_none());
    }
}
