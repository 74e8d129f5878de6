//! Einrasten einer Verschiebung auf die nächstliegende Welt-Hauptachse.

use glam::Vec3;

/// Hauptachse, die am besten zur Richtung von `v` passt.
///
/// Die betragsgrößte Komponente gewinnt, Gleichstand löst zu X, dann Y,
/// dann Z auf. Ein Nullvektor liefert X.
pub fn major_axis(v: Vec3) -> Vec3 {
    let a = v.normalize_or_zero().abs();
    if a.x >= a.y && a.x >= a.z {
        Vec3::X
    } else if a.y >= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

/// Projiziert `displacement` auf seine Hauptachse.
pub fn snap_to_major_axis(displacement: Vec3) -> Vec3 {
    let axis = major_axis(displacement);
    axis * displacement.dot(axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_component_wins() {
        assert_eq!(major_axis(Vec3::new(0.1, -3.0, 2.0)), Vec3::Y);
        assert_eq!(major_axis(Vec3::new(0.1, 0.2, -0.5)), Vec3::Z);
    }

    #[test]
    fn ties_resolve_x_then_y() {
        assert_eq!(major_axis(Vec3::new(1.0, 1.0, 1.0)), Vec3::X);
        assert_eq!(major_axis(Vec3::new(0.0, -2.0, 2.0)), Vec3::Y);
        assert_eq!(major_axis(Vec3::ZERO), Vec3::X);
    }

    #[test]
    fn snap_keeps_sign_along_axis() {
        let snapped = snap_to_major_axis(Vec3::new(0.3, -2.0, 0.5));
        assert_eq!(snapped, Vec3::new(0.0, -2.0, 0.0));
    }
}
