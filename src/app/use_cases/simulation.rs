//! Use-Case: Druckwerte der Geräte auf die Rohre übertragen.
//!
//! Ersetzt nicht den Gas-Solver: jedes Rohrende, das auf einem Geräte-Anschluss
//! liegt, übernimmt dessen Druckbeitrag, der Innendruck ist der Mittelwert beider Enden.

use crate::core::{Scene, SimDevice};
use glam::Vec3;

/// Toleranz, innerhalb der ein Rohrende als angeschlossen gilt.
pub const CONNECTION_TOLERANCE: f32 = 1e-3;

/// Druckbeitrag am Punkt `point` (0, wenn kein Anschluss dort liegt).
fn contribution_at(devices: &[SimDevice], point: Vec3) -> f32 {
    devices
        .iter()
        .find_map(|device| {
            device
                .connection_at(point, CONNECTION_TOLERANCE)
                .map(|index| device.pressure_contribution(index))
        })
        .unwrap_or(0.0)
}

/// Schreibt `total_internal_pressure` für jedes Rohr mit mindestens einem Kontrollpunkt.
pub fn step_pressures(scene: &mut Scene) {
    let Scene { tubes, devices } = scene;
    for tube in tubes.iter_mut() {
        let (Some(first), Some(last)) = (tube.path.controls.first(), tube.path.controls.last())
        else {
            continue;
        };
        let start = contribution_at(devices, first.position);
        let end = contribution_at(devices, last.position);
        tube.total_internal_pressure = (start + end) / 2.0;
    }
    log::debug!("Drücke für {} Rohre aktualisiert", tubes.len());
}
