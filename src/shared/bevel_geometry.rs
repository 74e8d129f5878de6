//! Rekursive Eckenrundung (Bevel) für Rohrverläufe.
//!
//! Reine Funktionen ohne geteilten Zustand: eine scharfe Ecke `v` mit den
//! Nachbarn `a` (vorher) und `b` (nachher) wird durch `2^bevel_number`
//! Punkte ersetzt, die eine gerundete Ecke annähern.

use glam::Vec3;

/// Untergrenze des Einzugs relativ zur Distanz (verhindert vollständigen Kollaps).
const MIN_INSET_FACTOR: f32 = 0.1;
/// Unterschreiten zwei Einzugspunkte diesen Abstand (relativ), werden sie auseinandergeschoben.
const MIN_PAIR_SPREAD_FACTOR: f32 = 0.2;
/// Verschiebung je Punkt beim Auseinanderschieben (relativ zur Distanz).
const PAIR_PUSH_FACTOR: f32 = 0.1;

/// Ersetzt die Ecke `v` durch `2^bevel_number` gerundete Punkte.
///
/// Bei `bevel_number == 0` wird genau `v` zurückgegeben. Degenerierte
/// Ecken (ein Nachbar fällt mit `v` zusammen) liefern ebenfalls nur `v`.
/// Kein erzeugter Punkt liegt weiter als `distance` von `v` entfernt.
pub fn expand_corner(a: Vec3, v: Vec3, b: Vec3, distance: f32, bevel_number: u32) -> Vec<Vec3> {
    if bevel_number == 0 {
        return vec![v];
    }

    let bounds = BevelBounds {
        corner: v,
        distance,
        target_depth: bevel_number,
    };
    let mut out = Vec::with_capacity(1usize << bevel_number.min(16));
    if !expand_recursive(a, v, b, distance, 1, &bounds, &mut out) {
        log::debug!("Bevel an degenerierter Ecke {:?} übersprungen", v);
        return vec![v];
    }
    out
}

/// Feste Rahmendaten einer Eckenrundung über alle Rekursionsebenen.
struct BevelBounds {
    /// Ursprüngliche, scharfe Ecke
    corner: Vec3,
    /// Maximaler Abstand eines Ausgabepunkts zur Ecke
    distance: f32,
    target_depth: u32,
}

impl BevelBounds {
    /// Einzug für die nächste Ebene an `local_corner`: halbiert, höchstens
    /// die Hälfte des Restabstands bis `distance`.
    fn next_distance(&self, current: f32, local_corner: Vec3) -> f32 {
        let remaining = self.distance - local_corner.distance(self.corner);
        (current * 0.5).min(remaining * 0.5).max(0.0)
    }
}

/// Rekursionsschritt. Liefert `false`, sobald eine Ecke degeneriert ist
/// oder kein Einzug mehr übrig bleibt.
///
/// `inset_pair` bleibt innerhalb von `distance` um die lokale Ecke, damit
/// hält die Restabstand-Grenze jeden Punkt im Radius um die Ursprungsecke.
fn expand_recursive(
    a: Vec3,
    v: Vec3,
    b: Vec3,
    distance: f32,
    depth: u32,
    bounds: &BevelBounds,
    out: &mut Vec<Vec3>,
) -> bool {
    if distance <= 0.0 {
        return false;
    }
    let Some((v1, v2)) = inset_pair(a, v, b, distance) else {
        return false;
    };

    if depth >= bounds.target_depth {
        out.push(v1);
        out.push(v2);
        return true;
    }

    expand_recursive(a, v1, v2, bounds.next_distance(distance, v1), depth + 1, bounds, out)
        && expand_recursive(v1, v2, b, bounds.next_distance(distance, v2), depth + 1, bounds, out)
}

/// Berechnet die beiden winkelangepassten Einzugspunkte an der Ecke `v`.
///
/// Der Einzug skaliert mit `sin(θ/2)`: spitze Ecken werden weniger weit
/// eingezogen, mindestens aber um `distance * 0.1`.
pub fn inset_pair(a: Vec3, v: Vec3, b: Vec3, distance: f32) -> Option<(Vec3, Vec3)> {
    let dir1 = (a - v).try_normalize()?;
    let dir2 = (b - v).try_normalize()?;

    let theta = dir1.dot(dir2).clamp(-1.0, 1.0).acos();
    let adjusted = (distance * (theta * 0.5).sin()).max(distance * MIN_INSET_FACTOR);

    let mut v1 = v + dir1 * adjusted;
    let mut v2 = v + dir2 * adjusted;

    if v1.distance(v2) < distance * MIN_PAIR_SPREAD_FACTOR {
        // Bei θ == 0 fallen beide Punkte zusammen, dann gibt es keine Richtung
        if let Some(spread) = (v2 - v1).try_normalize() {
            v1 -= spread * distance * PAIR_PUSH_FACTOR;
            v2 += spread * distance * PAIR_PUSH_FACTOR;
        }
    }

    Some((v1, v2))
}
