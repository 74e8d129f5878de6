//! Zentrale Konfiguration für den Pipe-Router.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::input_snapshot::Key;
use serde::{Deserialize, Serialize};

// ── Rohr-Geometrie ──────────────────────────────────────────────────

/// Vertices pro Ring.
pub const TUBE_SEGMENTS: u32 = 32;
/// Standard-Rohrradius in Welteinheiten.
pub const DEFAULT_TUBE_RADIUS: f32 = 0.2;
/// Standard-Einzugsdistanz der Eckenrundung.
pub const DEFAULT_BEVEL_RADIUS: f32 = 0.5;
/// Standard-Farbe neuer Rohre (RGBA: Kupfer).
pub const TUBE_COLOR: [f32; 4] = [0.8, 0.5, 0.3, 1.0];

// ── Bevel ───────────────────────────────────────────────────────────

/// Obergrenze der Bevel-Tiefe beim Scroll-Editieren.
pub const MAX_BEVEL_NUMBER: u32 = 4;
/// Bevel-Tiefe, die der Ausgangspunkt eines Extrude erhält.
pub const EXTRUDE_BEVEL_NUMBER: u32 = 3;

// ── Picking & Scroll ────────────────────────────────────────────────

/// Pick-Schwelle in Pixeln pro Radius-Einheit des Kontrollpunkts.
pub const PICK_RADIUS_FACTOR: f32 = 100.0;
/// Radius-Änderung pro Scroll-Einheit.
pub const RADIUS_SCROLL_STEP: f32 = 0.01;
/// Bevel-Radius-Änderung pro Scroll-Einheit.
pub const BEVEL_RADIUS_SCROLL_STEP: f32 = 0.05;

/// Tastenbelegung der Editier-Aktionen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyBindings {
    /// Extrudieren (beim Loslassen)
    pub extrude: Key,
    /// Löschen (beim Drücken)
    pub delete: Key,
    /// Achsen-Lock während des Ziehens (gehalten)
    pub axis_lock: Key,
    /// Scroll ändert Bevel-Tiefe (gehalten)
    pub bevel_number_modifier: Key,
    /// Scroll ändert Rohrradius (gehalten)
    pub radius_modifier: Key,
    /// Scroll ändert Bevel-Radius (gehalten)
    pub bevel_radius_modifier: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            extrude: Key::E,
            delete: Key::X,
            axis_lock: Key::LeftShift,
            bevel_number_modifier: Key::B,
            radius_modifier: Key::R,
            bevel_radius_modifier: Key::T,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pipe_router.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Rohre ───────────────────────────────────────────────────
    /// Vertices pro Ring
    pub tube_segments: u32,
    /// Radius neuer Rohre und Kontrollpunkte
    pub default_tube_radius: f32,
    /// Bevel-Radius neuer Kontrollpunkte
    pub default_bevel_radius: f32,
    /// Farbe neuer Rohre (RGBA)
    pub tube_color: [f32; 4],

    // ── Bevel ───────────────────────────────────────────────────
    /// Obergrenze der Bevel-Tiefe
    #[serde(default = "default_max_bevel_number")]
    pub max_bevel_number: u32,
    /// Bevel-Tiefe am Ausgangspunkt eines Extrude
    #[serde(default = "default_extrude_bevel_number")]
    pub extrude_bevel_number: u32,

    // ── Picking & Scroll ────────────────────────────────────────
    /// Pick-Schwelle in Pixeln pro Radius-Einheit
    pub pick_radius_factor: f32,
    /// Radius-Änderung pro Scroll-Einheit
    pub radius_scroll_step: f32,
    /// Bevel-Radius-Änderung pro Scroll-Einheit
    pub bevel_radius_scroll_step: f32,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Tastenbelegung
    #[serde(default)]
    pub key_bindings: KeyBindings,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tube_segments: TUBE_SEGMENTS,
            default_tube_radius: DEFAULT_TUBE_RADIUS,
            default_bevel_radius: DEFAULT_BEVEL_RADIUS,
            tube_color: TUBE_COLOR,

            max_bevel_number: MAX_BEVEL_NUMBER,
            extrude_bevel_number: EXTRUDE_BEVEL_NUMBER,

            pick_radius_factor: PICK_RADIUS_FACTOR,
            radius_scroll_step: RADIUS_SCROLL_STEP,
            bevel_radius_scroll_step: BEVEL_RADIUS_SCROLL_STEP,

            key_bindings: KeyBindings::default(),
        }
    }
}

/// Serde-Default für `max_bevel_number` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_max_bevel_number() -> u32 {
    MAX_BEVEL_NUMBER
}

/// Serde-Default für `extrude_bevel_number`.
fn default_extrude_bevel_number() -> u32 {
    EXTRUDE_BEVEL_NUMBER
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pipe_router"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pipe_router.toml")
    }

    /// Pick-Schwelle in Pixeln für einen Kontrollpunkt mit Radius `radius`.
    pub fn pick_threshold_px(&self, radius: f32) -> f32 {
        radius.abs() * self.pick_radius_factor
    }
}
