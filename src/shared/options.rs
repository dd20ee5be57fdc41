//! Zentrale Konfiguration für den Gradient-Mesh-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Mesh ────────────────────────────────────────────────────────────

/// Standard-Unterteilungsanzahl beim Start.
pub const DEFAULT_DIVISION_COUNT: u32 = 4;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pixel pro Tangenten-Einheit bei der Screen-Projektion.
pub const TANGENT_SCALE_PX: f32 = 100.0;
/// Minimale Summe |Δx| + |Δy| (Mesh-Koordinaten), ab der ein Punkt-Drag wirkt.
pub const DRAG_JITTER_THRESHOLD: f32 = 0.03;
/// Trailing-Edge-Verzögerung für Viewport-Resizes.
pub const RESIZE_DEBOUNCE_MS: u64 = 500;
/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 10.0;

// ── Handle-Rendering ───────────────────────────────────────────────

/// Radius der Punkt-Handles in Pixeln.
pub const POINT_HANDLE_RADIUS_PX: f32 = 6.0;
/// Radius der Tangenten-Handles in Pixeln.
pub const TANGENT_HANDLE_RADIUS_PX: f32 = 4.0;
/// Outline-Farbe der Punkt-Handles (RGBA: Weiß).
pub const POINT_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Outline-Farbe des aktiven Punkts (RGBA: Gelb).
pub const ACTIVE_POINT_COLOR: [f32; 4] = [1.0, 0.85, 0.0, 1.0];
/// Farbe der Tangenten-Linien und -Handles (RGBA: Hellgrau).
pub const TANGENT_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
/// Farbe gebundener Tangenten (RGBA: Cyan).
pub const BOUND_TANGENT_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe der Gitterlinien (RGBA: halbtransparentes Weiß).
pub const LATTICE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.35];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `gradient_mesh_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Mesh ────────────────────────────────────────────────────
    /// Unterteilungen pro Achse beim Start
    pub division_count: u32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pixel pro Tangenten-Einheit
    pub tangent_scale_px: f32,
    /// Jitter-Schwelle für Punkt-Drags (Mesh-Koordinaten)
    pub drag_jitter_threshold: f32,
    /// Resize-Debounce in Millisekunden
    pub resize_debounce_ms: u64,
    /// Gezogene Punkte auf das Einheitsquadrat begrenzen
    pub clamp_points_to_mesh: bool,
    /// Pick-Radius für Handles in Screen-Pixeln
    pub pick_radius_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Punkt-Handles
    pub point_handle_radius_px: f32,
    /// Radius der Tangenten-Handles
    pub tangent_handle_radius_px: f32,
    /// Outline-Farbe normaler Punkte
    pub point_outline_color: [f32; 4],
    /// Outline-Farbe des aktiven Punkts
    pub active_point_color: [f32; 4],
    /// Farbe ungebundener Tangenten
    pub tangent_color: [f32; 4],
    /// Farbe gebundener Tangenten
    pub bound_tangent_color: [f32; 4],
    /// Farbe der Gitterlinien
    pub lattice_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            division_count: DEFAULT_DIVISION_COUNT,

            tangent_scale_px: TANGENT_SCALE_PX,
            drag_jitter_threshold: DRAG_JITTER_THRESHOLD,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            clamp_points_to_mesh: true,
            pick_radius_px: PICK_RADIUS_PX,

            point_handle_radius_px: POINT_HANDLE_RADIUS_PX,
            tangent_handle_radius_px: TANGENT_HANDLE_RADIUS_PX,
            point_outline_color: POINT_OUTLINE_COLOR,
            active_point_color: ACTIVE_POINT_COLOR,
            tangent_color: TANGENT_COLOR,
            bound_tangent_color: BOUND_TANGENT_COLOR,
            lattice_color: LATTICE_COLOR,
        }
    }
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
            .unwrap_or_else(|_| std::path::PathBuf::from("gradient_mesh_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("gradient_mesh_editor.toml")
    }

    /// Resize-Debounce als `Duration`.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
