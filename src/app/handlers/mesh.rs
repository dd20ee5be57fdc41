//! Handler für Mesh-Aufbau und Punktfarben.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Rgb;

/// Baut das Mesh neu auf und propagiert Fehler an den Aufrufer.
pub fn rebuild(state: &mut AppState, division_count: u32) -> anyhow::Result<()> {
    use_cases::mesh::rebuild_mesh(state, division_count)
}

/// Übernimmt eine Farbe für den selektierten Punkt.
pub fn set_selected_color(state: &mut AppState, color: Rgb) {
    use_cases::mesh::set_selected_color(state, color);
}
