//! Use-Case-Funktionen für Mesh-Aufbau und Punktfarben.

use crate::app::AppState;
use crate::core::{Mesh, Rgb};
use std::sync::Arc;

/// Ersetzt das Mesh durch ein neues mit `division_count` Unterteilungen.
///
/// Bei ungültiger Anzahl bleibt das aktuelle Mesh unverändert. Selektion,
/// Geste und Farbpanel werden zurückgesetzt, da alte IDs nicht mehr gelten.
/// Die neue Anzahl wird als Start-Unterteilung in die Optionen übernommen.
pub fn rebuild_mesh(state: &mut AppState, division_count: u32) -> anyhow::Result<()> {
    let mesh = Mesh::new(division_count)?;

    if state.options.division_count != division_count {
        state.options.division_count = division_count;
        state.options_dirty = true;
    }

    state.mesh = Some(Arc::new(mesh));
    state.selection.selected_point = None;
    state.interaction.reset();
    state.ui.color_panel.clear();
    state.view.mesh_dirty = true;
    Ok(())
}

/// Setzt die Farbe des selektierten Punkts. Ohne Selektion passiert nichts.
pub fn set_selected_color(state: &mut AppState, color: Rgb) -> bool {
    let Some(point) = state.selection.selected_point else {
        log::debug!("Farbe ohne Selektion verworfen");
        return false;
    };
    let applied = state
        .mesh_mut()
        .is_some_and(|mesh| mesh.set_point_color(point, color));
    if applied {
        state.ui.color_panel.color = color;
    }
    applied
}
