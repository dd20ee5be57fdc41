//! Use-Case-Funktionen für die Punkt-Selektion.

use crate::app::AppState;
use crate::core::ControlPointId;

/// Selektiert einen Kontrollpunkt.
///
/// Das Aktiv-Flag wandert vom bisherigen zum neuen Punkt, das Farbpanel
/// übernimmt dessen Farbe.
pub fn select_point(state: &mut AppState, point: ControlPointId) {
    let Some(mesh) = state.mesh.as_ref() else {
        log::debug!("Kein Mesh vorhanden, Selektion von {} ignoriert", point);
        return;
    };
    if mesh.point(point).is_none() {
        log::warn!("Unbekannter Kontrollpunkt {}", point);
        return;
    }

    let previous = state.selection.selected_point;
    if let Some(mesh) = state.mesh_mut() {
        if let Some(previous) = previous {
            mesh.set_point_active(previous, false);
        }
        mesh.set_point_active(point, true);
    }
    state.selection.selected_point = Some(point);

    if let Some(cp) = state.mesh.as_ref().and_then(|mesh| mesh.point(point)) {
        state.ui.color_panel.show_point(cp);
    }
    log::debug!("Kontrollpunkt selektiert: {}", point);
}

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    let Some(previous) = state.selection.selected_point.take() else {
        return;
    };
    if let Some(mesh) = state.mesh_mut() {
        mesh.set_point_active(previous, false);
    }
    state.ui.color_panel.clear();
    log::debug!("Selektion aufgehoben: {}", previous);
}
