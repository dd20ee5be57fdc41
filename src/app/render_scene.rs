//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        mesh: state.mesh.clone(),
        viewport: state.view.viewport,
        selected_point: state.selection.selected_point,
        dragged_tangent: state.interaction.dragged_tangent(),
        editing: state.view.editing,
        options: state.options.clone(),
    }
}
