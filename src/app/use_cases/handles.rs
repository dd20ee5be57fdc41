//! Use-Case-Funktionen für Handle-Operationen am selektierten Punkt.
//!
//! Alle Operationen wirken nur im Editier-Modus und nur mit selektiertem Punkt.

use crate::app::AppState;
use crate::core::{ControlPointId, TangentAxis};

/// Selektierter Punkt, falls Handle-Operationen gerade erlaubt sind.
fn editable_point(state: &AppState) -> Option<ControlPointId> {
    if !state.view.editing {
        log::debug!("Handle-Operation ausserhalb des Editier-Modus ignoriert");
        return None;
    }
    let point = state.selection.selected_point;
    if point.is_none() {
        log::debug!("Handle-Operation ohne Selektion ignoriert");
    }
    point
}

/// Setzt die Handles des selektierten Punkts auf Standardlänge (`axis = None`: alle).
pub fn reset_selected_tangents(state: &mut AppState, axis: Option<TangentAxis>) -> bool {
    let Some(point) = editable_point(state) else {
        return false;
    };
    state
        .mesh_mut()
        .is_some_and(|mesh| mesh.reset_tangents(point, axis))
}

/// Schaltet die Sichtbarkeit einer Handle-Achse des selektierten Punkts um.
pub fn toggle_selected_handles(state: &mut AppState, axis: TangentAxis) -> Option<bool> {
    let point = editable_point(state)?;
    state.mesh_mut()?.toggle_handle_visibility(point, axis)
}

/// Schaltet die Bindung der gerade gezogenen Tangente um.
pub fn toggle_dragged_tangent_binding(state: &mut AppState) -> Option<bool> {
    editable_point(state)?;
    let Some(tangent) = state.interaction.dragged_tangent() else {
        log::debug!("Bindung nur waehrend eines Tangenten-Drags umschaltbar");
        return None;
    };
    state.mesh_mut()?.toggle_bind_tangents(tangent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Gesture;
    use crate::core::TangentSlot;
    use glam::Vec2;

    fn editing_state_with_selection() -> (AppState, ControlPointId) {
        let mut state = AppState::with_mesh(2).expect("Mesh gueltig");
        let point = state
            .mesh
            .as_ref()
            .and_then(|mesh| mesh.point_id_at(1, 1))
            .expect("Punkt vorhanden");
        state.selection.selected_point = Some(point);
        state.view.editing = true;
        (state, point)
    }

    #[test]
    fn operations_require_editing_mode() {
        let (mut state, point) = editing_state_with_selection();
        state.view.editing = false;

        assert!(!reset_selected_tangents(&mut state, None));
        assert!(toggle_selected_handles(&mut state, TangentAxis::Horizontal).is_none());

        let mesh = state.mesh.as_ref().expect("Mesh vorhanden");
        assert!(mesh.tangents_of(point).all(|t| t.is_visible()));
    }

    #[test]
    fn reset_vertical_only_touches_vertical_handles() {
        let (mut state, point) = editing_state_with_selection();
        let cp = state
            .mesh
            .as_ref()
            .and_then(|mesh| mesh.point(point))
            .cloned()
            .expect("Punkt vorhanden");
        if let Some(mesh) = state.mesh_mut() {
            for id in cp.tangent_ids() {
                mesh.set_tangent(*id, Vec2::new(0.9, 0.9));
            }
        }

        assert!(reset_selected_tangents(&mut state, Some(TangentAxis::Vertical)));

        let mesh = state.mesh.as_ref().expect("Mesh vorhanden");
        let vp = mesh
            .tangent(cp.tangent(TangentSlot::VerticalPositive))
            .expect("VP");
        let hp = mesh
            .tangent(cp.tangent(TangentSlot::HorizontalPositive))
            .expect("HP");
        assert_eq!(vp.offset(), Vec2::new(0.0, 0.5));
        assert_eq!(hp.offset(), Vec2::new(0.9, 0.9));
    }

    #[test]
    fn binding_toggle_requires_tangent_drag() {
        let (mut state, point) = editing_state_with_selection();
        assert!(toggle_dragged_tangent_binding(&mut state).is_none());

        let tangent = state
            .mesh
            .as_ref()
            .and_then(|mesh| mesh.point(point))
            .map(|cp| cp.tangent(TangentSlot::HorizontalNegative))
            .expect("Tangente vorhanden");
        state.interaction.gesture = Gesture::DraggingTangent { tangent };

        assert_eq!(toggle_dragged_tangent_binding(&mut state), Some(true));
        assert_eq!(toggle_dragged_tangent_binding(&mut state), Some(false));
    }
}
