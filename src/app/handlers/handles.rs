//! Handler für Handle-Operationen am selektierten Punkt.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::TangentAxis;

/// Setzt Handles auf Standardlänge zurück.
pub fn reset(state: &mut AppState, axis: Option<TangentAxis>) {
    use_cases::handles::reset_selected_tangents(state, axis);
}

/// Blendet die Handles einer Achse ein oder aus.
pub fn toggle_visibility(state: &mut AppState, axis: TangentAxis) {
    use_cases::handles::toggle_selected_handles(state, axis);
}

/// Schaltet die Bindung der gezogenen Tangente um.
pub fn toggle_binding(state: &mut AppState) {
    if let Some(bound) = use_cases::handles::toggle_dragged_tangent_binding(state) {
        log::debug!("Tangenten-Bindung: {}", bound);
    }
}
