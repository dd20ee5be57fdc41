//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ControlPointId;

/// Selektiert einen Kontrollpunkt und lädt ihn ins Farbpanel.
pub fn select_point(state: &mut AppState, point: ControlPointId) {
    use_cases::selection::select_point(state, point);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
