//! Handler für Punkt- und Tangenten-Gesten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ControlPointId, TangentId};

/// Startet einen Punkt-Drag.
pub fn begin_point_drag(state: &mut AppState, point: ControlPointId) {
    use_cases::drag::begin_point_drag(state, point);
}

/// Führt einen Punkt-Drag fort.
pub fn update_point_drag(state: &mut AppState, target: glam::Vec2, shift: bool, ctrl: bool) {
    use_cases::drag::update_point_drag(state, target, shift, ctrl);
}

/// Startet einen Tangenten-Drag.
pub fn begin_tangent_drag(state: &mut AppState, tangent: TangentId) {
    use_cases::drag::begin_tangent_drag(state, tangent);
}

/// Führt einen Tangenten-Drag fort.
pub fn update_tangent_drag(state: &mut AppState, raw: glam::Vec2) {
    use_cases::drag::update_tangent_drag(state, raw);
}

/// Beendet die laufende Geste.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
