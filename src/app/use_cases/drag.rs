//! Use-Case-Funktionen für Punkt- und Tangenten-Drags.
//!
//! Die Geste selbst lebt in `InteractionState`; diese Funktionen starten,
//! führen fort und beenden sie und schreiben die Ergebnisse ins Mesh.

use crate::app::state::Gesture;
use crate::app::AppState;
use crate::core::{ControlPointId, TangentId};
use glam::Vec2;

/// Löst die Zielposition eines Punkt-Drags auf.
///
/// - `shift`: sperrt die Achse mit der kleineren Abweichung vom Anker.
/// - Bewegung nur wenn `|Δx| + |Δy| > threshold` oder `ctrl`; sonst Anker.
/// - `clamp`: Ergebnis auf das Einheitsquadrat begrenzen.
///
/// Die Abweichungen werden vor der Achsensperre gemessen.
pub fn resolve_drag_position(
    anchor: Vec2,
    target: Vec2,
    shift: bool,
    ctrl: bool,
    threshold: f32,
    clamp: bool,
) -> Vec2 {
    let delta = (anchor - target).abs();
    let mut resolved = target;

    if shift {
        if delta.x > delta.y {
            resolved.y = anchor.y;
        } else {
            resolved.x = anchor.x;
        }
    }

    if !(delta.x + delta.y > threshold || ctrl) {
        resolved = anchor;
    }

    if clamp {
        resolved.clamp(Vec2::ZERO, Vec2::ONE)
    } else {
        resolved
    }
}

/// Startet einen Punkt-Drag mit der aktuellen Position als Anker.
pub fn begin_point_drag(state: &mut AppState, point: ControlPointId) {
    let Some(anchor) = state
        .mesh
        .as_ref()
        .and_then(|mesh| mesh.point(point))
        .map(|cp| cp.position())
    else {
        log::warn!("Punkt-Drag ohne gueltigen Punkt {}", point);
        return;
    };
    state.interaction.gesture = Gesture::DraggingPoint { point, anchor };
    log::debug!("Punkt-Drag gestartet: {} bei {:?}", point, anchor);
}

/// Führt einen laufenden Punkt-Drag auf eine Ziel-Mesh-Position fort.
pub fn update_point_drag(state: &mut AppState, target: Vec2, shift: bool, ctrl: bool) {
    let Some((point, anchor)) = state.interaction.dragged_point() else {
        return;
    };
    let resolved = resolve_drag_position(
        anchor,
        target,
        shift,
        ctrl,
        state.options.drag_jitter_threshold,
        state.options.clamp_points_to_mesh,
    );
    if let Some(mesh) = state.mesh_mut() {
        mesh.set_point_position(point, resolved);
    }
}

/// Startet einen Tangenten-Drag. Ohne selektierten Punkt passiert nichts.
pub fn begin_tangent_drag(state: &mut AppState, tangent: TangentId) {
    if state.selection.selected_point.is_none() {
        log::debug!("Tangenten-Drag ohne Selektion ignoriert");
        return;
    }
    let known = state
        .mesh
        .as_ref()
        .is_some_and(|mesh| mesh.tangent(tangent).is_some());
    if !known {
        log::warn!("Unbekannte Tangente {:?}", tangent);
        return;
    }
    state.interaction.gesture = Gesture::DraggingTangent { tangent };
    log::debug!("Tangenten-Drag gestartet: {:?}", tangent);
}

/// Führt einen laufenden Tangenten-Drag mit roher Pixel-Verschiebung fort.
pub fn update_tangent_drag(state: &mut AppState, raw: Vec2) {
    let Some(tangent) = state.interaction.dragged_tangent() else {
        return;
    };
    let scale = state.options.tangent_scale_px;
    if let Some(mesh) = state.mesh_mut() {
        mesh.move_tangent(tangent, raw, scale);
    }
}

/// Beendet jede laufende Geste. Die Selektion bleibt erhalten.
pub fn end_drag(state: &mut AppState) {
    if !state.interaction.is_idle() {
        log::debug!("Geste beendet: {:?}", state.interaction.gesture);
    }
    state.interaction.reset();
}
