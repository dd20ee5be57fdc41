//! Handler für Viewport und Editier-Modus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ViewportRect;
use std::time::Instant;

/// Setzt das Viewport-Rechteck sofort.
pub fn set_viewport_rect(state: &mut AppState, rect: ViewportRect) {
    use_cases::viewport::set_viewport_rect(state, rect);
}

/// Merkt ein Viewport-Rechteck entprellt vor.
pub fn schedule_resize(state: &mut AppState, rect: ViewportRect, at: Instant) {
    use_cases::viewport::schedule_viewport_resize(state, rect, at);
}

/// Übernimmt ein fälliges Viewport-Rechteck.
pub fn apply_pending(state: &mut AppState, now: Instant) {
    use_cases::viewport::apply_pending_viewport(state, now);
}

/// Schaltet den Editier-Modus um.
pub fn toggle_editing(state: &mut AppState) {
    use_cases::viewport::toggle_editing(state);
}
