//! Use-Case-Funktionen für Viewport-Zustand und Editier-Modus.

use crate::app::AppState;
use crate::core::ViewportRect;
use std::time::Instant;

/// Übernimmt ein Viewport-Rechteck sofort und verwirft ein vorgemerktes.
pub fn set_viewport_rect(state: &mut AppState, rect: ViewportRect) {
    if !rect.is_usable() {
        log::warn!("Viewport-Rechteck ohne nutzbare Flaeche: {:?}", rect);
    }
    state.view.viewport = rect;
    state.view.resize_debouncer.cancel();
}

/// Merkt ein Viewport-Rechteck vor; übernommen wird es erst nach der Debounce-Zeit.
pub fn schedule_viewport_resize(state: &mut AppState, rect: ViewportRect, at: Instant) {
    state.view.resize_debouncer.schedule(rect, at);
}

/// Übernimmt ein fälliges Viewport-Rechteck. Gibt `true` zurück, wenn sich etwas geändert hat.
pub fn apply_pending_viewport(state: &mut AppState, now: Instant) -> bool {
    let Some(rect) = state.view.resize_debouncer.poll(now) else {
        return false;
    };
    if !rect.is_usable() {
        log::warn!("Viewport-Rechteck ohne nutzbare Flaeche: {:?}", rect);
    }
    log::debug!("Viewport uebernommen: {:?}", rect);
    state.view.viewport = rect;
    true
}

/// Schaltet den Editier-Modus um.
pub fn toggle_editing(state: &mut AppState) {
    state.view.editing = !state.view.editing;
    log::debug!("Editier-Modus: {}", state.view.editing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn measured_rect_applies_immediately_and_cancels_pending() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        let pending = ViewportRect::new(0.0, 0.0, 100.0, 100.0);
        let measured = ViewportRect::new(0.0, 0.0, 640.0, 480.0);

        schedule_viewport_resize(&mut state, pending, t0);
        set_viewport_rect(&mut state, measured);

        assert_eq!(state.view.viewport, measured);
        assert!(!apply_pending_viewport(&mut state, t0 + Duration::from_secs(1)));
        assert_eq!(state.view.viewport, measured);
    }

    #[test]
    fn toggle_editing_flips_flag() {
        let mut state = AppState::new();
        assert!(!state.view.editing);
        toggle_editing(&mut state);
        assert!(state.view.editing);
        toggle_editing(&mut state);
        assert!(!state.view.editing);
    }
}
