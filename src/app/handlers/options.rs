//! Handler für Laufzeit-Optionen.
//!
//! Übernehmen und Zurücksetzen wirken nur im Speicher und markieren die
//! Optionen als geändert; geschrieben wird erst per `save`.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Übernimmt neue Optionen.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    sync_debounce(state);
    state.options_dirty = true;
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) {
    apply(state, EditorOptions::default());
}

/// Schreibt geänderte Optionen nach `path`.
///
/// Schlägt das Schreiben fehl, bleiben die Optionen im Speicher aktiv und der
/// Fehler wird zurückgegeben; erneut geschrieben wird erst nach der nächsten Änderung.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    if !state.options_dirty {
        return Ok(());
    }
    state.options_dirty = false;
    state.options.save_to_file(path)
}

fn sync_debounce(state: &mut AppState) {
    let delay = state.options.resize_debounce();
    state.view.resize_debouncer.set_delay(delay);
}
