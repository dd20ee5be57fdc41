//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Ob eine Handle-Operation tatsächlich wirkt (Editier-Modus, Selektion),
//! entscheidet der Controller.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_r, key_x, key_y, key_b, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::X),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::B),
            i.key_pressed(egui::Key::Escape),
        )
    });

    // Ctrl/Cmd-Kombinationen gehören dem Host, nicht dem Mesh
    if modifiers.command {
        return events;
    }

    if key_r {
        events.push(AppIntent::ResetSelectedTangentsRequested);
    }

    if key_x {
        events.push(if modifiers.shift {
            AppIntent::ResetHorizontalHandlesRequested
        } else {
            AppIntent::ToggleHorizontalHandlesRequested
        });
    }

    if key_y {
        events.push(if modifiers.shift {
            AppIntent::ResetVerticalHandlesRequested
        } else {
            AppIntent::ToggleVerticalHandlesRequested
        });
    }

    if key_b {
        events.push(AppIntent::ToggleTangentBindingRequested);
    }

    if key_escape {
        events.push(AppIntent::ClearSelectionRequested);
    }

    events
}
