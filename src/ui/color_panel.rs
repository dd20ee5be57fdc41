//! Farbpanel für den selektierten Kontrollpunkt.
//!
//! Sichtbar nur im Editier-Modus und mit geladenem Punkt. Änderungen werden
//! als `ColorCommitted` an den Controller gemeldet.

use crate::app::{AppIntent, AppState};
use crate::core::Rgb;

/// Zeigt das Farbpanel und gibt erzeugte Events zurück.
pub fn show_color_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.view.editing {
        return events;
    }
    let Some(point) = state.ui.color_panel.point else {
        return events;
    };

    egui::Window::new("Farbe")
        .resizable(false)
        .collapsible(true)
        .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
        .show(ctx, |ui| {
            ui.label(point.to_string());

            let mut rgb = state.ui.color_panel.color.to_array();
            if ui.color_edit_button_rgb(&mut rgb).changed() {
                let color = Rgb::from_array(rgb);
                state.ui.color_panel.color = color;
                events.push(AppIntent::ColorCommitted { color });
            }

            ui.separator();
            ui.label("Handles");
            ui.horizontal(|ui| {
                if ui.button("Zuruecksetzen (R)").clicked() {
                    events.push(AppIntent::ResetSelectedTangentsRequested);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("X ein/aus").clicked() {
                    events.push(AppIntent::ToggleHorizontalHandlesRequested);
                }
                if ui.button("X zuruecksetzen").clicked() {
                    events.push(AppIntent::ResetHorizontalHandlesRequested);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Y ein/aus").clicked() {
                    events.push(AppIntent::ToggleVerticalHandlesRequested);
                }
                if ui.button("Y zuruecksetzen").clicked() {
                    events.push(AppIntent::ResetVerticalHandlesRequested);
                }
            });
            ui.small("B waehrend eines Tangenten-Drags: Bindung umschalten");
        });

    events
}
