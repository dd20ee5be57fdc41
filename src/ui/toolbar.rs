//! Toolbar für Mesh-Aufbau und Editier-Modus.

use crate::app::{AppIntent, AppState};
use crate::core::MAX_DIVISION_COUNT;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Unterteilungen:");
            ui.add(
                egui::DragValue::new(&mut state.ui.rebuild_division_count)
                    .range(1..=MAX_DIVISION_COUNT),
            );
            if ui.button("Mesh neu aufbauen").clicked() {
                events.push(AppIntent::MeshRebuildRequested {
                    division_count: state.ui.rebuild_division_count,
                });
            }

            ui.separator();

            let label = if state.view.editing {
                "Bearbeiten beenden"
            } else {
                "Bearbeiten"
            };
            if ui.selectable_label(state.view.editing, label).clicked() {
                events.push(AppIntent::EditingToggleRequested);
            }

            ui.separator();

            ui.toggle_value(&mut state.ui.show_options, "Optionen");
        });
    });

    events
}
