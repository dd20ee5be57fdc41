//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Gesture};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(mesh) = &state.mesh {
                ui.label(format!(
                    "Unterteilungen: {} | Kontrollpunkte: {} | Tangenten: {}",
                    mesh.division_count(),
                    mesh.point_count(),
                    mesh.tangent_count()
                ));
            } else {
                ui.label("Kein Mesh");
            }

            ui.separator();

            let viewport = &state.view.viewport;
            ui.label(format!(
                "Viewport: {:.0}x{:.0} @ ({:.0}, {:.0})",
                viewport.width, viewport.height, viewport.x, viewport.y
            ));

            ui.separator();

            match state.selected_point() {
                Some(cp) => {
                    let pos = cp.position();
                    ui.label(format!("Selektiert: {} ({:.3}, {:.3})", cp.id(), pos.x, pos.y));
                }
                None => {
                    ui.label("Keine Selektion");
                }
            }

            ui.separator();

            let gesture = match state.interaction.gesture {
                Gesture::Idle => "Idle",
                Gesture::DraggingPoint { .. } => "Punkt-Drag",
                Gesture::DraggingTangent { .. } => "Tangenten-Drag",
            };
            ui.label(gesture);

            if state.view.editing {
                ui.separator();
                ui.label("Editier-Modus");
            }
        });
    });
}
