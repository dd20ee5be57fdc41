//! Optionen-Fenster für Interaktion und Handle-Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt das Optionen-Fenster und gibt erzeugte Events zurück.
///
/// Änderungen wirken sofort; gespeichert wird, sobald keine Maustaste mehr
/// gedrückt ist (Ende eines Drags bzw. nach einem Klick), auch bei
/// geschlossenem Fenster, etwa nach einem Mesh-Neuaufbau.
pub fn show_options_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if state.ui.show_options {
        show_window(ctx, state, &mut events);
    }

    if state.options_dirty && !ctx.input(|i| i.pointer.any_down()) {
        events.push(AppIntent::OptionsSaveRequested);
    }

    events
}

fn show_window(ctx: &egui::Context, state: &mut AppState, events: &mut Vec<AppIntent>) {
    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;
    let mut open = true;

    egui::Window::new("Optionen")
        .open(&mut open)
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            // ── Interaktion ─────────────────────────────────────
            ui.collapsing("Interaktion", |ui| {
                changed |= drag_value(
                    ui,
                    "Tangenten-Skalierung (px):",
                    &mut opts.tangent_scale_px,
                    1.0..=1000.0,
                    1.0,
                );
                changed |= drag_value(
                    ui,
                    "Jitter-Schwelle:",
                    &mut opts.drag_jitter_threshold,
                    0.0..=0.5,
                    0.001,
                );
                changed |= drag_value(
                    ui,
                    "Pick-Radius (px):",
                    &mut opts.pick_radius_px,
                    1.0..=50.0,
                    0.5,
                );
                ui.horizontal(|ui| {
                    ui.label("Resize-Debounce (ms):");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.resize_debounce_ms).range(0..=5000))
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut opts.clamp_points_to_mesh, "Punkte im Mesh halten")
                    .changed();
            });

            // ── Darstellung ─────────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                changed |= drag_value(
                    ui,
                    "Punkt-Radius (px):",
                    &mut opts.point_handle_radius_px,
                    1.0..=30.0,
                    0.5,
                );
                changed |= drag_value(
                    ui,
                    "Tangenten-Radius (px):",
                    &mut opts.tangent_handle_radius_px,
                    1.0..=30.0,
                    0.5,
                );
                changed |= color_edit(ui, "Punkt-Umriss:", &mut opts.point_outline_color);
                changed |= color_edit(ui, "Aktiver Punkt:", &mut opts.active_point_color);
                changed |= color_edit(ui, "Tangente:", &mut opts.tangent_color);
                changed |= color_edit(ui, "Gebundene Tangente:", &mut opts.bound_tangent_color);
                changed |= color_edit(ui, "Gitter:", &mut opts.lattice_color);
            });

            ui.separator();

            if ui.button("Standardwerte").clicked() {
                events.push(AppIntent::ResetOptionsRequested);
            }
        });

    state.ui.show_options = open;

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        let changed = ui.color_edit_button_srgba(&mut c).changed();
        if changed {
            *color = [
                c.r() as f32 / 255.0,
                c.g() as f32 / 255.0,
                c.b() as f32 / 255.0,
                c.a() as f32 / 255.0,
            ];
        }
        changed
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_panel(state: &mut AppState, pointer_down: bool) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        if pointer_down {
            raw_input.events.push(egui::Event::PointerButton {
                pos: egui::pos2(5.0, 5.0),
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            });
        }

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            events = show_options_panel(ctx, state);
        });
        events
    }

    #[test]
    fn dirty_options_are_saved_when_pointer_is_released() {
        let mut state = AppState::new();
        state.options_dirty = true;

        let events = run_panel(&mut state, false);

        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::OptionsSaveRequested)));
    }

    #[test]
    fn no_save_while_pointer_is_held() {
        let mut state = AppState::new();
        state.options_dirty = true;

        let events = run_panel(&mut state, true);

        assert!(events.is_empty());
    }

    #[test]
    fn clean_options_emit_nothing() {
        let mut state = AppState::new();

        let events = run_panel(&mut state, false);

        assert!(events.is_empty());
    }
}
