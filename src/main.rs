//! Gradient Mesh Editor.
//!
//! Interaktiver Editor für Farbverlaufs-Meshes: Kontrollpunkte ziehen,
//! Tangenten-Handles formen und gegenläufige Handles aneinander binden.

use eframe::egui;
use gradient_mesh_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Gradient Mesh Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Gradient Mesh Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Gradient Mesh Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let state = match AppState::from_options(editor_options) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Mesh aus Optionen nicht aufbaubar, verwende Standardwerte: {:#}", e);
                AppState::from_options(EditorOptions::default())?
            }
        };

        Ok(Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::FrameTick { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &mut self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_color_panel(ctx, &mut self.state));
        events.extend(ui::show_options_panel(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let scene = self.controller.build_render_scene(&self.state);

                events.extend(self.input.collect_viewport_events(ui, &response, &scene));

                ui::paint_mesh_overlay(&ui.painter_at(rect), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        let mesh_changed = self.state.take_mesh_dirty();
        if has_meaningful_events || mesh_changed || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }

        // Entprellten Resize rechtzeitig übernehmen
        if let Some(remaining) = self.state.view.resize_debouncer.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
