//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{EditorOptions, RenderScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::SelectPoint { point } => handlers::selection::select_point(state, point),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Gesten ===
            AppCommand::BeginPointDrag { point } => {
                handlers::gesture::begin_point_drag(state, point)
            }
            AppCommand::UpdatePointDrag {
                target,
                shift,
                ctrl,
            } => handlers::gesture::update_point_drag(state, target, shift, ctrl),
            AppCommand::BeginTangentDrag { tangent } => {
                handlers::gesture::begin_tangent_drag(state, tangent)
            }
            AppCommand::UpdateTangentDrag { raw } => {
                handlers::gesture::update_tangent_drag(state, raw)
            }
            AppCommand::EndDrag => handlers::gesture::end_drag(state),

            // === View ===
            AppCommand::ToggleEditing => handlers::view::toggle_editing(state),
            AppCommand::SetViewportRect { rect } => handlers::view::set_viewport_rect(state, rect),
            AppCommand::ScheduleViewportResize { rect, at } => {
                handlers::view::schedule_resize(state, rect, at)
            }
            AppCommand::ApplyPendingViewport { now } => handlers::view::apply_pending(state, now),

            // === Handles ===
            AppCommand::ResetSelectedTangents { axis } => handlers::handles::reset(state, axis),
            AppCommand::ToggleSelectedHandles { axis } => {
                handlers::handles::toggle_visibility(state, axis)
            }
            AppCommand::ToggleDraggedTangentBinding => handlers::handles::toggle_binding(state),

            // === Farbe & Mesh ===
            AppCommand::SetSelectedColor { color } => {
                handlers::mesh::set_selected_color(state, color)
            }
            AppCommand::RebuildMesh { division_count } => {
                handlers::mesh::rebuild(state, division_count)?
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::ResetOptions => handlers::options::reset(state),
            AppCommand::SaveOptions => {
                handlers::options::save(state, &EditorOptions::config_path())?
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
