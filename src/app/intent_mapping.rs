//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::Gesture;
use super::{AppCommand, AppIntent, AppState};
use crate::core::TangentAxis;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressedOnPoint { point } => vec![
            AppCommand::SelectPoint { point },
            AppCommand::BeginPointDrag { point },
        ],
        AppIntent::PointerPressedOnTangent { tangent } => {
            if state.selection.selected_point.is_some() {
                vec![AppCommand::BeginTangentDrag { tangent }]
            } else {
                log::debug!("Tangente ohne selektierten Punkt angeklickt");
                vec![]
            }
        }
        AppIntent::PointerMoved {
            client,
            shift,
            ctrl,
        } => map_pointer_move(state, client, shift, ctrl),
        AppIntent::PointerReleased { on_background } => {
            let mut commands = vec![AppCommand::EndDrag];
            if on_background && state.selection.selected_point.is_some() {
                commands.push(AppCommand::ClearSelection);
            }
            commands
        }
        AppIntent::PointerCancelled => vec![AppCommand::EndDrag],
        AppIntent::TouchEnded => vec![],
        AppIntent::BackgroundClicked | AppIntent::EditingToggleRequested => {
            vec![AppCommand::ToggleEditing]
        }

        AppIntent::ViewportMeasured { rect } => vec![AppCommand::SetViewportRect { rect }],
        AppIntent::ViewportResized { rect, at } => {
            vec![AppCommand::ScheduleViewportResize { rect, at }]
        }
        AppIntent::FrameTick { now } => {
            if state.view.resize_debouncer.is_pending() {
                vec![AppCommand::ApplyPendingViewport { now }]
            } else {
                vec![]
            }
        }

        AppIntent::ResetSelectedTangentsRequested => {
            vec![AppCommand::ResetSelectedTangents { axis: None }]
        }
        AppIntent::ToggleHorizontalHandlesRequested => vec![AppCommand::ToggleSelectedHandles {
            axis: TangentAxis::Horizontal,
        }],
        AppIntent::ToggleVerticalHandlesRequested => vec![AppCommand::ToggleSelectedHandles {
            axis: TangentAxis::Vertical,
        }],
        AppIntent::ResetHorizontalHandlesRequested => vec![AppCommand::ResetSelectedTangents {
            axis: Some(TangentAxis::Horizontal),
        }],
        AppIntent::ResetVerticalHandlesRequested => vec![AppCommand::ResetSelectedTangents {
            axis: Some(TangentAxis::Vertical),
        }],
        AppIntent::ToggleTangentBindingRequested => {
            vec![AppCommand::ToggleDraggedTangentBinding]
        }

        AppIntent::ColorCommitted { color } => vec![AppCommand::SetSelectedColor { color }],
        AppIntent::ClearSelectionRequested => {
            vec![AppCommand::EndDrag, AppCommand::ClearSelection]
        }
        AppIntent::MeshRebuildRequested { division_count } => {
            vec![AppCommand::RebuildMesh { division_count }]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::OptionsSaveRequested => {
            if state.options_dirty {
                vec![AppCommand::SaveOptions]
            } else {
                vec![]
            }
        }
    }
}

/// Pointer-Bewegung je nach laufender Geste in Mesh- bzw. Pixel-Koordinaten auflösen.
fn map_pointer_move(
    state: &AppState,
    client: glam::Vec2,
    shift: bool,
    ctrl: bool,
) -> Vec<AppCommand> {
    let viewport = &state.view.viewport;

    match state.interaction.gesture {
        Gesture::Idle => vec![],
        Gesture::DraggingPoint { .. } => match viewport.client_to_mesh(client) {
            Some(target) => vec![AppCommand::UpdatePointDrag {
                target,
                shift,
                ctrl,
            }],
            None => {
                log::warn!("Pointer-Bewegung ignoriert: Viewport {:?} unbrauchbar", viewport);
                vec![]
            }
        },
        Gesture::DraggingTangent { .. } => {
            if !viewport.is_usable() {
                log::warn!("Pointer-Bewegung ignoriert: Viewport {:?} unbrauchbar", viewport);
                return vec![];
            }
            let Some(point) = state.selected_point() else {
                return vec![];
            };
            let raw = viewport.client_to_local(client) - viewport.mesh_to_local(point.position());
            vec![AppCommand::UpdateTangentDrag { raw }]
        }
    }
}
