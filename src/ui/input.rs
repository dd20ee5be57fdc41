//! Viewport-Input-Handling: Pointer, Touch, Resize und Keyboard → AppIntent.
//!
//! Trefferprüfung, Overlay und Controller arbeiten alle gegen das gecachte
//! (entprellte) Viewport der RenderScene. Das Live-Rechteck des Panels dient
//! nur der Resize-Erkennung und der Prüfung, ob ein Klick im Container liegt.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{ControlPointId, TangentId, ViewportRect};
use crate::shared::RenderScene;
use glam::Vec2;
use std::time::Instant;

/// Ziel eines Pointer-Down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Punkt-Handle
    Point(ControlPointId),
    /// Tangenten-Handle des selektierten Punkts
    Tangent(TangentId),
    /// Mesh-Hintergrund
    Background,
}

/// Trefferprüfung eines Client-Punkts gegen die sichtbaren Handles.
///
/// Handles sind nur im Editier-Modus sichtbar; Tangenten-Handles nur am
/// selektierten Punkt und mit Vorrang vor Punkt-Handles. Geprüft wird gegen
/// `scene.viewport`, dasselbe Rechteck, gegen das der Controller Bewegungen auflöst.
pub fn hit_test(scene: &RenderScene, client: Vec2) -> PressTarget {
    let Some(mesh) = scene.mesh.as_deref() else {
        return PressTarget::Background;
    };
    let viewport = &scene.viewport;
    if !scene.editing || !viewport.is_usable() {
        return PressTarget::Background;
    }

    let radius = scene.options.pick_radius_px;
    if let Some(point) = scene.selected_point {
        let hit = mesh.pick_tangent(
            point,
            client,
            viewport,
            radius,
            scene.options.tangent_scale_px,
        );
        if let Some(tangent) = hit {
            return PressTarget::Tangent(tangent);
        }
    }

    mesh.pick_point(client, viewport, radius)
        .map_or(PressTarget::Background, PressTarget::Point)
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemessenes Container-Rechteck
    last_rect: Option<ViewportRect>,
    /// Ziel des laufenden Pointer-Down
    press_target: Option<PressTarget>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Pointer-,
    /// Touch-, Resize- und Keyboard-Interaktionen im Mesh-Container.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &RenderScene,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let now = Instant::now();
        let rect = to_viewport_rect(response.rect);

        self.collect_viewport_changes(rect, now, &mut events);
        events.extend(keyboard::collect_keyboard_intents(ui));
        self.collect_pointer_events(ui, response, scene, &rect, &mut events);

        events.push(AppIntent::FrameTick { now });
        events
    }

    // ── Viewport ────────────────────────────────────────────────

    fn collect_viewport_changes(
        &mut self,
        rect: ViewportRect,
        now: Instant,
        events: &mut Vec<AppIntent>,
    ) {
        match self.last_rect {
            None => events.push(AppIntent::ViewportMeasured { rect }),
            Some(last) if last != rect => {
                events.push(AppIntent::ViewportResized { rect, at: now })
            }
            Some(_) => {}
        }
        self.last_rect = Some(rect);
    }

    // ── Pointer ─────────────────────────────────────────────────

    fn collect_pointer_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &RenderScene,
        rect: &ViewportRect,
        events: &mut Vec<AppIntent>,
    ) {
        let (pressed, released, primary_down, pointer_pos, delta, modifiers, touch_ended) =
            ui.input(|i| {
                (
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.pointer.primary_down(),
                    i.pointer.interact_pos(),
                    i.pointer.delta(),
                    i.modifiers,
                    i.events.iter().any(|e| {
                        matches!(
                            e,
                            egui::Event::Touch {
                                phase: egui::TouchPhase::End,
                                ..
                            }
                        )
                    }),
                )
            });
        let pointer = pointer_pos.map(|p| Vec2::new(p.x, p.y));

        if pressed {
            if let Some(client) = pointer.filter(|c| response.hovered() && rect.contains(*c)) {
                let target = hit_test(scene, client);
                match target {
                    PressTarget::Point(point) => {
                        events.push(AppIntent::PointerPressedOnPoint { point })
                    }
                    PressTarget::Tangent(tangent) => {
                        events.push(AppIntent::PointerPressedOnTangent { tangent })
                    }
                    PressTarget::Background => {}
                }
                self.press_target = Some(target);
            }
        }

        // Bewegung wird global ausgewertet, auch außerhalb des Containers
        if delta != egui::Vec2::ZERO {
            if let Some(client) = pointer {
                events.push(AppIntent::PointerMoved {
                    client,
                    shift: modifiers.shift,
                    ctrl: modifiers.ctrl || modifiers.mac_cmd,
                });
            }
        }

        if released {
            let on_background = pointer.is_some_and(|client| {
                rect.contains(client) && hit_test(scene, client) == PressTarget::Background
            });
            events.push(AppIntent::PointerReleased { on_background });

            if on_background
                && self.press_target == Some(PressTarget::Background)
                && response.clicked()
            {
                events.push(AppIntent::BackgroundClicked);
            }
            self.press_target = None;
        } else if self.press_target.is_some() && !primary_down {
            // Release ging verloren (Fokuswechsel, Fenster verlassen)
            events.push(AppIntent::PointerCancelled);
            self.press_target = None;
        }

        if touch_ended {
            events.push(AppIntent::TouchEnded);
        }
    }
}

/// egui-Rechteck → Viewport-Rechteck in Client-Pixeln.
pub fn to_viewport_rect(rect: egui::Rect) -> ViewportRect {
    ViewportRect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::core::TangentSlot;

    fn editing_scene(select: bool) -> RenderScene {
        let mut state = AppState::with_mesh(2).expect("Mesh gueltig");
        state.view.editing = true;
        state.view.viewport = ViewportRect::new(0.0, 0.0, 400.0, 400.0);
        if select {
            state.selection.selected_point = state.mesh.as_ref().and_then(|m| m.point_id_at(1, 1));
        }
        build_render_scene(&state)
    }

    #[test]
    fn hit_test_finds_point_handle() {
        let scene = editing_scene(false);
        let expected = scene.mesh.as_ref().and_then(|m| m.point_id_at(1, 1));

        let target = hit_test(&scene, Vec2::new(202.0, 199.0));

        assert_eq!(Some(target), expected.map(PressTarget::Point));
    }

    #[test]
    fn hit_test_prefers_tangent_of_selected_point() {
        let scene = editing_scene(true);
        let cp = scene
            .mesh
            .as_ref()
            .and_then(|m| m.point_at(1, 1))
            .cloned()
            .expect("Punkt vorhanden");

        // Handle HN liegt bei 200 - 0.5 * 100 = 150
        let target = hit_test(&scene, Vec2::new(150.0, 200.0));

        assert_eq!(
            target,
            PressTarget::Tangent(cp.tangent(TangentSlot::HorizontalNegative))
        );
    }

    #[test]
    fn hit_test_without_editing_is_background() {
        let mut scene = editing_scene(false);
        scene.editing = false;

        let target = hit_test(&scene, Vec2::new(200.0, 200.0));

        assert_eq!(target, PressTarget::Background);
    }

    #[test]
    fn hit_test_uses_cached_viewport_not_panel_size() {
        let mut state = AppState::with_mesh(2).expect("Mesh gueltig");
        state.view.editing = true;
        state.view.viewport = ViewportRect::new(0.0, 0.0, 100.0, 100.0);
        let scene = build_render_scene(&state);
        let center = state.mesh.as_ref().and_then(|m| m.point_id_at(1, 1));

        // Im gecachten 100x100-Viewport liegt (100, 100) auf der Ecke [2][2]
        let corner = state.mesh.as_ref().and_then(|m| m.point_id_at(2, 2));
        assert_eq!(
            Some(hit_test(&scene, Vec2::new(100.0, 100.0))),
            corner.map(PressTarget::Point)
        );
        assert_eq!(
            Some(hit_test(&scene, Vec2::new(50.0, 50.0))),
            center.map(PressTarget::Point)
        );
    }

    #[test]
    fn hit_test_with_unusable_viewport_is_background() {
        let mut state = AppState::with_mesh(2).expect("Mesh gueltig");
        state.view.editing = true;
        let scene = build_render_scene(&state);

        assert_eq!(hit_test(&scene, Vec2::ZERO), PressTarget::Background);
    }

    #[test]
    fn first_rect_is_measured_then_resizes_are_debounced() {
        let mut input = InputState::new();
        let now = Instant::now();
        let mut events = Vec::new();

        input.collect_viewport_changes(ViewportRect::new(0.0, 0.0, 800.0, 600.0), now, &mut events);
        input.collect_viewport_changes(ViewportRect::new(0.0, 0.0, 800.0, 600.0), now, &mut events);
        input.collect_viewport_changes(ViewportRect::new(0.0, 0.0, 900.0, 600.0), now, &mut events);

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], AppIntent::ViewportMeasured { .. }));
        assert!(matches!(events[1], AppIntent::ViewportResized { .. }));
    }
}
