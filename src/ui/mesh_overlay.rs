//! Zeichnet Gitterlinien, Punkt- und Tangenten-Handles aus der RenderScene.
//!
//! Das Rastern der Farbverläufe selbst gehört nicht hierher; das Overlay zeigt
//! nur die editierbare Struktur.

use crate::core::{ControlPoint, Mesh, ViewportRect};
use crate::shared::{EditorOptions, RenderScene};

/// Konvertiert eine RGBA-Optionsfarbe in eine egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}

fn to_pos2(v: glam::Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Zeichnet das Overlay in das gegebene Rechteck.
pub fn paint_mesh_overlay(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let Some(mesh) = scene.mesh.as_deref() else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Kein Mesh aufgebaut",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
        return;
    };
    let viewport = scene.viewport;
    if !viewport.is_usable() {
        return;
    }

    paint_lattice(painter, mesh, &viewport, &scene.options);

    if !scene.editing {
        return;
    }

    for cp in mesh.points() {
        paint_point(painter, cp, &viewport, &scene.options);
    }

    if let Some(cp) = scene.selected_point.and_then(|id| mesh.point(id)) {
        paint_tangents(painter, mesh, cp, &viewport, scene);
    }
}

fn paint_lattice(
    painter: &egui::Painter,
    mesh: &Mesh,
    viewport: &ViewportRect,
    opts: &EditorOptions,
) {
    let stroke = egui::Stroke::new(1.0, color32(opts.lattice_color));
    let side = mesh.side_len();

    for i in 0..side {
        for j in 0..side {
            let Some(cp) = mesh.point_at(i, j) else {
                continue;
            };
            let from = to_pos2(viewport.mesh_to_client(cp.position()));
            for neighbor in [mesh.point_at(i + 1, j), mesh.point_at(i, j + 1)]
                .into_iter()
                .flatten()
            {
                let to = to_pos2(viewport.mesh_to_client(neighbor.position()));
                painter.line_segment([from, to], stroke);
            }
        }
    }
}

fn paint_point(
    painter: &egui::Painter,
    cp: &ControlPoint,
    viewport: &ViewportRect,
    opts: &EditorOptions,
) {
    let center = to_pos2(viewport.mesh_to_client(cp.position()));
    let [r, g, b] = cp.color().to_rgb8();
    painter.circle_filled(
        center,
        opts.point_handle_radius_px,
        egui::Color32::from_rgb(r, g, b),
    );

    let (outline, width) = if cp.is_active() {
        (opts.active_point_color, 2.5)
    } else {
        (opts.point_outline_color, 1.5)
    };
    painter.circle_stroke(
        center,
        opts.point_handle_radius_px,
        egui::Stroke::new(width, color32(outline)),
    );
}

fn paint_tangents(
    painter: &egui::Painter,
    mesh: &Mesh,
    cp: &ControlPoint,
    viewport: &ViewportRect,
    scene: &RenderScene,
) {
    let opts = &scene.options;
    let anchor = viewport.mesh_to_client(cp.position());

    for id in cp.tangent_ids() {
        let Some(tangent) = mesh.tangent(*id).filter(|t| t.is_visible()) else {
            continue;
        };
        let color = if tangent.is_bound() {
            color32(opts.bound_tangent_color)
        } else {
            color32(opts.tangent_color)
        };
        let end = anchor + tangent.screen_offset(opts.tangent_scale_px);

        painter.line_segment([to_pos2(anchor), to_pos2(end)], egui::Stroke::new(1.0, color));
        painter.circle_filled(to_pos2(end), opts.tangent_handle_radius_px, color);

        if scene.dragged_tangent == Some(*id) {
            painter.circle_stroke(
                to_pos2(end),
                opts.tangent_handle_radius_px + 2.0,
                egui::Stroke::new(1.5, color32(opts.active_point_color)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_clamps_and_rounds_channels() {
        let color = color32([1.5, 0.5, -1.0, 1.0]);
        assert_eq!(color, egui::Color32::from_rgba_unmultiplied(255, 128, 0, 255));
    }
}
