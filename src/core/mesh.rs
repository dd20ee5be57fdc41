//! Das Gradient-Mesh: (N+1)×(N+1)-Gitter aus Kontrollpunkten plus Tangenten-Arena.
//!
//! Punkte liegen flach in Row-Major-Reihenfolge (`index = i * (N+1) + j`),
//! Tangenten in einer eigenen Arena. Partner- und Bindungs-Beziehungen sind
//! reine Indizes in diese Arena; Binden und Lösen ändert immer beide Seiten.

use super::control_point::default_offset;
use super::{
    ControlPoint, ControlPointId, GridIndex, Rgb, Tangent, TangentAxis, TangentId, TangentSlot,
    ViewportRect,
};
use glam::Vec2;

/// Maximale Unterteilungsanzahl (begrenzt die Allokation auf ~66k Punkte).
pub const MAX_DIVISION_COUNT: u32 = 256;

/// Gitter aus Kontrollpunkten mit fester Dimension
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    division_count: u32,
    /// Alle Punkte, Row-Major
    points: Vec<ControlPoint>,
    /// Tangenten-Arena, vier Einträge pro Punkt
    tangents: Vec<Tangent>,
}

impl Mesh {
    /// Baut ein Mesh mit `division_count` Unterteilungen pro Achse.
    ///
    /// Punkt `[i][j]` liegt bei `(i/d, j/d)` und erhält die Farbe `(i/d, j/d, j/d)`.
    /// Alle Handles starten mit Länge `1/d` und gegenläufige Handles derselben
    /// Achse werden als Partner verknüpft (ungebunden).
    pub fn new(division_count: u32) -> anyhow::Result<Self> {
        anyhow::ensure!(
            division_count > 0,
            "Unterteilungsanzahl muss groesser als 0 sein"
        );
        anyhow::ensure!(
            division_count <= MAX_DIVISION_COUNT,
            "Unterteilungsanzahl {} ueberschreitet das Maximum von {}",
            division_count,
            MAX_DIVISION_COUNT
        );

        let d = division_count as f32;
        let side = division_count as usize + 1;
        let default_lengths = Vec2::splat(1.0 / d);

        let mut points = Vec::with_capacity(side * side);
        let mut tangents = Vec::with_capacity(side * side * TangentSlot::ALL.len());

        for i in 0..side {
            for j in 0..side {
                let id = ControlPointId(points.len());
                let position = Vec2::new(i as f32 / d, j as f32 / d);
                let color = Rgb::new(position.x, position.y, position.y);

                let base = tangents.len();
                let ids = TangentSlot::ALL.map(|slot| TangentId(base + slot.index()));
                for slot in TangentSlot::ALL {
                    tangents.push(Tangent::new(
                        id,
                        slot,
                        default_offset(slot, default_lengths),
                    ));
                }
                for slot in [TangentSlot::HorizontalPositive, TangentSlot::VerticalPositive] {
                    pair(
                        &mut tangents,
                        ids[slot.index()],
                        ids[slot.opposite().index()],
                    );
                }

                points.push(ControlPoint::new(
                    id,
                    GridIndex { i, j },
                    position,
                    color,
                    ids,
                    default_lengths,
                ));
            }
        }

        log::info!(
            "Mesh aufgebaut: {} Unterteilungen, {} Kontrollpunkte, {} Tangenten",
            division_count,
            points.len(),
            tangents.len()
        );

        Ok(Self {
            division_count,
            points,
            tangents,
        })
    }

    pub fn division_count(&self) -> u32 {
        self.division_count
    }

    /// Punkte pro Gitterzeile bzw. -spalte (`division_count + 1`).
    pub fn side_len(&self) -> usize {
        self.division_count as usize + 1
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn tangent_count(&self) -> usize {
        self.tangents.len()
    }

    /// Alle Punkte in Row-Major-Reihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Gitterzeilen `[i]`, jeweils mit `side_len()` Punkten `[j]`.
    pub fn rows(&self) -> impl Iterator<Item = &[ControlPoint]> {
        self.points.chunks(self.side_len())
    }

    pub fn point(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.get(id.0)
    }

    pub fn point_mut(&mut self, id: ControlPointId) -> Option<&mut ControlPoint> {
        self.points.get_mut(id.0)
    }

    /// ID des Punkts `[i][j]`, falls im Gitter.
    pub fn point_id_at(&self, i: usize, j: usize) -> Option<ControlPointId> {
        let side = self.side_len();
        (i < side && j < side).then_some(ControlPointId(i * side + j))
    }

    /// Punkt `[i][j]`, falls im Gitter.
    pub fn point_at(&self, i: usize, j: usize) -> Option<&ControlPoint> {
        self.point_id_at(i, j).and_then(|id| self.point(id))
    }

    pub fn tangent(&self, id: TangentId) -> Option<&Tangent> {
        self.tangents.get(id.0)
    }

    /// Alle Handles eines Punkts in Slot-Reihenfolge.
    pub fn tangents_of(&self, point: ControlPointId) -> impl Iterator<Item = &Tangent> + '_ {
        self.point(point)
            .into_iter()
            .flat_map(|cp| cp.tangent_ids().iter())
            .filter_map(|id| self.tangent(*id))
    }

    /// Setzt die Position eines Punkts.
    pub fn set_point_position(&mut self, id: ControlPointId, position: Vec2) -> bool {
        let Some(point) = self.point_mut(id) else {
            return false;
        };
        point.set_position(position);
        true
    }

    /// Setzt die Farbe eines Punkts.
    pub fn set_point_color(&mut self, id: ControlPointId, color: Rgb) -> bool {
        let Some(point) = self.point_mut(id) else {
            return false;
        };
        point.set_color(color);
        true
    }

    /// Setzt das visuelle Aktiv-Flag eines Punkts.
    pub fn set_point_active(&mut self, id: ControlPointId, active: bool) -> bool {
        let Some(point) = self.point_mut(id) else {
            return false;
        };
        point.set_active(active);
        true
    }

    /// Setzt den Offset einer Tangente ohne Weitergabe an den Partner.
    pub fn set_tangent(&mut self, id: TangentId, offset: Vec2) -> bool {
        let Some(tangent) = self.tangents.get_mut(id.0) else {
            return false;
        };
        tangent.set_tangent(offset);
        true
    }

    /// Bewegt eine Tangente um eine rohe Pixel-Verschiebung relativ zu ihrem Punkt.
    ///
    /// Der abgeleitete Offset wird auf die Tangente und, falls gebunden,
    /// unverändert auf den Partner angewendet. Das Richtungs-Flag des Partners
    /// wirkt erst bei dessen Screen-Projektion.
    pub fn move_tangent(&mut self, id: TangentId, raw: Vec2, tangent_scale: f32) -> Option<Vec2> {
        if !(tangent_scale.is_finite() && tangent_scale > 0.0) {
            log::warn!("Ungueltige Tangenten-Skalierung {}", tangent_scale);
            return None;
        }
        let tangent = self.tangents.get_mut(id.0)?;
        let offset = tangent.offset_for_raw(raw, tangent_scale);
        tangent.set_tangent(offset);

        if let Some(bound) = tangent.bound {
            self.set_tangent(bound, offset);
        }
        Some(offset)
    }

    /// Schaltet die Bindung einer Tangente an ihren Partner um.
    ///
    /// Gibt den neuen Bindungszustand zurück. Ohne Partner wird gewarnt und
    /// nichts verändert (`None`).
    pub fn toggle_bind_tangents(&mut self, id: TangentId) -> Option<bool> {
        let tangent = self.tangent(id)?;
        let Some(partner) = tangent.paired else {
            log::warn!("Tangente {:?} hat keinen Partner, Bindung unveraendert", id);
            return None;
        };

        if tangent.bound.is_some() {
            self.tangents[id.0].bound = None;
            self.tangents[partner.0].bound = None;
            Some(false)
        } else {
            self.tangents[id.0].bound = Some(partner);
            self.tangents[partner.0].bound = Some(id);
            Some(true)
        }
    }

    /// Setzt Handles eines Punkts auf die Standardlänge zurück.
    ///
    /// `axis = None` setzt alle vier Handles zurück.
    pub fn reset_tangents(&mut self, point: ControlPointId, axis: Option<TangentAxis>) -> bool {
        let Some(cp) = self.point(point) else {
            return false;
        };
        let resets: Vec<(TangentId, Vec2)> = TangentSlot::ALL
            .into_iter()
            .filter(|slot| axis.is_none_or(|a| slot.axis() == a))
            .map(|slot| (cp.tangent(slot), cp.default_offset(slot)))
            .collect();

        for (id, offset) in resets {
            self.set_tangent(id, offset);
        }
        true
    }

    /// Schaltet die Sichtbarkeit beider Handles einer Achse um und gibt den neuen Zustand zurück.
    pub fn toggle_handle_visibility(
        &mut self,
        point: ControlPointId,
        axis: TangentAxis,
    ) -> Option<bool> {
        let ids = self.point(point)?.tangents_on(axis);
        let visible = !self.tangent(ids[0])?.visible;
        for id in ids {
            self.tangents[id.0].visible = visible;
        }
        Some(visible)
    }

    /// Nächster Kontrollpunkt innerhalb von `radius_px` um eine Client-Position.
    pub fn pick_point(
        &self,
        client: Vec2,
        viewport: &ViewportRect,
        radius_px: f32,
    ) -> Option<ControlPointId> {
        if !viewport.is_usable() {
            return None;
        }
        self.points
            .iter()
            .map(|cp| {
                let distance = viewport.mesh_to_client(cp.position()).distance(client);
                (cp.id(), distance)
            })
            .filter(|(_, distance)| *distance <= radius_px)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Nächstes sichtbares Handle des Punkts `point` innerhalb von `radius_px`.
    pub fn pick_tangent(
        &self,
        point: ControlPointId,
        client: Vec2,
        viewport: &ViewportRect,
        radius_px: f32,
        tangent_scale: f32,
    ) -> Option<TangentId> {
        if !viewport.is_usable() {
            return None;
        }
        let cp = self.point(point)?;
        let anchor = viewport.mesh_to_client(cp.position());
        cp.tangent_ids()
            .iter()
            .filter_map(|id| self.tangent(*id).map(|t| (*id, t)))
            .filter(|(_, t)| t.is_visible())
            .map(|(id, t)| (id, (anchor + t.screen_offset(tangent_scale)).distance(client)))
            .filter(|(_, distance)| *distance <= radius_px)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

/// Verknüpft zwei Tangenten als strukturelle Partner (nur beim Aufbau).
fn pair(tangents: &mut [Tangent], a: TangentId, b: TangentId) {
    tangents[a.0].paired = Some(b);
    tangents[b.0].paired = Some(a);
}

#[cfg(test)]
mod tests;
