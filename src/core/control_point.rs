//! Kontrollpunkt des Gradient-Mesh: Position, Farbe und vier feste Tangenten-Handles.

use super::{Rgb, TangentAxis, TangentId, TangentSlot};
use glam::Vec2;
use std::fmt;

/// Strukturelle ID eines Kontrollpunkts (Row-Major-Index im Mesh)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlPointId(pub(crate) usize);

impl fmt::Display for ControlPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "control-point-{}", self.0)
    }
}

/// Gitterkoordinate `[i][j]` eines Kontrollpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    /// Spalte (horizontale Achse)
    pub i: usize,
    /// Zeile (vertikale Achse)
    pub j: usize,
}

/// Ein Knoten im Gradient-Mesh
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    id: ControlPointId,
    grid: GridIndex,
    /// Normalisierte Mesh-Position (0..=1 pro Achse)
    position: Vec2,
    color: Rgb,
    /// Handles in der Reihenfolge von [`TangentSlot::ALL`]; nie ersetzt
    tangents: [TangentId; 4],
    /// Standard-Handle-Längen (x, y) für alle Reset-Operationen
    default_tangent_lengths: Vec2,
    /// Visuelles Aktiv-Flag, entspricht der aktuellen Selektion
    active: bool,
}

impl ControlPoint {
    pub(crate) fn new(
        id: ControlPointId,
        grid: GridIndex,
        position: Vec2,
        color: Rgb,
        tangents: [TangentId; 4],
        default_tangent_lengths: Vec2,
    ) -> Self {
        Self {
            id,
            grid,
            position,
            color,
            tangents,
            default_tangent_lengths,
            active: false,
        }
    }

    pub fn id(&self) -> ControlPointId {
        self.id
    }

    pub fn grid_index(&self) -> GridIndex {
        self.grid
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Alle vier Handle-IDs.
    pub fn tangent_ids(&self) -> &[TangentId; 4] {
        &self.tangents
    }

    /// Handle-ID für einen Slot.
    pub fn tangent(&self, slot: TangentSlot) -> TangentId {
        self.tangents[slot.index()]
    }

    /// Beide Handles einer Achse (positiv, negativ).
    pub fn tangents_on(&self, axis: TangentAxis) -> [TangentId; 2] {
        match axis {
            TangentAxis::Horizontal => [
                self.tangent(TangentSlot::HorizontalPositive),
                self.tangent(TangentSlot::HorizontalNegative),
            ],
            TangentAxis::Vertical => [
                self.tangent(TangentSlot::VerticalPositive),
                self.tangent(TangentSlot::VerticalNegative),
            ],
        }
    }

    pub fn default_tangent_lengths(&self) -> Vec2 {
        self.default_tangent_lengths
    }

    /// Standard-Offset eines Slots: Achsen-Einheitsvektor mal Standardlänge der Achse.
    pub fn default_offset(&self, slot: TangentSlot) -> Vec2 {
        default_offset(slot, self.default_tangent_lengths)
    }

    /// Setzt die normalisierte Position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Setzt die Farbe.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Standard-Offset eines Slots bei gegebenen Achsenlängen.
pub(crate) fn default_offset(slot: TangentSlot, lengths: Vec2) -> Vec2 {
    slot.axis().unit() * lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_displays_as_control_point_label() {
        assert_eq!(ControlPointId(7).to_string(), "control-point-7");
    }

    #[test]
    fn default_offset_follows_axis() {
        let lengths = Vec2::new(0.25, 0.5);
        assert_eq!(
            default_offset(TangentSlot::HorizontalNegative, lengths),
            Vec2::new(0.25, 0.0)
        );
        assert_eq!(
            default_offset(TangentSlot::VerticalPositive, lengths),
            Vec2::new(0.0, 0.5)
        );
    }
}
