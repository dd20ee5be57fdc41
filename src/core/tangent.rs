//! Tangenten-Handles: lokaler Offset, Richtungs-Flag und Bindung an die Partner-Tangente.
//!
//! Der Offset einer Tangente ist einheitenlos und richtungsneutral. Erst die
//! Projektion in den Screen-Space multipliziert mit `tangent_scale` und dreht das
//! Vorzeichen über das Richtungs-Flag. Zwei gegenläufige Handles mit gleichem
//! Offset erscheinen dadurch spiegelbildlich.

use super::ControlPointId;
use glam::Vec2;

/// Index einer Tangente in der Tangenten-Arena des Mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TangentId(pub(crate) usize);

/// Achse, entlang der ein Handle den Verlauf formt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TangentAxis {
    /// Horizontale Achse (Mesh-x, Index `i`)
    Horizontal,
    /// Vertikale Achse (Mesh-y, Index `j`)
    Vertical,
}

impl TangentAxis {
    /// Einheitsvektor der Achse im Tangenten-Space.
    pub fn unit(self) -> Vec2 {
        match self {
            TangentAxis::Horizontal => Vec2::X,
            TangentAxis::Vertical => Vec2::Y,
        }
    }
}

/// Fester Platz eines Handles an seinem Kontrollpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TangentSlot {
    HorizontalPositive,
    HorizontalNegative,
    VerticalPositive,
    VerticalNegative,
}

impl TangentSlot {
    /// Alle Slots in Speicherreihenfolge.
    pub const ALL: [TangentSlot; 4] = [
        TangentSlot::HorizontalPositive,
        TangentSlot::HorizontalNegative,
        TangentSlot::VerticalPositive,
        TangentSlot::VerticalNegative,
    ];

    /// Index innerhalb des Tangenten-Arrays eines Kontrollpunkts.
    pub fn index(self) -> usize {
        match self {
            TangentSlot::HorizontalPositive => 0,
            TangentSlot::HorizontalNegative => 1,
            TangentSlot::VerticalPositive => 2,
            TangentSlot::VerticalNegative => 3,
        }
    }

    /// Achse des Slots.
    pub fn axis(self) -> TangentAxis {
        match self {
            TangentSlot::HorizontalPositive | TangentSlot::HorizontalNegative => {
                TangentAxis::Horizontal
            }
            TangentSlot::VerticalPositive | TangentSlot::VerticalNegative => TangentAxis::Vertical,
        }
    }

    /// Richtungs-Flag: `true` = Handle zeigt auf die negative Seite der Achse.
    pub fn direction(self) -> bool {
        matches!(
            self,
            TangentSlot::HorizontalNegative | TangentSlot::VerticalNegative
        )
    }

    /// Gegenläufiger Slot auf derselben Achse (struktureller Partner).
    pub fn opposite(self) -> TangentSlot {
        match self {
            TangentSlot::HorizontalPositive => TangentSlot::HorizontalNegative,
            TangentSlot::HorizontalNegative => TangentSlot::HorizontalPositive,
            TangentSlot::VerticalPositive => TangentSlot::VerticalNegative,
            TangentSlot::VerticalNegative => TangentSlot::VerticalPositive,
        }
    }
}

/// Vorzeichen der Screen-Projektion für ein Richtungs-Flag.
pub fn direction_sign(direction: bool) -> f32 {
    if direction {
        -1.0
    } else {
        1.0
    }
}

/// Tangenten-Offset → Screen-Verschiebung in Pixeln.
pub fn to_screen_space(offset: Vec2, direction: bool, tangent_scale: f32) -> Vec2 {
    offset * tangent_scale * direction_sign(direction)
}

/// Rohe Pixel-Verschiebung → Tangenten-Offset (Umkehrung von [`to_screen_space`]).
pub fn from_screen_space(raw: Vec2, direction: bool, tangent_scale: f32) -> Vec2 {
    raw / tangent_scale * direction_sign(direction)
}

/// Ein einzelnes Richtungs-Handle eines Kontrollpunkts
#[derive(Debug, Clone, PartialEq)]
pub struct Tangent {
    owner: ControlPointId,
    slot: TangentSlot,
    offset: Vec2,
    /// Struktureller Partner, einmalig beim Aufbau gesetzt
    pub(crate) paired: Option<TangentId>,
    /// Aktive Spiegelung: `None` oder identisch mit `paired`
    pub(crate) bound: Option<TangentId>,
    pub(crate) visible: bool,
}

impl Tangent {
    pub(crate) fn new(owner: ControlPointId, slot: TangentSlot, offset: Vec2) -> Self {
        Self {
            owner,
            slot,
            offset,
            paired: None,
            bound: None,
            visible: true,
        }
    }

    /// Besitzender Kontrollpunkt.
    pub fn owner(&self) -> ControlPointId {
        self.owner
    }

    /// Slot am Kontrollpunkt.
    pub fn slot(&self) -> TangentSlot {
        self.slot
    }

    /// Achse des Handles.
    pub fn axis(&self) -> TangentAxis {
        self.slot.axis()
    }

    /// Richtungs-Flag (`true` = negative Seite, Vorzeichen wird gedreht).
    pub fn direction(&self) -> bool {
        self.slot.direction()
    }

    /// Lokaler Offset im Tangenten-Space.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Struktureller Partner.
    pub fn paired_tangent(&self) -> Option<TangentId> {
        self.paired
    }

    /// Aktuell gebundener Partner.
    pub fn bound_tangent(&self) -> Option<TangentId> {
        self.bound
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Setzt den Offset direkt. Reine Zustandsänderung ohne Weitergabe an den Partner.
    pub fn set_tangent(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Verschiebung des Handle-Endpunkts relativ zum Kontrollpunkt in Pixeln.
    pub fn screen_offset(&self, tangent_scale: f32) -> Vec2 {
        to_screen_space(self.offset, self.direction(), tangent_scale)
    }

    /// Leitet den Offset ab, den eine rohe Pixel-Verschiebung für dieses Handle ergibt.
    pub fn offset_for_raw(&self, raw: Vec2, tangent_scale: f32) -> Vec2 {
        from_screen_space(raw, self.direction(), tangent_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tangent(slot: TangentSlot, offset: Vec2) -> Tangent {
        Tangent::new(ControlPointId(0), slot, offset)
    }

    #[test]
    fn negative_direction_mirrors_screen_offset() {
        let positive = tangent(TangentSlot::HorizontalPositive, Vec2::new(0.5, 0.0));
        let negative = tangent(TangentSlot::HorizontalNegative, Vec2::new(0.5, 0.0));

        assert_eq!(positive.screen_offset(100.0), Vec2::new(50.0, 0.0));
        assert_eq!(negative.screen_offset(100.0), Vec2::new(-50.0, 0.0));
    }

    #[test]
    fn raw_offset_inverts_screen_projection() {
        for slot in TangentSlot::ALL {
            let t = tangent(slot, Vec2::ZERO);
            let raw = Vec2::new(37.0, -12.5);
            let offset = t.offset_for_raw(raw, 100.0);
            let back = to_screen_space(offset, t.direction(), 100.0);
            assert_relative_eq!(back.x, raw.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, raw.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn opposite_slot_shares_axis_and_flips_direction() {
        for slot in TangentSlot::ALL {
            let opposite = slot.opposite();
            assert_eq!(opposite.axis(), slot.axis());
            assert_ne!(opposite.direction(), slot.direction());
            assert_eq!(opposite.opposite(), slot);
        }
    }

    #[test]
    fn set_tangent_does_not_touch_binding() {
        let mut t = tangent(TangentSlot::VerticalPositive, Vec2::ZERO);
        t.set_tangent(Vec2::new(0.0, 0.3));
        assert_eq!(t.offset(), Vec2::new(0.0, 0.3));
        assert!(!t.is_bound());
        assert!(t.paired_tangent().is_none());
    }
}
