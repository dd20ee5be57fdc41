use crate::core::{ControlPointId, TangentId};

/// Laufende Pointer-Geste
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Punkt wird gezogen; `anchor` ist die Position vor dem Drag
    DraggingPoint {
        point: ControlPointId,
        anchor: glam::Vec2,
    },
    /// Tangenten-Handle wird gezogen
    DraggingTangent { tangent: TangentId },
}

/// Gesten-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Aktuelle Geste
    pub gesture: Gesture,
}

impl InteractionState {
    /// Erstellt einen Zustand ohne aktive Geste.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Tangente der laufenden Tangenten-Geste.
    pub fn dragged_tangent(&self) -> Option<TangentId> {
        match self.gesture {
            Gesture::DraggingTangent { tangent } => Some(tangent),
            _ => None,
        }
    }

    /// Punkt und Anker der laufenden Punkt-Geste.
    pub fn dragged_point(&self) -> Option<(ControlPointId, glam::Vec2)> {
        match self.gesture {
            Gesture::DraggingPoint { point, anchor } => Some((point, anchor)),
            _ => None,
        }
    }

    /// Beendet jede laufende Geste.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
