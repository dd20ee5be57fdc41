use crate::core::ControlPointId;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierter Kontrollpunkt; bleibt über Gesten hinweg bis zum Aufheben bestehen
    pub selected_point: Option<ControlPointId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }
}
