use crate::core::{ControlPoint, ControlPointId, Rgb};

/// Zustand des Farbpanels
#[derive(Debug, Clone, Default)]
pub struct ColorPanelState {
    /// Punkt, dessen Farbe gerade bearbeitet wird
    pub point: Option<ControlPointId>,
    /// Arbeitskopie der Farbe (wird per `ColorCommitted` übernommen)
    pub color: Rgb,
}

impl ColorPanelState {
    /// Lädt Punkt und Farbe in das Panel.
    pub fn show_point(&mut self, point: &ControlPoint) {
        self.point = Some(point.id());
        self.color = point.color();
    }

    /// Leert das Panel.
    pub fn clear(&mut self) {
        self.point = None;
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Farbpanel
    pub color_panel: ColorPanelState,
    /// Eingabewert der Toolbar für den nächsten Mesh-Aufbau
    pub rebuild_division_count: u32,
    /// Optionen-Fenster sichtbar
    pub show_options: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new(division_count: u32) -> Self {
        Self {
            color_panel: ColorPanelState::default(),
            rebuild_division_count: division_count,
            show_options: false,
        }
    }
}
