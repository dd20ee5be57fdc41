use crate::core::{ResizeDebouncer, ViewportRect};
use std::time::Duration;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Gecachtes Rechteck des Mesh-Containers in Client-Pixeln
    pub viewport: ViewportRect,
    /// Trailing-Edge-Debounce für Resize-Signale
    pub resize_debouncer: ResizeDebouncer,
    /// Editier-Modus: Handles und Farbpanel sichtbar
    pub editing: bool,
    /// Signalisiert dem Host, dass sich das Mesh seit dem letzten Frame geändert hat
    pub mesh_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand mit gegebener Resize-Verzögerung.
    pub fn new(resize_debounce: Duration) -> Self {
        Self {
            viewport: ViewportRect::default(),
            resize_debouncer: ResizeDebouncer::new(resize_debounce),
            editing: false,
            mesh_dirty: false,
        }
    }
}
