//! Render-Szene als expliziter Übergabevertrag zwischen App und Overlay-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{ControlPointId, Mesh, TangentId, ViewportRect};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Das aktuelle Mesh (Arc für O(1)-Clone pro Frame)
    pub mesh: Option<Arc<Mesh>>,
    /// Gecachtes Viewport-Rechteck
    pub viewport: ViewportRect,
    /// Aktuell selektierter Punkt
    pub selected_point: Option<ControlPointId>,
    /// Tangente, die gerade gezogen wird
    pub dragged_tangent: Option<TangentId>,
    /// Editier-Modus: Handles und Farbpanel sichtbar
    pub editing: bool,
    /// Laufzeit-Optionen für Farben, Größen, Skalierung
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Mesh für Rendering vorhanden ist.
    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }
}
