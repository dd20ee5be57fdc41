use crate::app::CommandLog;
use crate::core::{ControlPoint, Mesh};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{InteractionState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Mesh (None = noch nicht aufgebaut)
    pub mesh: Option<Arc<Mesh>>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Gesten-State
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Skalierung, Schwellen, Farben)
    pub options: EditorOptions,
    /// Optionen seit dem letzten Speichern geändert
    pub options_dirty: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            mesh: None,
            view: ViewState::new(options.resize_debounce()),
            ui: UiState::new(options.division_count),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            command_log: CommandLog::new(),
            options,
            options_dirty: false,
        }
    }

    /// Erstellt einen App-State mit aufgebautem Mesh aus `options.division_count`.
    pub fn from_options(options: EditorOptions) -> anyhow::Result<Self> {
        let mesh = Mesh::new(options.division_count)?;
        let mut state = Self::with_options(options);
        state.mesh = Some(Arc::new(mesh));
        state.view.mesh_dirty = true;
        Ok(state)
    }

    /// Erstellt einen App-State mit Standard-Optionen und einem Mesh der Größe `division_count`.
    pub fn with_mesh(division_count: u32) -> anyhow::Result<Self> {
        Self::from_options(EditorOptions {
            division_count,
            ..EditorOptions::default()
        })
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, |mesh| mesh.point_count())
    }

    /// Der aktuell selektierte Kontrollpunkt.
    pub fn selected_point(&self) -> Option<&ControlPoint> {
        let id = self.selection.selected_point?;
        self.mesh.as_ref()?.point(id)
    }

    /// Mutabler Zugriff auf das Mesh (CoW) und Markierung für den Renderer.
    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        let mesh = self.mesh.as_mut()?;
        self.view.mesh_dirty = true;
        Some(Arc::make_mut(mesh))
    }

    /// Liest und löscht das Dirty-Flag des Mesh.
    pub fn take_mesh_dirty(&mut self) -> bool {
        std::mem::take(&mut self.view.mesh_dirty)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
