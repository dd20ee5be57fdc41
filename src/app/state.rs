//! Application State - zentrale Datenhaltung.
//!
//! Aufgeteilt nach Zuständigkeit:
//! - `app_state` - Hauptzustand mit Mesh, Optionen und Command-Log
//! - `interaction` - Gesten-Zustandsmaschine (Idle / Punkt-Drag / Tangenten-Drag)
//! - `selection` - selektierter Kontrollpunkt
//! - `view` - Viewport-Rechteck, Resize-Debounce, Editier-Modus
//! - `ui` - Zustand des Farbpanels

mod app_state;
mod interaction;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use interaction::{Gesture, InteractionState};
pub use selection::SelectionState;
pub use ui::{ColorPanelState, UiState};
pub use view::ViewState;
