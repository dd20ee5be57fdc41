//! UI-Komponenten: Toolbar, Status-Bar, Farbpanel, Optionen, Mesh-Overlay und Input.

pub mod color_panel;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten. Keyboard-Shortcuts und
/// das Zeichnen der Handles sind in eigene Dateien extrahiert.
pub mod mesh_overlay;
pub mod options_panel;
pub mod status;
pub mod toolbar;

pub use color_panel::show_color_panel;
pub use input::{hit_test, InputState, PressTarget};
pub use mesh_overlay::paint_mesh_overlay;
pub use options_panel::show_options_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
