//! Core-Domänentypen: Kontrollpunkte, Tangenten, Mesh, Viewport.

pub mod color;
pub mod control_point;
/// Gradient-Mesh-Datenmodell
///
/// - Mesh: Container für alle Kontrollpunkte und Tangenten
/// - ControlPoint: Gitterknoten mit Position, Farbe und vier Handles
/// - Tangent: Richtungs-Handle mit optionaler Bindung an den Partner
pub mod mesh;
pub mod tangent;
pub mod viewport;

pub use color::Rgb;
pub use control_point::{ControlPoint, ControlPointId, GridIndex};
pub use mesh::{Mesh, MAX_DIVISION_COUNT};
pub use tangent::{
    direction_sign, from_screen_space, to_screen_space, Tangent, TangentAxis, TangentId,
    TangentSlot,
};
pub use viewport::{ResizeDebouncer, ViewportRect};
