//! Gradient Mesh Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, Gesture, InteractionState, SelectionState,
    UiState, ViewState,
};
pub use crate::core::{
    ControlPoint, ControlPointId, GridIndex, Mesh, ResizeDebouncer, Rgb, Tangent, TangentAxis,
    TangentId, TangentSlot, ViewportRect,
};
pub use shared::{EditorOptions, RenderScene};
