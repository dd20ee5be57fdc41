//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod handles;
pub mod mesh;
pub mod selection;
pub mod viewport;
