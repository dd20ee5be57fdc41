//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod gesture;
pub mod handles;
pub mod mesh;
pub mod options;
pub mod selection;
pub mod view;
