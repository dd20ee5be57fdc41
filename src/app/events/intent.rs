use crate::core::{ControlPointId, Rgb, TangentId, ViewportRect};
use crate::shared::EditorOptions;
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Pointer ─────────────────────────────────────────────────
    /// Pointer-Down auf einem Punkt-Handle
    PointerPressedOnPoint { point: ControlPointId },
    /// Pointer-Down auf einem Tangenten-Handle
    PointerPressedOnTangent { tangent: TangentId },
    /// Globale Pointer-Bewegung in Client-Pixeln
    PointerMoved {
        client: glam::Vec2,
        /// Achsensperre
        shift: bool,
        /// Jitter-Schwelle umgehen
        ctrl: bool,
    },
    /// Pointer losgelassen; `on_background` = Ziel ist der Mesh-Hintergrund
    PointerReleased { on_background: bool },
    /// Pointer verloren (Fokusverlust, Capture abgebrochen)
    PointerCancelled,
    /// Touch-Ende ohne eigene Semantik
    TouchEnded,
    /// Klick auf den Mesh-Container (schaltet den Editier-Modus)
    BackgroundClicked,
    /// Editier-Modus über die Toolbar umschalten
    EditingToggleRequested,

    // ── Viewport ────────────────────────────────────────────────
    /// Erstmessung des Containers, wird sofort übernommen
    ViewportMeasured { rect: ViewportRect },
    /// Container-Größe hat sich geändert (entprellt)
    ViewportResized { rect: ViewportRect, at: Instant },
    /// Frame-Takt des Hosts, übernimmt fällige Resizes
    FrameTick { now: Instant },

    // ── Handle-Operationen am selektierten Punkt ───────────────
    /// Alle Tangenten auf Standardlänge
    ResetSelectedTangentsRequested,
    /// Horizontale Handles ein-/ausblenden
    ToggleHorizontalHandlesRequested,
    /// Vertikale Handles ein-/ausblenden
    ToggleVerticalHandlesRequested,
    /// Horizontale Handles auf Standardlänge
    ResetHorizontalHandlesRequested,
    /// Vertikale Handles auf Standardlänge
    ResetVerticalHandlesRequested,
    /// Bindung der gerade gezogenen Tangente umschalten
    ToggleTangentBindingRequested,

    // ── Farbe, Selektion, Mesh ──────────────────────────────────
    /// Farbpanel hat eine Farbe übernommen
    ColorCommitted { color: Rgb },
    /// Selektion explizit aufheben (Escape)
    ClearSelectionRequested,
    /// Mesh mit neuer Unterteilungsanzahl aufbauen
    MeshRebuildRequested { division_count: u32 },

    // ── Optionen ────────────────────────────────────────────────
    /// Optionen geändert (werden sofort übernommen, gespeichert erst per `OptionsSaveRequested`)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Geänderte Optionen in die Konfigurationsdatei schreiben
    OptionsSaveRequested,
}
