use crate::core::{ControlPointId, Rgb, TangentAxis, TangentId, ViewportRect};
use crate::shared::EditorOptions;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Selektion ───────────────────────────────────────────────
    /// Punkt selektieren (Aktiv-Flag, Farbpanel)
    SelectPoint { point: ControlPointId },
    /// Selektion aufheben
    ClearSelection,

    // ── Gesten ──────────────────────────────────────────────────
    /// Punkt-Drag starten, Anker = Position vor dem Drag
    BeginPointDrag { point: ControlPointId },
    /// Punkt-Drag auf eine Ziel-Mesh-Position fortführen
    UpdatePointDrag {
        target: glam::Vec2,
        shift: bool,
        ctrl: bool,
    },
    /// Tangenten-Drag starten
    BeginTangentDrag { tangent: TangentId },
    /// Tangenten-Drag mit roher Pixel-Verschiebung fortführen
    UpdateTangentDrag { raw: glam::Vec2 },
    /// Laufende Geste beenden
    EndDrag,

    // ── View ────────────────────────────────────────────────────
    /// Editier-Modus umschalten
    ToggleEditing,
    /// Viewport-Rechteck sofort setzen
    SetViewportRect { rect: ViewportRect },
    /// Viewport-Rechteck entprellt vormerken
    ScheduleViewportResize { rect: ViewportRect, at: Instant },
    /// Fälliges Viewport-Rechteck übernehmen
    ApplyPendingViewport { now: Instant },

    // ── Handles ─────────────────────────────────────────────────
    /// Handles des selektierten Punkts zurücksetzen (`None` = alle)
    ResetSelectedTangents { axis: Option<TangentAxis> },
    /// Sichtbarkeit einer Handle-Achse am selektierten Punkt umschalten
    ToggleSelectedHandles { axis: TangentAxis },
    /// Bindung der gezogenen Tangente umschalten
    ToggleDraggedTangentBinding,

    // ── Farbe & Mesh ────────────────────────────────────────────
    /// Farbe des selektierten Punkts setzen
    SetSelectedColor { color: Rgb },
    /// Mesh neu aufbauen
    RebuildMesh { division_count: u32 },

    // ── Optionen ────────────────────────────────────────────────
    /// Optionen übernehmen (nur im Speicher)
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen (nur im Speicher)
    ResetOptions,
    /// Geänderte Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
}
