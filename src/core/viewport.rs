//! Gecachtes Viewport-Rechteck und Debounce für Resize-Signale.
//!
//! Alle Pointer-Koordinaten werden gegen dieses Rechteck normalisiert:
//! `mesh = (client - origin) / size`. Das Rechteck wird nur bei (entprellten)
//! Resize-Signalen erneuert, nicht pro Pointer-Bewegung.

use glam::Vec2;
use std::time::{Duration, Instant};

/// Bildschirm-Rechteck des Mesh-Containers in Client-Pixeln
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRect {
    /// Linke Kante
    pub x: f32,
    /// Obere Kante
    pub y: f32,
    /// Breite in Pixeln
    pub width: f32,
    /// Höhe in Pixeln
    pub height: f32,
}

impl ViewportRect {
    /// Erstellt ein Rechteck aus Position und Größe.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Nur Rechtecke mit endlicher, positiver Fläche erlauben eine Normalisierung.
    pub fn is_usable(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Client-Pixel → normalisierte Mesh-Koordinaten. `None` bei unbrauchbarem Rechteck.
    pub fn client_to_mesh(&self, client: Vec2) -> Option<Vec2> {
        if !self.is_usable() {
            return None;
        }
        Some((client - self.origin()) / self.size())
    }

    /// Client-Pixel → Pixel relativ zur linken oberen Ecke.
    pub fn client_to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin()
    }

    /// Normalisierte Mesh-Koordinaten → Pixel relativ zur linken oberen Ecke.
    pub fn mesh_to_local(&self, mesh: Vec2) -> Vec2 {
        self.size() * mesh
    }

    /// Normalisierte Mesh-Koordinaten → Client-Pixel.
    pub fn mesh_to_client(&self, mesh: Vec2) -> Vec2 {
        self.origin() + self.mesh_to_local(mesh)
    }

    /// Prüft ob ein Client-Punkt innerhalb des Rechtecks liegt (Kanten inklusive).
    pub fn contains(&self, client: Vec2) -> bool {
        client.x >= self.x
            && client.y >= self.y
            && client.x <= self.x + self.width
            && client.y <= self.y + self.height
    }
}

/// Trailing-Edge-Debounce für Viewport-Resizes.
///
/// Jedes `schedule` startet die Wartezeit neu; erst wenn seit dem letzten
/// Signal `delay` vergangen ist, liefert `poll` das zuletzt gemeldete Rechteck.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(ViewportRect, Instant)>,
}

impl ResizeDebouncer {
    /// Erstellt einen Debouncer mit fester Verzögerung.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Ändert die Verzögerung; ein laufendes Signal bleibt erhalten.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Merkt ein neues Rechteck vor und startet die Wartezeit neu.
    pub fn schedule(&mut self, rect: ViewportRect, now: Instant) {
        self.pending = Some((rect, now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restzeit bis zur Übernahme (für Repaint-Planung im Host).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, at)| self.delay.saturating_sub(now.duration_since(at)))
    }

    /// Liefert das vorgemerkte Rechteck, sobald die Wartezeit abgelaufen ist.
    pub fn poll(&mut self, now: Instant) -> Option<ViewportRect> {
        let (rect, at) = self.pending?;
        if now.duration_since(at) < self.delay {
            return None;
        }
        self.pending = None;
        Some(rect)
    }

    /// Verwirft ein vorgemerktes Rechteck.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
