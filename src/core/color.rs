//! RGB-Farbe eines Kontrollpunkts.

use serde::{Deserialize, Serialize};

/// Lineare RGB-Farbe, Kanäle üblicherweise im Bereich 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Rot-Kanal
    pub r: f32,
    /// Grün-Kanal
    pub g: f32,
    /// Blau-Kanal
    pub b: f32,
}

impl Rgb {
    /// Erstellt eine Farbe aus drei Kanälen.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Erstellt eine Farbe aus einem `[r, g, b]`-Array (z.B. aus einem Color-Picker).
    pub fn from_array(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Gibt die Kanäle als `[r, g, b]` zurück.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantisiert auf 8 Bit pro Kanal (für Renderer-Farben).
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_rgb8_clamps_out_of_range_channels() {
        let color = Rgb::new(-0.5, 0.5, 1.5);
        assert_eq!(color.to_rgb8(), [0, 128, 255]);
    }
}
