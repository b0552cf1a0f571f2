use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::AngleValue;

// ---------------------------------------------------------------------------
// Fixed channel colours
// ---------------------------------------------------------------------------

/// Line colour for the left plate in every chart.
pub const LEFT_COLOR: Color32 = Color32::from_rgb(66, 133, 244);
/// Line colour for the right plate in every chart.
pub const RIGHT_COLOR: Color32 = Color32::from_rgb(234, 103, 62);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: angle → Color32
// ---------------------------------------------------------------------------

/// Maps each angle of the current analysis to a distinct accent colour, used
/// for section headings and the side-panel angle list.
#[derive(Debug, Clone, Default)]
pub struct AnglePalette {
    mapping: BTreeMap<AngleValue, Color32>,
}

impl AnglePalette {
    /// Build a palette for the given angles (in display order).
    pub fn new(angles: &[AngleValue]) -> Self {
        let palette = generate_palette(angles.len());
        let mapping = angles
            .iter()
            .cloned()
            .zip(palette)
            .collect();
        AnglePalette { mapping }
    }

    /// Look up the accent colour for an angle.
    pub fn color_for(&self, angle: &AngleValue) -> Color32 {
        self.mapping.get(angle).copied().unwrap_or(Color32::GRAY)
    }
}
