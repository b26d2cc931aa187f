use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::SeriesKind;

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
// Series colours
// ---------------------------------------------------------------------------

/// Fixed colour per plotted series, shared by the plot and the side panel.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    colors: Vec<Color32>,
}

impl Default for SeriesColors {
    fn default() -> Self {
        SeriesColors {
            colors: generate_palette(SeriesKind::ALL.len()),
        }
    }
}

impl SeriesColors {
    pub fn color_for(&self, kind: SeriesKind) -> Color32 {
        self.colors
            .get(kind.index())
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(4).len(), 4);
    }

    #[test]
    fn series_colors_are_distinct() {
        let colors = SeriesColors::default();
        let all: Vec<Color32> = SeriesKind::ALL.iter().map(|&k| colors.color_for(k)).collect();
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }
}
