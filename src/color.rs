use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Dataset colour cycle
// ---------------------------------------------------------------------------

/// The classic "tab10" cycle; the first datasets always get these.
pub const DATASET_COLORS: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];

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

/// `n` distinct dataset colours: the fixed cycle when it is long enough,
/// evenly spaced hues otherwise.
pub fn dataset_palette(n: usize) -> Vec<Color32> {
    if n <= DATASET_COLORS.len() {
        DATASET_COLORS[..n].to_vec()
    } else {
        generate_palette(n)
    }
}

// ---------------------------------------------------------------------------
// Color mapping: dataset label → Color32
// ---------------------------------------------------------------------------

/// Assigns each label a distinct colour, in the order given. Labels must be
/// unique; a repeated label keeps only its last colour.
///
/// The dashboard builds it from the whole panel catalog so a panel keeps its
/// colour whatever else is selected.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let palette = dataset_palette(labels.len());
        let mapping = labels.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a dataset label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_datasets_use_fixed_cycle() {
        let p = dataset_palette(6);
        assert_eq!(p[0], Color32::from_rgb(0x1f, 0x77, 0xb4));
        assert_eq!(p[5], Color32::from_rgb(0x8c, 0x56, 0x4b));
    }

    #[test]
    fn large_palettes_stay_distinct() {
        let p = dataset_palette(14);
        assert_eq!(p.len(), 14);
        for i in 0..p.len() {
            for j in i + 1..p.len() {
                assert_ne!(p[i], p[j], "colours {i} and {j} collide");
            }
        }
    }

    #[test]
    fn unknown_label_gets_default() {
        let map = ColorMap::new(["Panneau 1", "Panneau 2"]);
        assert_ne!(map.color_for("Panneau 1"), map.color_for("Panneau 2"));
        assert_eq!(map.color_for("Panneau 9"), Color32::GRAY);
    }
}
