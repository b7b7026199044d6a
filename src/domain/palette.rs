// Fixed category color table
use super::dataset::Rgba;

/// Color used when rendering a series whose category has no palette entry.
pub const FALLBACK_COLOR: Rgba = Rgba::new(201, 203, 207, 0.7);

const CATEGORY_COLORS: [(&str, Rgba); 4] = [
    ("Gaming", Rgba::new(255, 99, 132, 0.7)),
    ("Educational", Rgba::new(54, 162, 235, 0.7)),
    ("Vlog/Lifestyle", Rgba::new(255, 206, 86, 0.7)),
    ("Short-Form Drama", Rgba::new(75, 192, 192, 0.7)),
];

#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(String, Rgba)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: CATEGORY_COLORS
                .iter()
                .map(|(label, color)| (label.to_string(), *color))
                .collect(),
        }
    }
}

impl Palette {
    /// Exact, case-sensitive lookup. Unknown categories get `None`.
    pub fn color_for(&self, label: &str) -> Option<Rgba> {
        self.entries
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, color)| *color)
    }
}
