//! Fixed identity-to-color tables for dot rendering.

use crate::color::Color;

/// Default cell-type colors, in render order. Several labels deliberately
/// share a color with a related label.
pub const DEFAULT_IDENTITY_COLORS: &[(&str, Color)] = &[
    ("NaN", Color::rgb(0.827, 0.827, 0.827)),
    ("Stroma", Color::rgb(0.827, 0.827, 0.827)),
    ("Tumor", Color::rgb(0.502, 0.502, 0.502)),
    ("Monocyte_Stroma", Color::rgb(0.678, 0.643, 0.322)),
    ("Monocyte_Microglia_Stroma", Color::rgb(0.678, 0.643, 0.322)),
    ("Macrophage_Stroma", Color::rgb(0.886, 0.502, 0.463)),
    ("Macrophage_Monocyte_Stroma", Color::rgb(0.886, 0.502, 0.463)),
    ("Microglia_Stroma", Color::rgb(0.392, 0.722, 0.651)),
];

/// Ordered identity → color mapping.
///
/// Identities absent from the table are never rendered; entries without
/// matching cells render nothing. Lookup is by exact label match.
#[derive(Debug, Clone)]
pub struct IdentityPalette {
    entries: Vec<(String, Color)>,
}

impl IdentityPalette {
    pub fn from_entries(entries: Vec<(String, Color)>) -> Self {
        Self { entries }
    }

    /// Color for an identity label, if present.
    pub fn get(&self, identity: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(label, _)| label == identity)
            .map(|(_, color)| *color)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.get(identity).is_some()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(label, color)| (label.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IdentityPalette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_IDENTITY_COLORS
                .iter()
                .map(|(label, color)| (label.to_string(), *color))
                .collect(),
        }
    }
}
