use block_palette::{MatchMode, PaletteEntry};

/// Which field of a palette entry is written for each pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelField {
    /// Full block name, e.g. `GRASS`
    #[default]
    Name,
    /// Short label, e.g. `ABBR.`
    Abbreviation,
}

impl LabelField {
    /// Map an "abbreviate" flag onto a field: `true` selects abbreviations
    pub fn from_abbreviate(abbreviate: bool) -> Self {
        if abbreviate {
            LabelField::Abbreviation
        } else {
            LabelField::Name
        }
    }

    /// The selected field of `entry`
    pub fn label(self, entry: &PaletteEntry) -> &'static str {
        match self {
            LabelField::Name => entry.name,
            LabelField::Abbreviation => entry.abbreviation,
        }
    }
}

/// Options controlling how an image is rendered to text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Field emitted per pixel
    pub label: LabelField,
    /// Exact or nearest-color matching
    pub mode: MatchMode,
}

impl RenderOptions {
    pub fn new(label: LabelField, mode: MatchMode) -> Self {
        Self { label, mode }
    }

    /// Build options from the two command-line switches
    pub fn from_flags(abbreviate: bool, guess: bool) -> Self {
        Self::new(
            LabelField::from_abbreviate(abbreviate),
            MatchMode::from_guess(guess),
        )
    }
}
