//! Exact and nearest-color lookup over a [`Palette`].

use crate::color::Rgb;
use crate::palette::{Palette, PaletteEntry};

/// How a pixel color is resolved to a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only bit-identical colors match; anything else is unresolved.
    #[default]
    Exact,
    /// Minimum Euclidean RGB distance; always resolves.
    Nearest,
}

impl MatchMode {
    /// Map a "guess" flag onto a mode: `true` selects [`MatchMode::Nearest`].
    #[inline]
    pub fn from_guess(guess: bool) -> Self {
        if guess {
            MatchMode::Nearest
        } else {
            MatchMode::Exact
        }
    }
}

/// Color lookups against a borrowed palette.
///
/// All methods are pure and scan the palette front to back, so ties and
/// duplicate colors always resolve to the earliest entry.
#[derive(Debug, Clone, Copy)]
pub struct ColorMatcher<'p> {
    palette: &'p Palette,
}

impl<'p> ColorMatcher<'p> {
    /// Create a matcher over `palette`.
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    /// First entry whose color equals `rgb` exactly.
    ///
    /// Returns `None` when no entry matches; this is an ordinary outcome,
    /// not an error.
    pub fn exact_match(&self, rgb: Rgb) -> Option<&'p PaletteEntry> {
        self.palette.entries().iter().find(|entry| entry.rgb == rgb)
    }

    /// Entry with the smallest Euclidean distance to `rgb`.
    ///
    /// Uses a strictly-less-than comparison, so the first entry reaching
    /// the minimum is kept.
    ///
    /// ```
    /// use block_palette::{Palette, Rgb};
    ///
    /// let palette = Palette::blocks();
    /// let entry = palette.matcher().nearest_match(Rgb::new(1, 2, 3));
    /// assert_eq!(entry.name, "COLOR_BLACK");
    /// ```
    pub fn nearest_match(&self, rgb: Rgb) -> &'p PaletteEntry {
        let entries = self.palette.entries();

        // Linear scan; the palette is small and fixed
        let mut best = &entries[0];
        let mut best_dist = f64::MAX;

        for entry in entries {
            let dist = entry.rgb.distance(rgb);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }

        best
    }

    /// Resolve `rgb` with the given mode.
    ///
    /// [`MatchMode::Nearest`] always yields `Some`; [`MatchMode::Exact`]
    /// yields `None` for colors absent from the palette.
    #[inline]
    pub fn resolve(&self, rgb: Rgb, mode: MatchMode) -> Option<&'p PaletteEntry> {
        match mode {
            MatchMode::Nearest => Some(self.nearest_match(rgb)),
            MatchMode::Exact => self.exact_match(rgb),
        }
    }
}
