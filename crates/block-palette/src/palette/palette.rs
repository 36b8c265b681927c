//! Palette struct holding ordered color entries and a fallback sentinel.

use super::blocks::{BLOCK_COLORS, UNKNOWN};
use super::error::PaletteError;
use crate::color::Rgb;
use crate::matcher::ColorMatcher;

/// One fixed color definition.
///
/// Entries are plain static data: a short label, a numeric id, the display
/// name and the RGB value that pixels are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Short label, emitted in abbreviated output
    pub abbreviation: &'static str,
    /// Numeric block id
    pub id: u8,
    /// Full display name, emitted by default
    pub name: &'static str,
    /// Color the entry stands for
    pub rgb: Rgb,
}

impl PaletteEntry {
    /// Create a new palette entry.
    pub const fn new(abbreviation: &'static str, id: u8, name: &'static str, rgb: Rgb) -> Self {
        Self {
            abbreviation,
            id,
            name,
            rgb,
        }
    }
}

/// An ordered, non-empty list of palette entries plus a sentinel.
///
/// The sentinel is not part of [`entries()`](Palette::entries), so it can
/// never be returned by a lookup; renderers display it when exact matching
/// fails. Duplicate colors are accepted and resolved by position: the
/// earliest entry wins.
///
/// A `Palette` is built once and then only borrowed.
///
/// # Example
///
/// ```
/// use block_palette::{Palette, Rgb};
///
/// let palette = Palette::blocks();
/// assert_eq!(palette.len(), 58);
///
/// let grass = palette.matcher().exact_match(Rgb::new(127, 178, 56)).unwrap();
/// assert_eq!(grass.name, "GRASS");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    unknown: PaletteEntry,
}

impl Palette {
    /// Create a palette from an ordered entry list and a sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `entries` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use block_palette::{Palette, PaletteEntry, Rgb, UNKNOWN};
    ///
    /// let entries = [
    ///     PaletteEntry::new("BLK", 1, "BLACK", Rgb::new(0, 0, 0)),
    ///     PaletteEntry::new("WHT", 2, "WHITE", Rgb::new(255, 255, 255)),
    /// ];
    /// let palette = Palette::new(&entries, UNKNOWN).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn new(entries: &[PaletteEntry], unknown: PaletteEntry) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self {
            entries: entries.to_vec(),
            unknown,
        })
    }

    /// The built-in Minecraft map palette with the `UNKNOWN` sentinel.
    pub fn blocks() -> Self {
        Self {
            entries: BLOCK_COLORS.to_vec(),
            unknown: UNKNOWN,
        }
    }

    /// Returns the number of entries, excluding the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    ///
    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The fallback entry used when no match is found.
    #[inline]
    pub fn unknown(&self) -> &PaletteEntry {
        &self.unknown
    }

    /// Entry at the given position, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PaletteEntry> {
        self.entries.get(idx)
    }

    /// First entry carrying the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// A matcher borrowing this palette.
    #[inline]
    pub fn matcher(&self) -> ColorMatcher<'_> {
        ColorMatcher::new(self)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::blocks()
    }
}
