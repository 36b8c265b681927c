//! Error types for palette operations
//!
//! Palette construction is the only fallible operation in this crate.

use std::fmt;

/// Error type for palette construction.
///
/// Duplicate colors are allowed (lookups resolve them by palette order),
/// so the only structural failure is an empty entry list.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No entries provided
    EmptyPalette,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette cannot be empty"),
        }
    }
}

impl std::error::Error for PaletteError {}
