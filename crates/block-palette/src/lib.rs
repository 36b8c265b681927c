#![allow(clippy::module_inception)]

//! block-palette: Minecraft map colors with exact and nearest-color lookup
//!
//! This library holds the fixed 58-entry block palette and the lookups used
//! to turn an image pixel into a block name.
//!
//! # Quick Start
//!
//! ```
//! use block_palette::{MatchMode, Palette, Rgb};
//!
//! let palette = Palette::blocks();
//! let matcher = palette.matcher();
//!
//! // Exact lookup: only palette colors resolve
//! let grass = matcher.resolve(Rgb::new(127, 178, 56), MatchMode::Exact);
//! assert_eq!(grass.map(|e| e.name), Some("GRASS"));
//! assert!(matcher.resolve(Rgb::new(1, 2, 3), MatchMode::Exact).is_none());
//!
//! // Nearest lookup: every color resolves
//! let guess = matcher.resolve(Rgb::new(1, 2, 3), MatchMode::Nearest);
//! assert_eq!(guess.map(|e| e.name), Some("COLOR_BLACK"));
//! ```
//!
//! # Matching
//!
//! Both lookups are a linear scan in palette order:
//!
//! - [`ColorMatcher::exact_match`]: first entry with an identical color.
//! - [`ColorMatcher::nearest_match`]: first entry with the minimum
//!   Euclidean distance `sqrt(dr² + dg² + db²)` in plain RGB.
//!
//! When exact matching fails, renderers fall back to the palette's
//! sentinel ([`UNKNOWN`] for the built-in palette).

pub mod color;
pub mod matcher;
pub mod palette;

pub use color::Rgb;
pub use matcher::{ColorMatcher, MatchMode};
pub use palette::{Palette, PaletteEntry, PaletteError, BLOCK_COLORS, UNKNOWN};
