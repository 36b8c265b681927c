//! Palette types and the built-in block palette
//!
//! This module provides the ordered [`Palette`] of [`PaletteEntry`] values,
//! the compiled-in Minecraft map colors, and the palette construction error.

mod blocks;
mod error;
mod palette;

pub use blocks::{BLOCK_COLORS, UNKNOWN};
pub use error::PaletteError;
pub use palette::{Palette, PaletteEntry};
