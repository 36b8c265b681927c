//! Pixel access and text grid output.

pub mod pixel_source;
pub mod text_grid;

pub use pixel_source::{PixelGrid, PixelSource};
pub use text_grid::{render_grid, GridStats};
