//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Block colors used across tests
pub mod colors {
    pub const GRASS: [u8; 3] = [127, 178, 56];
    pub const FIRE: [u8; 3] = [255, 0, 0];
    pub const WATER: [u8; 3] = [64, 64, 255];
    pub const SNOW: [u8; 3] = [255, 255, 255];

    /// Not in the palette; its nearest block is COLOR_BLACK
    pub const OFF_PALETTE: [u8; 3] = [1, 2, 3];
}

/// Write a PNG whose pixels are given row by row
pub fn write_png(dir: &Path, name: &str, rows: &[&[[u8; 3]]]) -> PathBuf {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    let img = RgbImage::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]));

    let path = dir.join(name);
    img.save(&path).expect("failed to write PNG fixture");
    path
}

/// Write a single-color PNG of the given size
pub fn write_solid_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let path = dir.join(name);
    img.save(&path).expect("failed to write PNG fixture");
    path
}

/// Write a 1x1 RGBA PNG; alpha should be ignored by the renderer
pub fn write_rgba_png(dir: &Path, name: &str, color: [u8; 3], alpha: u8) -> PathBuf {
    let img = RgbaImage::from_pixel(1, 1, Rgba([color[0], color[1], color[2], alpha]));
    let path = dir.join(name);
    img.save(&path).expect("failed to write PNG fixture");
    path
}

/// Write a file that is not an image
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not an image").expect("failed to write fixture");
    path
}
