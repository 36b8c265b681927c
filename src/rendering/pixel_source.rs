//! Read access to decoded image pixels.
//!
//! The renderer only needs dimensions and per-coordinate colors, so it works
//! against the [`PixelSource`] trait rather than a concrete image type.

use block_palette::Rgb;
use image::RgbImage;

/// A rectangular grid of opaque RGB pixels.
///
/// Implementations must return a color for every `(x, y)` with
/// `x < width()` and `y < height()`.
pub trait PixelSource {
    /// Number of columns
    fn width(&self) -> u32;

    /// Number of rows
    fn height(&self) -> u32;

    /// Color at column `x`, row `y`
    fn pixel(&self, x: u32, y: u32) -> Rgb;
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from_bytes(self.get_pixel(x, y).0)
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        (**self).pixel(x, y)
    }
}

/// In-memory pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Wrap row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A grid filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
