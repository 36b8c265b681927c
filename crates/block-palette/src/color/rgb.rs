//! 8-bit RGB color type
//!
//! Palette entries and decoded image pixels share this representation, so
//! exact matching is a plain byte comparison.

use std::fmt;

/// An opaque 8-bit RGB color.
///
/// Channels are stored as `u8`, so every value is within 0..=255 by
/// construction. Alpha is not represented: images are flattened to RGB
/// before their pixels reach the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    ///
    /// # Example
    /// ```
    /// use block_palette::Rgb;
    /// let grass = Rgb::new(127, 178, 56);
    /// assert_eq!(grass.g, 178);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean distance between two colors in RGB space.
    ///
    /// Computed as `sqrt(dr² + dg² + db²)` in `f64`. The result is symmetric
    /// and zero only for identical colors.
    ///
    /// # Example
    /// ```
    /// use block_palette::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(black.distance(red), 255.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance, without the square root.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> f64 {
        let dr = f64::from(other.r) - f64::from(self.r);
        let dg = f64::from(other.g) - f64::from(self.g);
        let db = f64::from(other.b) - f64::from(self.b);
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Formats as an uppercase `#RRGGBB` hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
