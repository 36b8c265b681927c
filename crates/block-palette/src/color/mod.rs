//! Color type shared by palette entries and image pixels.
//!
//! # Example
//!
//! ```
//! use block_palette::Rgb;
//!
//! let pixel = Rgb::new(127, 178, 56);
//! let other = Rgb::new(127, 178, 57);
//! assert_eq!(other.to_string(), "#7FB239");
//! assert_eq!(pixel.distance(other), 1.0);
//! ```

mod rgb;

pub use rgb::Rgb;
