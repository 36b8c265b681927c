//! mineart - preview images as Minecraft map blocks
//!
//! Turns a raster image into a grid of block names, one per pixel, using
//! the fixed palette from the `block-palette` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
