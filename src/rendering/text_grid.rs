//! Text grid rendering: one palette label per pixel.
//!
//! Pixels are visited row-major, left to right and top to bottom. Each
//! pixel becomes its label followed by a single space, and every row ends
//! with `\n`. The grid is streamed straight to the writer, so memory use
//! does not grow with image size.

use std::io::{self, Write};

use block_palette::Palette;

use super::PixelSource;
use crate::models::RenderOptions;

/// Counters collected while rendering a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    /// Lines written
    pub rows: u32,
    /// Labels written
    pub tokens: u64,
    /// Pixels that fell back to the sentinel label
    pub unmatched: u64,
}

/// Render `source` as text into `writer`.
///
/// Unresolved pixels (exact mode only) are written as the sentinel's label.
/// An image with zero width or zero height produces no output at all.
///
/// The writer is not flushed; callers wrap it in a `BufWriter` and flush
/// once the grid is complete.
///
/// # Example
///
/// ```
/// use block_palette::{Palette, Rgb};
/// use mineart::models::RenderOptions;
/// use mineart::rendering::{render_grid, PixelGrid};
///
/// let grid = PixelGrid::filled(2, 1, Rgb::new(127, 178, 56));
/// let mut out = Vec::new();
/// render_grid(&grid, &Palette::blocks(), RenderOptions::default(), &mut out).unwrap();
/// assert_eq!(out, b"GRASS GRASS \n");
/// ```
pub fn render_grid<S, W>(
    source: &S,
    palette: &Palette,
    options: RenderOptions,
    writer: &mut W,
) -> io::Result<GridStats>
where
    S: PixelSource + ?Sized,
    W: Write + ?Sized,
{
    let (width, height) = (source.width(), source.height());
    let mut stats = GridStats::default();

    if width == 0 || height == 0 {
        return Ok(stats);
    }

    let matcher = palette.matcher();
    let fallback = options.label.label(palette.unknown());

    for y in 0..height {
        for x in 0..width {
            let rgb = source.pixel(x, y);
            let label = match matcher.resolve(rgb, options.mode) {
                Some(entry) => options.label.label(entry),
                None => {
                    stats.unmatched += 1;
                    tracing::trace!(x, y, color = %rgb, "No exact palette match");
                    fallback
                }
            };
            writer.write_all(label.as_bytes())?;
            writer.write_all(b" ")?;
            stats.tokens += 1;
        }
        writer.write_all(b"\n")?;
        stats.rows += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabelField;
    use crate::rendering::PixelGrid;
    use block_palette::{MatchMode, Rgb};
    use pretty_assertions::assert_eq;

    const GRASS: Rgb = Rgb::new(127, 178, 56);
    const FIRE: Rgb = Rgb::new(255, 0, 0);
    const OFF_PALETTE: Rgb = Rgb::new(1, 2, 3);

    fn render(source: &PixelGrid, label: LabelField, mode: MatchMode) -> (String, GridStats) {
        let mut out = Vec::new();
        let stats = render_grid(
            source,
            &Palette::blocks(),
            RenderOptions::new(label, mode),
            &mut out,
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_single_grass_pixel_names() {
        let grid = PixelGrid::filled(1, 1, GRASS);
        let (text, _) = render(&grid, LabelField::Name, MatchMode::Exact);
        assert_eq!(text, "GRASS \n");
    }

    #[test]
    fn test_single_grass_pixel_abbreviated() {
        let grid = PixelGrid::filled(1, 1, GRASS);
        let (text, _) = render(&grid, LabelField::Abbreviation, MatchMode::Exact);
        assert_eq!(text, "ABBR. \n");
    }

    #[test]
    fn test_unmatched_pixel_uses_sentinel() {
        let grid = PixelGrid::filled(1, 1, OFF_PALETTE);

        let (text, stats) = render(&grid, LabelField::Name, MatchMode::Exact);
        assert_eq!(text, "UNKNOWN \n");
        assert_eq!(stats.unmatched, 1);

        let (text, _) = render(&grid, LabelField::Abbreviation, MatchMode::Exact);
        assert_eq!(text, "UNKN. \n");
    }

    #[test]
    fn test_unmatched_pixel_guessed() {
        let grid = PixelGrid::filled(1, 1, OFF_PALETTE);
        let (text, stats) = render(&grid, LabelField::Name, MatchMode::Nearest);
        assert_eq!(text, "COLOR_BLACK \n");
        assert_eq!(stats.unmatched, 0);
    }

    #[test]
    fn test_row_major_order() {
        let grid = PixelGrid::new(2, 2, vec![GRASS, FIRE, OFF_PALETTE, GRASS]).unwrap();
        let (text, stats) = render(&grid, LabelField::Name, MatchMode::Exact);
        assert_eq!(text, "GRASS FIRE \nUNKNOWN GRASS \n");
        assert_eq!(
            stats,
            GridStats {
                rows: 2,
                tokens: 4,
                unmatched: 1
            }
        );
    }

    #[test]
    fn test_dimensions_shape_output() {
        for (width, height) in [(1, 1), (3, 1), (1, 4), (5, 3), (7, 7)] {
            let grid = PixelGrid::filled(width, height, FIRE);
            let (text, _) = render(&grid, LabelField::Name, MatchMode::Exact);

            let lines: Vec<&str> = text.split_terminator('\n').collect();
            assert_eq!(lines.len(), height as usize, "{width}x{height}");
            for line in lines {
                assert!(line.ends_with(' '));
                assert_eq!(line.split_whitespace().count(), width as usize);
            }
        }
    }

    #[test]
    fn test_empty_image_yields_no_lines() {
        for (width, height) in [(0, 0), (0, 3), (3, 0)] {
            let grid = PixelGrid::new(width, height, Vec::new()).unwrap();
            let (text, stats) = render(&grid, LabelField::Name, MatchMode::Nearest);
            assert_eq!(text, "");
            assert_eq!(stats, GridStats::default());
        }
    }

    #[test]
    fn test_write_error_propagates() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let grid = PixelGrid::filled(2, 2, GRASS);
        let result = render_grid(
            &grid,
            &Palette::blocks(),
            RenderOptions::default(),
            &mut FailingWriter,
        );
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
