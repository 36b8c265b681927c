use std::fs::{self, Permissions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use block_palette::Palette;
use image::RgbImage;
use tempfile::Builder;

use crate::error::RenderError;
use crate::models::RenderOptions;
use crate::rendering::{render_grid, GridStats, PixelSource};

/// Where the rendered grid is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or replaced once rendering succeeds
    File(PathBuf),
}

impl OutputTarget {
    /// `File` when a path is given, `Stdout` otherwise
    pub fn from_save_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

/// High-level render service: decode an image and write its text grid
#[derive(Debug, Clone, Default)]
pub struct RenderService {
    palette: Palette,
}

impl RenderService {
    /// Create a service that labels pixels from `palette`.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Decode an image file and flatten it to opaque 8-bit RGB.
    ///
    /// The format is detected by the decoder. Alpha is dropped, not
    /// composited.
    pub fn load_image(&self, path: &Path) -> Result<RgbImage, RenderError> {
        let decoded = image::open(path).map_err(|e| RenderError::decode(path, e))?;
        let rgb = decoded.to_rgb8();
        tracing::debug!(
            path = %path.display(),
            width = rgb.width(),
            height = rgb.height(),
            "Decoded image"
        );
        Ok(rgb)
    }

    /// Decode `input` and write its grid to `target`.
    ///
    /// The image is fully decoded before the output is touched, so a bad
    /// input never creates or truncates the target file. A reader closing
    /// stdout early (`mineart img.png | head -1`) ends the render quietly.
    pub fn render(
        &self,
        input: &Path,
        options: RenderOptions,
        target: &OutputTarget,
    ) -> Result<GridStats, RenderError> {
        let image = self.load_image(input)?;

        match target {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                ignore_closed_pipe(self.render_to_writer(&image, options, stdout.lock()))
            }
            OutputTarget::File(path) => self.render_to_file(&image, options, path),
        }
    }

    /// Render through a buffered writer and flush it.
    pub fn render_to_writer<S, W>(
        &self,
        source: &S,
        options: RenderOptions,
        writer: W,
    ) -> Result<GridStats, RenderError>
    where
        S: PixelSource + ?Sized,
        W: Write,
    {
        let mut writer = BufWriter::new(writer);
        let stats = render_grid(source, &self.palette, options, &mut writer)?;
        writer.flush()?;

        tracing::debug!(
            rows = stats.rows,
            tokens = stats.tokens,
            unmatched = stats.unmatched,
            "Rendered grid"
        );
        Ok(stats)
    }

    /// Render into `path` atomically.
    ///
    /// The grid goes to a temporary file next to the destination, which
    /// replaces it only after everything has been written. On failure the
    /// temporary file is removed and the destination is left as it was.
    ///
    /// An existing `path` is followed through symlinks and keeps its
    /// permissions. A new file gets the same mode as any other file the
    /// process creates.
    pub fn render_to_file<S>(
        &self,
        source: &S,
        options: RenderOptions,
        path: &Path,
    ) -> Result<GridStats, RenderError>
    where
        S: PixelSource + ?Sized,
    {
        let (destination, permissions) = resolve_destination(path)?;
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Requested at open time, so the umask still applies
            builder.permissions(Permissions::from_mode(0o666));
        }

        let mut file = builder.tempfile_in(dir)?;
        let stats = self.render_to_writer(source, options, file.as_file_mut())?;
        if let Some(permissions) = permissions {
            file.as_file().set_permissions(permissions)?;
        }
        file.as_file().sync_all()?;

        file.persist(&destination)?;
        tracing::info!(path = %destination.display(), rows = stats.rows, "Saved output");
        Ok(stats)
    }
}

/// The file a save to `path` should replace, with its current permissions.
///
/// A missing `path` (including a dangling symlink) is saved as a new file
/// at `path` itself.
fn resolve_destination(path: &Path) -> io::Result<(PathBuf, Option<Permissions>)> {
    match fs::canonicalize(path) {
        Ok(resolved) => {
            let permissions = fs::metadata(&resolved)?.permissions();
            Ok((resolved, Some(permissions)))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((path.to_path_buf(), None)),
        Err(e) => Err(e),
    }
}

/// Treat a closed stdout pipe as the end of output rather than a failure.
fn ignore_closed_pipe(result: Result<GridStats, RenderError>) -> Result<GridStats, RenderError> {
    match result {
        Err(RenderError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed by reader");
            Ok(GridStats::default())
        }
        other => other,
    }
}
