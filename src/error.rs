use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot save output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl RenderError {
    pub(crate) fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        RenderError::Decode {
            path: path.into(),
            source,
        }
    }
}
