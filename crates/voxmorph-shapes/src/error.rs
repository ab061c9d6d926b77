use std::path::PathBuf;

use thiserror::Error;
use voxmorph_grid::GridError;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("failed to read shape config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse shape config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid shape parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },
    #[error("density fields differ in size ({a} vs {b})")]
    SizeMismatch { a: usize, b: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type ShapeResult<T> = Result<T, ShapeError>;

pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> ShapeError {
    ShapeError::InvalidParam {
        name,
        reason: reason.into(),
    }
}
