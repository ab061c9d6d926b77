use thiserror::Error;

/// Errors raised while building or validating a voxel grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Extents are zero, disagree with the cell buffer, or are not cubic when required.
    #[error("invalid grid shape {sx}x{sy}x{sz}: {reason}")]
    InvalidGridShape {
        sx: usize,
        sy: usize,
        sz: usize,
        reason: &'static str,
    },
}

pub type GridResult<T> = Result<T, GridError>;
