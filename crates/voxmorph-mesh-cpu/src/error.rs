use thiserror::Error;
use voxmorph_grid::GridError;

#[derive(Error, Debug)]
pub enum MeshError {
    /// Sequence extraction was handed no grids.
    #[error("empty input: mesh sequence needs at least one grid")]
    EmptyInput,

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("failed to build mesher thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type MeshResult<T> = Result<T, MeshError>;
